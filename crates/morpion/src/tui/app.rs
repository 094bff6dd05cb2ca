//! Application state and logic.

use super::input::{GameIntent, game_intent, move_cursor};
use crate::config::MorpionConfig;
use anyhow::Result;
use crossterm::event::KeyCode;
use morpion_core::{GameMode, Mark, Outcome, Position, Scoreboard, SessionState};
use rand::rngs::StdRng;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument};

/// How often the event loop wakes when nothing is scheduled.
pub const IDLE_POLL: Duration = Duration::from_millis(100);

/// Screen currently shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Mode selection with the highlighted option.
    Menu(GameMode),
    /// A session in progress.
    Game,
}

/// What the event loop should do after handling a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Restore the terminal and exit.
    Quit,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    screen: Screen,
    session: SessionState,
    cursor: Position,
    computer_due: Option<Instant>,
    reply_delay: Duration,
    opening_delay: Duration,
    rng: StdRng,
}

impl App {
    /// Creates the application on the mode menu.
    #[instrument(skip(config))]
    pub fn new(config: &MorpionConfig) -> Self {
        Self {
            screen: Screen::Menu(GameMode::default()),
            session: SessionState::new(GameMode::default()),
            cursor: Position::Center,
            computer_due: None,
            reply_delay: config.computer_delay(),
            opening_delay: config.opening_delay(),
            rng: config.rng(),
        }
    }

    /// Current screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Current session.
    pub fn session(&self) -> &SessionState {
        &self.session
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether a computer move is scheduled.
    pub fn computer_pending(&self) -> bool {
        self.computer_due.is_some()
    }

    /// Starts a fresh session in `mode` and shows the board.
    #[instrument(skip(self))]
    pub fn start(&mut self, mode: GameMode) {
        info!(mode = mode.label(), "Entering game");
        self.session = SessionState::new(mode);
        self.cursor = Position::Center;
        self.computer_due = None;
        self.screen = Screen::Game;
    }

    /// Handles a key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode, now: Instant) -> AppAction {
        match self.screen {
            Screen::Menu(selected) => self.handle_menu_key(selected, key),
            Screen::Game => self.handle_game_key(key, now),
        }
    }

    fn handle_menu_key(&mut self, selected: GameMode, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Up | KeyCode::Down | KeyCode::Tab => {
                let other = match selected {
                    GameMode::Friend => GameMode::Computer,
                    GameMode::Computer => GameMode::Friend,
                };
                self.screen = Screen::Menu(other);
            }
            KeyCode::Char('1') => self.start(GameMode::Friend),
            KeyCode::Char('2') => self.start(GameMode::Computer),
            KeyCode::Enter => self.start(selected),
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            _ => {}
        }
        AppAction::Continue
    }

    fn handle_game_key(&mut self, key: KeyCode, now: Instant) -> AppAction {
        match game_intent(key) {
            GameIntent::Cursor(arrow) => self.cursor = move_cursor(self.cursor, arrow),
            GameIntent::PlayCursor => self.play(self.cursor, now),
            GameIntent::Play(pos) => {
                self.cursor = pos;
                self.play(pos, now);
            }
            GameIntent::NewRound => self.new_round(now),
            GameIntent::Menu => {
                self.computer_due = None;
                self.screen = Screen::Menu(*self.session.mode());
            }
            GameIntent::Quit => return AppAction::Quit,
            GameIntent::Ignore => {}
        }
        AppAction::Continue
    }

    /// Applies a human move; invalid cells are ignored.
    fn play(&mut self, pos: Position, now: Instant) {
        match self.session.apply_human_move(pos) {
            Ok(outcome) => {
                debug!(?pos, ?outcome, "Human move applied");
                self.schedule_computer(now + self.reply_delay);
            }
            Err(e) => debug!(error = %e, ?pos, "Move ignored"),
        }
    }

    fn new_round(&mut self, now: Instant) {
        self.session.new_round();
        self.computer_due = None;
        self.schedule_computer(now + self.opening_delay);
    }

    fn schedule_computer(&mut self, due: Instant) {
        if self.session.computer_to_move() {
            debug!("Computer move scheduled");
            self.computer_due = Some(due);
        }
    }

    /// Plays the scheduled computer move once its pause has elapsed.
    ///
    /// # Errors
    ///
    /// Propagates engine precondition violations, which indicate a bug.
    #[instrument(skip(self))]
    pub fn tick(&mut self, now: Instant) -> Result<()> {
        match self.computer_due {
            Some(due) if now >= due => {
                self.computer_due = None;
                if let Some(candidate) = self.session.advance(&mut self.rng)? {
                    debug!(position = ?candidate.position, score = %candidate.score, "Computer moved");
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// How long the event loop may block waiting for input.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.computer_due {
            Some(due) => due.saturating_duration_since(now).min(IDLE_POLL),
            None => IDLE_POLL,
        }
    }

    /// Status line for the game screen.
    pub fn status(&self) -> String {
        let mode = *self.session.mode();
        match self.session.outcome() {
            Outcome::InProgress if self.session.computer_to_move() => {
                "Computer is thinking...".to_string()
            }
            Outcome::InProgress => format!("{} to move", side_name(mode, *self.session.to_move())),
            outcome => format!(
                "{} Press r for a new round.",
                result_label(mode, outcome).unwrap_or_default()
            ),
        }
    }
}

/// Who plays `mark` in `mode`.
pub fn side_name(mode: GameMode, mark: Mark) -> &'static str {
    match (mode, mark) {
        (_, Mark::X) => "Player X",
        (GameMode::Friend, Mark::O) => "Player O",
        (GameMode::Computer, Mark::O) => "Computer",
    }
}

/// Score label for one side, e.g. `Player X: 2` or `Computer: 1`.
pub fn score_label(mode: GameMode, mark: Mark, scores: &Scoreboard) -> String {
    format!("{}: {}", side_name(mode, mark), scores.wins(mark))
}

/// Result banner once a round is decided.
pub fn result_label(mode: GameMode, outcome: &Outcome) -> Option<&'static str> {
    match (mode, outcome.winner()) {
        (_, None) if *outcome == Outcome::Draw => Some("Draw!"),
        (_, None) => None,
        (GameMode::Friend, Some(Mark::X)) => Some("X won!"),
        (GameMode::Friend, Some(Mark::O)) => Some("O won!"),
        (GameMode::Computer, Some(Mark::X)) => Some("Player won!"),
        (GameMode::Computer, Some(Mark::O)) => Some("Computer won!"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        let config = MorpionConfig::default().with_seed(Some(17));
        App::new(&config)
    }

    #[test]
    fn test_menu_shortcuts_start_modes() {
        let now = Instant::now();
        let mut app = app();
        assert_eq!(app.screen(), Screen::Menu(GameMode::Computer));
        app.handle_key(KeyCode::Up, now);
        assert_eq!(app.screen(), Screen::Menu(GameMode::Friend));
        app.handle_key(KeyCode::Char('2'), now);
        assert_eq!(app.screen(), Screen::Game);
        assert_eq!(*app.session().mode(), GameMode::Computer);
    }

    #[test]
    fn test_computer_replies_after_pause() {
        let now = Instant::now();
        let mut app = app();
        app.start(GameMode::Computer);
        app.handle_key(KeyCode::Char('7'), now);
        assert!(app.computer_pending());
        assert_eq!(app.status(), "Computer is thinking...");

        app.tick(now).unwrap();
        assert_eq!(app.session().board().mark_count(), 1);

        app.tick(now + Duration::from_millis(700)).unwrap();
        assert!(!app.computer_pending());
        assert_eq!(app.session().board().mark_count(), 2);
        assert_eq!(app.status(), "Player X to move");
    }

    #[test]
    fn test_occupied_cell_is_ignored() {
        let now = Instant::now();
        let mut app = app();
        app.start(GameMode::Friend);
        app.handle_key(KeyCode::Enter, now);
        let before = app.session().clone();
        app.handle_key(KeyCode::Char(' '), now);
        assert_eq!(app.session(), &before);
        assert_eq!(app.status(), "Player O to move");
    }

    #[test]
    fn test_escape_returns_to_menu() {
        let now = Instant::now();
        let mut app = app();
        app.start(GameMode::Friend);
        assert_eq!(app.handle_key(KeyCode::Esc, now), AppAction::Continue);
        assert_eq!(app.screen(), Screen::Menu(GameMode::Friend));
        assert_eq!(app.handle_key(KeyCode::Char('q'), now), AppAction::Quit);
    }

    #[test]
    fn test_poll_timeout_tracks_deadline() {
        let now = Instant::now();
        let mut app = app();
        assert_eq!(app.poll_timeout(now), IDLE_POLL);
        app.start(GameMode::Computer);
        app.handle_key(KeyCode::Char('5'), now);
        assert_eq!(app.poll_timeout(now + Duration::from_millis(650)), Duration::from_millis(50));
    }

    #[test]
    fn test_labels() {
        let mut scores = Scoreboard::default();
        assert_eq!(score_label(GameMode::Computer, Mark::O, &scores), "Computer: 0");
        scores = {
            let mut session = SessionState::new(GameMode::Friend);
            for index in [0, 3, 1, 4, 2] {
                session.apply_human_index(index).unwrap();
            }
            *session.scores()
        };
        assert_eq!(score_label(GameMode::Friend, Mark::X, &scores), "Player X: 1");
        assert_eq!(score_label(GameMode::Friend, Mark::O, &scores), "Player O: 0");
        assert_eq!(result_label(GameMode::Computer, &Outcome::Draw), Some("Draw!"));
        assert_eq!(result_label(GameMode::Friend, &Outcome::InProgress), None);
    }
}
