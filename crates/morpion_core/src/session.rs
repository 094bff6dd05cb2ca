//! Session controller: turn order, rounds and scores.
//!
//! [`SessionState`] is a plain value owned by whoever drives the game (the
//! terminal UI, the self-play command, a test). It knows nothing about
//! rendering or timing; the caller decides when to call [`SessionState::advance`].

use crate::engine::{EngineError, MoveCandidate, best_move};
use crate::rules::{Line, Outcome, evaluate};
use crate::{Board, Cell, Mark, Position};
use derive_getters::Getters;
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Who sits on the O side.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
pub enum GameMode {
    /// Two humans share the board.
    Friend,
    /// The human plays X against the engine playing O.
    #[default]
    Computer,
}

impl GameMode {
    /// Returns the display label for this mode.
    #[instrument]
    pub fn label(self) -> &'static str {
        match self {
            Self::Friend => "Friend",
            Self::Computer => "Computer",
        }
    }
}

/// Rejected human move intents. The session is unchanged after any of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Index outside 0-8.
    #[display("cell index {_0} is out of range (must be 0-8)")]
    OutOfRange(#[error(not(source))] usize),
    /// Target cell already holds a mark.
    #[display("{_0} is already occupied")]
    CellOccupied(#[error(not(source))] Position),
    /// It is the computer's turn.
    #[display("it is {_0}'s turn")]
    NotYourTurn(#[error(not(source))] Mark),
    /// The round is decided.
    #[display("the round is over")]
    GameOver,
}

/// Rounds won by each mark and rounds drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total decided rounds.
    pub fn rounds(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    fn record(&mut self, outcome: &Outcome) {
        match outcome.winner() {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None if *outcome == Outcome::Draw => self.draws += 1,
            None => {}
        }
    }
}

/// Snapshot handed to the presentation layer after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionView {
    /// Current board.
    pub board: Board,
    /// Evaluation of the board.
    pub outcome: Outcome,
    /// Completed line to highlight, if any.
    pub winning_line: Option<Line>,
    /// Mark to play next.
    pub to_move: Mark,
    /// Running scores.
    pub scores: Scoreboard,
    /// Session mode.
    pub mode: GameMode,
    /// 1-based round number.
    pub round: u32,
}

/// Complete state of a play session across rounds.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionState {
    /// Session mode.
    mode: GameMode,
    /// The board of the current round.
    board: Board,
    /// Mark to play next.
    to_move: Mark,
    /// Mark that opened the current round.
    starting: Mark,
    /// Evaluation after the latest move.
    outcome: Outcome,
    /// Running scores.
    scores: Scoreboard,
    /// 1-based round number.
    round: u32,
}

impl SessionState {
    /// Starts a session at round 1 with X to move.
    #[instrument]
    pub fn new(mode: GameMode) -> Self {
        info!(mode = mode.label(), "Starting session");
        Self {
            mode,
            board: Board::new(),
            to_move: Mark::X,
            starting: Mark::X,
            outcome: Outcome::InProgress,
            scores: Scoreboard::default(),
            round: 1,
        }
    }

    /// Whether the engine should play next.
    pub fn computer_to_move(&self) -> bool {
        self.mode == GameMode::Computer
            && self.outcome == Outcome::InProgress
            && self.to_move == Mark::O
    }

    /// Applies a human move given as a raw board index.
    ///
    /// # Errors
    ///
    /// [`MoveError::OutOfRange`] for indices above 8, otherwise as
    /// [`SessionState::apply_human_move`].
    #[instrument(skip(self), fields(round = self.round))]
    pub fn apply_human_index(&mut self, index: usize) -> Result<Outcome, MoveError> {
        let pos = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        self.apply_human_move(pos)
    }

    /// Applies a human move for the side to move.
    ///
    /// # Errors
    ///
    /// Rejects the move without changing state when the round is over, when
    /// the computer is to move, or when the cell is occupied.
    #[instrument(skip(self), fields(round = self.round, mark = %self.to_move))]
    pub fn apply_human_move(&mut self, pos: Position) -> Result<Outcome, MoveError> {
        if self.outcome.is_decided() {
            return Err(MoveError::GameOver);
        }
        if self.computer_to_move() {
            return Err(MoveError::NotYourTurn(self.to_move));
        }
        if !self.board.is_empty(pos) {
            return Err(MoveError::CellOccupied(pos));
        }
        Ok(self.place(pos))
    }

    /// Plays the computer's move if it is the computer's turn.
    ///
    /// Returns `Ok(None)` when there is nothing to do.
    ///
    /// # Errors
    ///
    /// Propagates [`EngineError`], which only happens if the session's own
    /// bookkeeping is broken.
    #[instrument(skip(self, rng), fields(round = self.round))]
    pub fn advance<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
    ) -> Result<Option<MoveCandidate>, EngineError> {
        if !self.computer_to_move() {
            return Ok(None);
        }
        let candidate = best_move(&mut self.board, rng)?;
        self.place(candidate.position);
        Ok(Some(candidate))
    }

    /// Clears the board for the next round. The opening mark alternates
    /// between rounds; scores carry over.
    #[instrument(skip(self), fields(round = self.round))]
    pub fn new_round(&mut self) {
        self.board = Board::new();
        self.starting = self.starting.opponent();
        self.to_move = self.starting;
        self.outcome = Outcome::InProgress;
        self.round += 1;
        info!(round = self.round, starting = %self.starting, "New round");
    }

    /// Snapshot for rendering.
    pub fn view(&self) -> SessionView {
        SessionView {
            board: self.board,
            outcome: self.outcome,
            winning_line: self.outcome.line(),
            to_move: self.to_move,
            scores: self.scores,
            mode: self.mode,
            round: self.round,
        }
    }

    fn place(&mut self, pos: Position) -> Outcome {
        let mark = self.to_move;
        self.board.set(pos, Cell::Marked(mark));
        self.outcome = evaluate(&self.board);
        debug!(?pos, %mark, outcome = ?self.outcome, "Mark placed");

        if self.outcome.is_decided() {
            self.scores.record(&self.outcome);
            info!(outcome = ?self.outcome, round = self.round, "Round decided");
        } else {
            self.to_move = mark.opponent();
        }
        self.outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_friend_mode_alternates_marks() {
        let mut session = SessionState::new(GameMode::Friend);
        session.apply_human_move(Position::Center).unwrap();
        assert_eq!(*session.to_move(), Mark::O);
        session.apply_human_move(Position::TopLeft).unwrap();
        assert_eq!(session.board().get(Position::TopLeft), Cell::Marked(Mark::O));
        assert_eq!(*session.to_move(), Mark::X);
    }

    #[test]
    fn test_rejections_leave_state_unchanged() {
        let mut session = SessionState::new(GameMode::Computer);
        session.apply_human_move(Position::Center).unwrap();
        let before = session.clone();

        assert_eq!(
            session.apply_human_move(Position::TopLeft),
            Err(MoveError::NotYourTurn(Mark::O))
        );
        assert_eq!(session.apply_human_index(9), Err(MoveError::OutOfRange(9)));
        assert_eq!(session, before);

        let mut rng = StdRng::seed_from_u64(3);
        session.advance(&mut rng).unwrap().unwrap();
        assert_eq!(
            session.apply_human_move(Position::Center),
            Err(MoveError::CellOccupied(Position::Center))
        );
    }

    #[test]
    fn test_advance_is_noop_on_human_turn() {
        let mut session = SessionState::new(GameMode::Computer);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(session.advance(&mut rng), Ok(None));

        let mut friends = SessionState::new(GameMode::Friend);
        friends.apply_human_move(Position::Center).unwrap();
        assert_eq!(friends.advance(&mut rng), Ok(None));
    }

    #[test]
    fn test_win_freezes_round_and_scores() {
        let mut session = SessionState::new(GameMode::Friend);
        for index in [0, 3, 1, 4, 2] {
            session.apply_human_index(index).unwrap();
        }
        assert_eq!(session.outcome().winner(), Some(Mark::X));
        assert_eq!(session.view().winning_line.unwrap().indices(), [0, 1, 2]);
        assert_eq!(*session.scores().x_wins(), 1);
        assert_eq!(session.apply_human_index(8), Err(MoveError::GameOver));
    }

    #[test]
    fn test_new_round_alternates_starter() {
        let mut session = SessionState::new(GameMode::Friend);
        assert_eq!(*session.starting(), Mark::X);
        session.new_round();
        assert_eq!(*session.starting(), Mark::O);
        assert_eq!(*session.to_move(), Mark::O);
        assert_eq!(*session.round(), 2);
        session.new_round();
        assert_eq!(*session.to_move(), Mark::X);
        assert_eq!(*session.board(), Board::new());
    }

    #[test]
    fn test_computer_opens_when_o_starts() {
        let mut session = SessionState::new(GameMode::Computer);
        session.new_round();
        assert!(session.computer_to_move());
        assert_eq!(
            session.apply_human_move(Position::Center),
            Err(MoveError::NotYourTurn(Mark::O))
        );
    }
}
