//! Terminal UI for morpion

mod app;
mod input;
mod ui;

pub use app::{App, AppAction, Screen, result_label, score_label, side_name};

use crate::config::MorpionConfig;
use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use morpion_core::GameMode;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::time::Instant;
use tracing::{error, info, instrument};

/// Run the terminal UI until the player quits.
///
/// Starts on the mode menu unless `mode` is given.
pub fn run_tui(config: &MorpionConfig, mode: Option<GameMode>) -> Result<()> {
    // Setup logging to file to avoid interfering with TUI
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("Failed to create log file {}", config.log_file().display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init(); // Don't panic if already initialized

    info!(config = ?config, "Starting Morpion TUI");

    let mut app = App::new(config);
    if let Some(mode) = mode {
        app.start(mode);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Game loop error");
    }
    info!("Morpion TUI exited");
    res
}

/// Draw, wait for a key or the computer's deadline, repeat.
#[instrument(skip_all)]
fn run_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if event::poll(app.poll_timeout(Instant::now()))? {
            if let Event::Key(key) = event::read()? {
                // Skip key release events (crossterm fires both press and release).
                if key.kind != KeyEventKind::Release
                    && app.handle_key(key.code, Instant::now()) == AppAction::Quit
                {
                    info!("User quit");
                    return Ok(());
                }
            }
        }

        app.tick(Instant::now())?;
    }
}
