//! Morpion - unified CLI
//!
//! Play in the terminal, or query the engine headlessly.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use morpion::cli::{Cli, Command};
use morpion::{MorpionConfig, analyse, self_play, tui};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    // The config picks the log filter and destination, so events emitted while
    // loading it have no subscriber yet; the effective config is logged below.
    let config = MorpionConfig::load(cli.config.as_deref())?;

    match cli.command {
        Command::Play { mode, seed } => {
            tui::run_tui(&config.with_seed(seed), mode.map(Into::into))
        }
        Command::Best { board, seed, json } => {
            let config = config.with_seed(seed);
            init_stderr_tracing(&config);
            run_best(config, &board, json)
        }
        Command::Selfplay { games, seed } => {
            let config = config.with_seed(seed);
            init_stderr_tracing(&config);
            run_selfplay(config, games)
        }
    }
}

/// Headless commands log to stderr so stdout stays clean for results.
fn init_stderr_tracing(config: &MorpionConfig) {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    info!(?config, "Config in effect");
}

/// Print the engine's choice for one board
#[instrument(skip(config))]
fn run_best(config: MorpionConfig, board: &str, json: bool) -> Result<()> {
    let mut rng = config.rng();
    let report = analyse(board, &mut rng)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", report.to_text());
    }
    Ok(())
}

/// Play the engine against a random opponent and print the tally
#[instrument(skip(config))]
fn run_selfplay(config: MorpionConfig, games: u32) -> Result<()> {
    info!(games, "Starting self-play");
    let mut rng = config.rng();
    let scores = self_play(games, &mut rng)?;

    println!(
        "{} rounds: computer won {}, drew {}, lost {}",
        scores.rounds(),
        scores.o_wins(),
        scores.draws(),
        scores.x_wins()
    );
    Ok(())
}
