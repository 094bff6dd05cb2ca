//! Command-line interface for morpion.

use clap::{Parser, Subcommand, ValueEnum};
use morpion_core::GameMode;

/// Morpion - tic-tac-toe against a friend or an unbeatable computer
#[derive(Parser, Debug)]
#[command(name = "morpion")]
#[command(about = "Tic-tac-toe against a friend or an unbeatable computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./morpion.toml when present)
    #[arg(long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Skip the menu and start in this mode
        #[arg(long, value_enum)]
        mode: Option<ModeArg>,

        /// Seed for the computer's tie-breaks
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print the computer's move for a board, e.g. `XX.O.....`
    Best {
        /// Nine cells, row-major: X, O, and `.` for empty
        board: String,

        /// Seed for the tie-break
        #[arg(long)]
        seed: Option<u64>,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Pit the computer against a random player
    Selfplay {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        games: u32,

        /// Seed for both players
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Game mode as a command-line value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Two players on one keyboard
    Friend,
    /// Play X against the computer
    Computer,
}

impl From<ModeArg> for GameMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Friend => GameMode::Friend,
            ModeArg::Computer => GameMode::Computer,
        }
    }
}
