//! Morpion - tic-tac-toe in the terminal
//!
//! # Architecture
//!
//! - **Config**: TOML settings for pacing, logging and the tie-break seed
//! - **Commands**: headless analysis and self-play on top of `morpion_core`
//! - **TUI**: mode menu and board, driving a [`morpion_core::SessionState`]

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod commands;
pub mod config;
pub mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, DEFAULT_CONFIG_PATH, MorpionConfig};

// Crate-level exports - Headless commands
pub use commands::{BestMoveReport, analyse, self_play};
