//! Morpion core - tic-tac-toe rules and an unbeatable opponent
//!
//! # Architecture
//!
//! - **Board**: nine cells holding `Empty`, `X` or `O`
//! - **Rules**: pure win/draw evaluation with a fixed line scan order
//! - **Engine**: exhaustive minimax for O with random tie-breaking
//! - **Session**: turn order, rounds and scores, independent of any UI
//!
//! # Example
//!
//! ```
//! use morpion_core::{Board, Position, best_move};
//! use rand::SeedableRng;
//!
//! let mut board: Board = "XX..O....".parse().unwrap();
//! let mut rng = rand::rngs::StdRng::seed_from_u64(0);
//! let mv = best_move(&mut board, &mut rng).unwrap();
//! assert_eq!(mv.position, Position::TopRight);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod position;
mod rules;
mod session;
mod types;

// Crate-level exports - Board types
pub use position::Position;
pub use types::{Board, Cell, Mark, ParseBoardError};

// Crate-level exports - Rules
pub use rules::{LINES, Line, Outcome, check_winner, evaluate, is_full, winning_line};

// Crate-level exports - Engine
pub use engine::{
    EngineError, MoveCandidate, Score, Trial, best_move, minimax, optimal_moves, score_moves,
};

// Crate-level exports - Session controller
pub use session::{GameMode, MoveError, Scoreboard, SessionState, SessionView};
