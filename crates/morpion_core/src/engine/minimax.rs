//! Exhaustive minimax over the 3x3 board.
//!
//! O is the maximizing side. Every node is expanded; there is no pruning and
//! no transposition table, which keeps the search trivially correct and is
//! still fast for nine cells.

use super::trial::Trial;
use crate::rules::{Outcome, evaluate};
use crate::{Board, Mark, Position};
use serde::{Deserialize, Serialize};

/// Minimax value of a position from O's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Score {
    /// X wins with best play.
    Loss,
    /// Neither side can force a win.
    Draw,
    /// O wins with best play.
    Win,
}

impl Score {
    /// Numeric value: -1, 0 or +1.
    pub fn value(self) -> i8 {
        match self {
            Score::Loss => -1,
            Score::Draw => 0,
            Score::Win => 1,
        }
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Score::Loss => write!(f, "-1"),
            Score::Draw => write!(f, "0"),
            Score::Win => write!(f, "+1"),
        }
    }
}

/// Scores `board` with O to move when `maximizing`, X otherwise.
///
/// The board is mutated during the search and restored before returning.
pub fn minimax(board: &mut Board, maximizing: bool) -> Score {
    match evaluate(board) {
        Outcome::Won { mark: Mark::O, .. } => Score::Win,
        Outcome::Won { mark: Mark::X, .. } => Score::Loss,
        Outcome::Draw => Score::Draw,
        Outcome::InProgress => {
            let (mark, mut best) = if maximizing {
                (Mark::O, Score::Loss)
            } else {
                (Mark::X, Score::Win)
            };

            for pos in Position::ALL {
                if !board.is_empty(pos) {
                    continue;
                }
                let mut trial = Trial::place(board, pos, mark);
                let score = minimax(&mut trial, !maximizing);
                best = if maximizing {
                    best.max(score)
                } else {
                    best.min(score)
                };
            }

            best
        }
    }
}

/// Scores every legal O move on `board`; occupied cells are `None`.
pub fn score_moves(board: &mut Board) -> [Option<Score>; 9] {
    let mut scores = [None; 9];
    for pos in Position::ALL {
        if board.is_empty(pos) {
            let mut trial = Trial::place(board, pos, Mark::O);
            scores[pos.index()] = Some(minimax(&mut trial, false));
        }
    }
    scores
}
