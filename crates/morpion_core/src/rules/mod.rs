//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates its input, so the
//! same functions back the session controller and the minimax search.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, Line, check_winner, winning_line};

use crate::{Board, Mark};
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one cell is empty.
    InProgress,
    /// `mark` completed `line`.
    Won {
        /// The winning mark.
        mark: Mark,
        /// First completed line in scan order.
        line: Line,
    },
    /// Board is full without a winner.
    Draw,
}

impl Outcome {
    /// Whether the round is over.
    pub fn is_decided(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }

    /// The winning mark, if any.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Won { mark, .. } => Some(*mark),
            _ => None,
        }
    }

    /// The winning line, if any.
    pub fn line(&self) -> Option<Line> {
        match self {
            Outcome::Won { line, .. } => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates the board: first winning line in scan order, else draw when
/// full, else in progress.
pub fn evaluate(board: &Board) -> Outcome {
    if let Some((mark, line)) = winning_line(board) {
        Outcome::Won { mark, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    #[test]
    fn test_evaluate_in_progress() {
        let board: Board = "X...O...X".parse().unwrap();
        assert_eq!(evaluate(&board), Outcome::InProgress);
        assert!(!evaluate(&board).is_decided());
    }

    #[test]
    fn test_evaluate_reports_line() {
        let board: Board = "O..XO.X.O".parse().unwrap();
        let outcome = evaluate(&board);
        assert_eq!(outcome.winner(), Some(Mark::O));
        let line = outcome.line().unwrap();
        assert!(line.contains(Position::Center));
        assert_eq!(line.indices(), [0, 4, 8]);
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let board: Board = "XX.OO....".parse().unwrap();
        let before = board;
        let _ = evaluate(&board);
        assert_eq!(board, before);
    }
}
