//! Computer opponent: exhaustive minimax with random tie-breaking.
//!
//! The computer always plays O. [`best_move`] borrows the board mutably for
//! the duration of the search and hands it back unchanged.

mod minimax;
mod trial;

pub use minimax::{Score, minimax, score_moves};
pub use trial::Trial;

use crate::rules::{Outcome, evaluate};
use crate::{Board, Mark, Position};
use derive_more::{Display, Error};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A cell paired with its minimax score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct MoveCandidate {
    /// Cell to play.
    pub position: Position,
    /// Score of the position after playing it.
    pub score: Score,
}

/// Precondition violations when asking the engine for a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum EngineError {
    /// Every cell is already marked.
    #[display("no empty cell left to play")]
    NoMovesLeft,
    /// The board already has a completed line.
    #[display("round already won by {_0}")]
    GameDecided(#[error(not(source))] Mark),
}

/// Picks the best cell for O, choosing uniformly among equally scored cells.
///
/// The tie-break is two passes over a fixed array: the first finds the best
/// score and how many cells reach it, the second takes the `rng`-chosen one
/// of them. The returned candidate always carries the best achievable score.
///
/// # Errors
///
/// Returns [`EngineError::GameDecided`] if a line is complete and
/// [`EngineError::NoMovesLeft`] if the board is full.
#[instrument(skip(board, rng), fields(board = %board))]
pub fn best_move<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
) -> Result<MoveCandidate, EngineError> {
    match evaluate(board) {
        Outcome::Won { mark, .. } => return Err(EngineError::GameDecided(mark)),
        Outcome::Draw => return Err(EngineError::NoMovesLeft),
        Outcome::InProgress => {}
    }

    let scores = score_moves(board);
    let best = scores
        .iter()
        .flatten()
        .copied()
        .max()
        .ok_or(EngineError::NoMovesLeft)?;
    let tied = scores.iter().filter(|s| **s == Some(best)).count();

    let pick = rng.gen_range(0..tied);
    let position = Position::ALL
        .into_iter()
        .filter(|pos| scores[pos.index()] == Some(best))
        .nth(pick)
        .ok_or(EngineError::NoMovesLeft)?;

    debug!(?position, score = %best, tied, "Engine chose move");
    Ok(MoveCandidate::new(position, best))
}

/// All top-level moves sharing the best score, in index order.
#[instrument(skip(board), fields(board = %board))]
pub fn optimal_moves(board: &mut Board) -> Vec<MoveCandidate> {
    let scores = score_moves(board);
    let Some(best) = scores.iter().flatten().copied().max() else {
        return Vec::new();
    };
    Position::ALL
        .into_iter()
        .filter(|pos| scores[pos.index()] == Some(best))
        .map(|pos| MoveCandidate::new(pos, best))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_rejects_decided_board() {
        let mut board: Board = "XXXOO....".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            best_move(&mut board, &mut rng),
            Err(EngineError::GameDecided(Mark::X))
        );
    }

    #[test]
    fn test_rejects_full_board() {
        let mut board: Board = "XOXXOOOXX".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(
            best_move(&mut board, &mut rng),
            Err(EngineError::NoMovesLeft)
        );
    }

    #[test]
    fn test_single_empty_cell() {
        let mut board: Board = "XOXXOOOX.".parse().unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        let mv = best_move(&mut board, &mut rng).unwrap();
        assert_eq!(mv.position, Position::BottomRight);
        assert_eq!(mv.score, Score::Draw);
    }

    #[test]
    fn test_optimal_moves_lists_ties() {
        // X has two open lines, so every O reply loses.
        let mut board: Board = "O.X.O.X.X".parse().unwrap();
        let best = optimal_moves(&mut board);
        let positions: Vec<Position> = best.iter().map(|c| c.position).collect();
        assert_eq!(
            positions,
            [
                Position::TopCenter,
                Position::MiddleLeft,
                Position::MiddleRight,
                Position::BottomCenter
            ]
        );
        assert!(best.iter().all(|c| c.score == Score::Loss));
    }
}
