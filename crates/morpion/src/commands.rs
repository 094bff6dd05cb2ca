//! Headless commands: single-position analysis and self-play.

use anyhow::{Context, Result, bail};
use morpion_core::{
    Board, GameMode, Mark, MoveCandidate, Position, Score, Scoreboard, SessionState, best_move,
    evaluate, score_moves,
};
use rand::Rng;
use rand::seq::IteratorRandom;
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Engine analysis of a single board.
#[derive(Debug, Clone, Serialize)]
pub struct BestMoveReport {
    /// Board that was analysed.
    pub board: Board,
    /// Score of each legal O move, `None` for occupied cells.
    pub scores: [Option<Score>; 9],
    /// The move the engine picked.
    pub chosen: MoveCandidate,
}

impl BestMoveReport {
    /// Renders the board, the score grid and the chosen move as text.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&self.board.display());
        out.push_str("\n\nScores for O:\n");
        for row in 0..3 {
            let cells: Vec<String> = (0..3)
                .map(|col| match self.scores[row * 3 + col] {
                    Some(score) => format!("{:>3}", score.to_string()),
                    None => "  .".to_string(),
                })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        out.push_str(&format!(
            "\nBest: {} (cell {}, score {})",
            self.chosen.position.label(),
            self.chosen.position.index(),
            self.chosen.score
        ));
        out
    }
}

/// Parses `board` and asks the engine for O's move.
#[instrument(skip(rng))]
pub fn analyse<R: Rng + ?Sized>(board: &str, rng: &mut R) -> Result<BestMoveReport> {
    let mut board: Board = board
        .parse()
        .with_context(|| format!("Invalid board {board:?}"))?;
    let outcome = evaluate(&board);
    if outcome.is_decided() {
        bail!("Board {board} is already decided: {outcome:?}");
    }

    let scores = score_moves(&mut board);
    let chosen = best_move(&mut board, rng).context("Engine refused the board")?;
    info!(position = ?chosen.position, score = %chosen.score, "Analysis complete");

    Ok(BestMoveReport {
        board,
        scores,
        chosen,
    })
}

/// Plays `games` rounds of the engine (O) against a uniformly random X,
/// alternating who opens. Fails if the engine ever loses.
#[instrument(skip(rng))]
pub fn self_play<R: Rng + ?Sized>(games: u32, rng: &mut R) -> Result<Scoreboard> {
    let mut session = SessionState::new(GameMode::Computer);

    for game in 0..games {
        if game > 0 {
            session.new_round();
        }
        while !session.outcome().is_decided() {
            if session.advance(rng)?.is_none() {
                let pos: Position = session
                    .board()
                    .empty_positions()
                    .choose(rng)
                    .context("In-progress board without an empty cell")?;
                session.apply_human_move(pos)?;
            }
        }
        debug!(game, outcome = ?session.outcome(), "Round finished");

        if session.outcome().winner() == Some(Mark::X) {
            bail!(
                "Engine lost round {} on {}",
                session.round(),
                session.board()
            );
        }
    }

    let scores = *session.scores();
    info!(
        o_wins = scores.o_wins(),
        draws = scores.draws(),
        "Self-play complete"
    );
    Ok(scores)
}
