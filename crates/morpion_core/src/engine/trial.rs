//! Scoped trial placements for backtracking search.

use crate::{Board, Cell, Mark, Position};
use std::ops::{Deref, DerefMut};

/// A mark placed on an exclusively borrowed board for the lifetime of the
/// guard. Dropping the guard empties the cell again, so every exit path out
/// of a search branch restores the board.
#[derive(Debug)]
pub struct Trial<'a> {
    board: &'a mut Board,
    pos: Position,
}

impl<'a> Trial<'a> {
    /// Places `mark` at the empty cell `pos`.
    pub fn place(board: &'a mut Board, pos: Position, mark: Mark) -> Self {
        debug_assert!(board.is_empty(pos), "trial placed on occupied {pos:?}");
        board.set(pos, Cell::Marked(mark));
        Self { board, pos }
    }

    /// The cell this trial occupies.
    pub fn position(&self) -> Position {
        self.pos
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.set(self.pos, Cell::Empty);
    }
}
