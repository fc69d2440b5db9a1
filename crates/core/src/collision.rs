//! Collision module - shape vs. board predicate
//!
//! A placement collides when any set cell lands left/right of the board, below the
//! bottom wall, or on a filled cell. Cells above the top edge (negative rows) never
//! collide, so pieces may sit partially off-screen.

use crate::board::Board;
use crate::shape::Shape;
use crate::types::{Position, BOARD_COLS, BOARD_ROWS};

/// Check whether `shape` placed at `position` intersects walls or filled cells
///
/// # Examples
///
/// ```
/// use tetric_core::{collides, shape_of, Board};
/// use tetric_types::{PieceKind, Position};
///
/// let board = Board::new();
/// let o = shape_of(PieceKind::O);
/// assert!(!collides(Position::new(18, 4), &o, &board));
/// assert!(collides(Position::new(19, 4), &o, &board));
/// assert!(!collides(Position::new(-1, 0), &o, &board));
/// ```
pub fn collides(position: Position, shape: &Shape, board: &Board) -> bool {
    shape.minos().any(|(dr, dc)| {
        let row = position.row as i32 + dr as i32;
        let col = position.col as i32 + dc as i32;

        if col < 0 || col >= BOARD_COLS as i32 || row >= BOARD_ROWS as i32 {
            return true;
        }
        row >= 0 && board.is_filled(row, col)
    })
}
