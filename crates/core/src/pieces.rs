//! Pieces module - tetromino shape table
//!
//! Each kind has exactly one stored orientation, its minimal bounding box.
//! Other orientations are computed live by [`crate::rotation::rotate`].

use crate::shape::Shape;
use crate::types::PieceKind;

const I_SHAPE: Shape = Shape::from_rows([[1, 1, 1, 1]]);

const O_SHAPE: Shape = Shape::from_rows([[1, 1], [1, 1]]);

const T_SHAPE: Shape = Shape::from_rows([[0, 1, 0], [1, 1, 1]]);

const J_SHAPE: Shape = Shape::from_rows([[1, 0, 0], [1, 1, 1]]);

const L_SHAPE: Shape = Shape::from_rows([[0, 0, 1], [1, 1, 1]]);

const S_SHAPE: Shape = Shape::from_rows([[0, 1, 1], [1, 1, 0]]);

const Z_SHAPE: Shape = Shape::from_rows([[1, 1, 0], [0, 1, 1]]);

/// Get the stored shape for a piece kind
pub fn shape_of(kind: PieceKind) -> Shape {
    match kind {
        PieceKind::I => I_SHAPE,
        PieceKind::O => O_SHAPE,
        PieceKind::T => T_SHAPE,
        PieceKind::J => J_SHAPE,
        PieceKind::L => L_SHAPE,
        PieceKind::S => S_SHAPE,
        PieceKind::Z => Z_SHAPE,
    }
}
