//! Rotation module - naive 90° clockwise bitmap rotation
//!
//! `rotated[c][N-1-r] = shape[r][c]` for an `N x M` input, producing an `M x N`
//! output. There is no pivot cell and no wall-kick table: the game simply
//! rejects a rotation whose result collides at the current position.

use crate::shape::{Shape, MAX_SHAPE_DIM};

/// Rotate a shape 90° clockwise about its own bounding box
///
/// # Examples
///
/// ```
/// use tetric_core::{rotate, Shape};
///
/// let i = Shape::from_rows([[1, 1, 1, 1]]);
/// assert_eq!(rotate(&i), Shape::from_rows([[1], [1], [1], [1]]));
/// ```
pub fn rotate(shape: &Shape) -> Shape {
    let n = shape.height();
    let m = shape.width();
    let mut cells = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];

    for r in 0..n {
        for c in 0..m {
            cells[c][n - 1 - r] = shape.get(r, c);
        }
    }

    Shape::from_parts(m, n, cells)
}
