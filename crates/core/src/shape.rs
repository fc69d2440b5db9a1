//! Shape module - fixed-size tetromino bitmaps
//!
//! A shape is a minimal bounding-box bitmap of at most 4x4 cells. It is `Copy`
//! and never mutated in place: rotation builds a new value.

use serde::Serialize;

/// Largest dimension any tetromino bounding box can have
pub const MAX_SHAPE_DIM: usize = 4;

/// Offset of a single set cell relative to the shape origin, as (row, col)
pub type MinoOffset = (i8, i8);

/// An immutable `height x width` bitmap of 0/1 cells
///
/// Cells outside `height x width` are always zero, so derived equality compares
/// exactly the visible bitmap and its dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Shape {
    height: u8,
    width: u8,
    cells: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
}

impl Shape {
    /// Build a shape from literal rows; any non-zero value counts as set
    ///
    /// # Examples
    ///
    /// ```
    /// use tetric_core::Shape;
    ///
    /// let t = Shape::from_rows([[0, 1, 0], [1, 1, 1]]);
    /// assert_eq!((t.height(), t.width()), (2, 3));
    /// assert!(t.is_set(1, 0));
    /// assert!(!t.is_set(0, 0));
    /// ```
    pub const fn from_rows<const H: usize, const W: usize>(rows: [[u8; W]; H]) -> Self {
        assert!(H > 0 && W > 0 && H <= MAX_SHAPE_DIM && W <= MAX_SHAPE_DIM);
        let mut cells = [[0u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM];
        let mut r = 0;
        while r < H {
            let mut c = 0;
            while c < W {
                cells[r][c] = if rows[r][c] != 0 { 1 } else { 0 };
                c += 1;
            }
            r += 1;
        }
        Self {
            height: H as u8,
            width: W as u8,
            cells,
        }
    }

    /// Assemble a shape from a raw cell buffer; cells outside the box are cleared
    pub(crate) fn from_parts(
        height: usize,
        width: usize,
        mut cells: [[u8; MAX_SHAPE_DIM]; MAX_SHAPE_DIM],
    ) -> Self {
        debug_assert!(height <= MAX_SHAPE_DIM && width <= MAX_SHAPE_DIM);
        for (r, row) in cells.iter_mut().enumerate() {
            for (c, cell) in row.iter_mut().enumerate() {
                if r >= height || c >= width {
                    *cell = 0;
                }
            }
        }
        Self {
            height: height as u8,
            width: width as u8,
            cells,
        }
    }

    /// Number of rows in the bounding box
    pub fn height(&self) -> usize {
        self.height as usize
    }

    /// Number of columns in the bounding box
    pub fn width(&self) -> usize {
        self.width as usize
    }

    /// Cell value (0 or 1); 0 outside the bounding box
    pub fn get(&self, row: usize, col: usize) -> u8 {
        if row >= self.height() || col >= self.width() {
            return 0;
        }
        self.cells[row][col]
    }

    pub fn is_set(&self, row: usize, col: usize) -> bool {
        self.get(row, col) != 0
    }

    /// Offsets of all set cells, row-major
    pub fn minos(&self) -> impl Iterator<Item = MinoOffset> + '_ {
        (0..self.height()).flat_map(move |r| {
            (0..self.width())
                .filter(move |&c| self.cells[r][c] != 0)
                .map(move |c| (r as i8, c as i8))
        })
    }

    /// Number of set cells
    pub fn mino_count(&self) -> usize {
        self.minos().count()
    }

    /// Visible rows of the bitmap, each `width` cells long
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> + '_ {
        self.cells[..self.height()]
            .iter()
            .map(move |row| &row[..self.width()])
    }
}
