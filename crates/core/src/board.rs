//! Board module - manages the game grid
//!
//! The board is a 20x10 grid where each cell is either empty or holds a locked block.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row ranges 0..19 (top to bottom), col ranges 0..9
//! (left to right). Ghost markers are never stored here; they only exist in render
//! snapshots.

use arrayvec::ArrayVec;

use crate::shape::Shape;
use crate::types::{CellState, Position, BOARD_COLS, BOARD_ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = BOARD_ROWS * BOARD_COLS;

/// Row indices removed by a single line clear, ascending (top to bottom)
pub type ClearedRows = ArrayVec<usize, BOARD_ROWS>;

/// The game board - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of filled flags, row-major order (row * COLS + col)
    cells: [bool; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [false; BOARD_SIZE],
        }
    }

    /// Build a board from text rows, bottom-aligned: `#` is filled, anything else empty
    ///
    /// Rows given are placed at the bottom of the board; missing rows above are empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use tetric_core::Board;
    ///
    /// let board = Board::from_text(&["#########."]);
    /// assert!(board.is_filled(19, 0));
    /// assert!(!board.is_filled(19, 9));
    /// ```
    pub fn from_text(rows: &[&str]) -> Self {
        assert!(rows.len() <= BOARD_ROWS, "too many rows");
        let mut board = Self::new();
        let top = BOARD_ROWS - rows.len();
        for (i, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().take(BOARD_COLS).enumerate() {
                if ch == '#' {
                    board.cells[(top + i) * BOARD_COLS + col] = true;
                }
            }
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(row: i32, col: i32) -> Option<usize> {
        if row < 0 || row >= BOARD_ROWS as i32 || col < 0 || col >= BOARD_COLS as i32 {
            return None;
        }
        Some((row as usize) * BOARD_COLS + (col as usize))
    }

    /// Number of rows (constant)
    pub fn rows(&self) -> usize {
        BOARD_ROWS
    }

    /// Number of columns (constant)
    pub fn cols(&self) -> usize {
        BOARD_COLS
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<bool> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Check if (row, col) is inside the board and filled
    pub fn is_filled(&self, row: i32, col: i32) -> bool {
        matches!(self.get(row, col), Some(true))
    }

    /// Set cell at (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, filled: bool) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = filled;
                true
            }
            None => false,
        }
    }

    /// Check if a row has no empty cell
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= BOARD_ROWS {
            return false;
        }
        let start = row * BOARD_COLS;
        self.cells[start..start + BOARD_COLS].iter().all(|&c| c)
    }

    /// Merge a shape into the grid at `position`
    ///
    /// Cells that map outside the board are silently dropped.
    /// Returns the number of cells written.
    pub fn lock(&mut self, shape: &Shape, position: Position) -> usize {
        let mut written = 0;
        for (dr, dc) in shape.minos() {
            let row = position.row as i32 + dr as i32;
            let col = position.col as i32 + dc as i32;
            if self.set(row, col, true) {
                written += 1;
            }
        }
        written
    }

    /// Remove every full row and prepend the same number of empty rows
    ///
    /// Retained rows keep their relative order. Returns the indices (pre-clear,
    /// ascending) of the rows that were removed. Uses a two-pointer pass with
    /// zero allocation.
    pub fn clear_lines(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut write_row = BOARD_ROWS;

        // Scan from bottom to top
        for read_row in (0..BOARD_ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared.push(read_row);
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src = read_row * BOARD_COLS;
                    self.cells
                        .copy_within(src..src + BOARD_COLS, write_row * BOARD_COLS);
                }
            }
        }

        // Fresh empty rows at the top
        self.cells[..write_row * BOARD_COLS].fill(false);

        cleared.reverse();
        cleared
    }

    /// Write the board into a render grid (`Filled` / `Empty` only)
    pub fn write_grid(&self, out: &mut [[CellState; BOARD_COLS]; BOARD_ROWS]) {
        for (row, out_row) in out.iter_mut().enumerate() {
            let start = row * BOARD_COLS;
            for (dst, &src) in out_row.iter_mut().zip(&self.cells[start..start + BOARD_COLS]) {
                *dst = if src {
                    CellState::Filled
                } else {
                    CellState::Empty
                };
            }
        }
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::shape_of;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(0, 9), Some(9));
        assert_eq!(Board::index(1, 0), Some(10));
        assert_eq!(Board::index(19, 9), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(0, 10), None);
        assert_eq!(Board::index(20, 0), None);
    }

    #[test]
    fn test_lock_drops_out_of_bounds_cells() {
        let mut board = Board::new();
        let i = shape_of(PieceKind::I);

        // Two cells hang off the right edge, one row above the grid is dropped too.
        assert_eq!(board.lock(&i, Position::new(0, 8)), 2);
        assert_eq!(board.lock(&i, Position::new(-1, 0)), 0);
        assert!(board.is_filled(0, 8));
        assert!(board.is_filled(0, 9));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_lines_shifts_down() {
        let mut board = Board::from_text(&[
            "#.........", // row 17
            "##########", // row 18
            "..#.......", // row 19
        ]);

        let cleared = board.clear_lines();

        assert_eq!(cleared.as_slice(), &[18]);
        assert!(board.is_filled(18, 0));
        assert!(board.is_filled(19, 2));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_lines_non_adjacent_rows() {
        let mut board = Board::from_text(&[
            "##########", // row 16
            "...#......", // row 17
            "##########", // row 18
            "#.........", // row 19
        ]);

        let cleared = board.clear_lines();

        assert_eq!(cleared.as_slice(), &[16, 18]);
        assert!(board.is_filled(18, 3));
        assert!(board.is_filled(19, 0));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_clear_lines_nothing_full() {
        let mut board = Board::from_text(&["#########."]);
        let before = board;
        assert!(board.clear_lines().is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn test_clear_full_board() {
        let mut board = Board::new();
        board.cells.fill(true);
        assert_eq!(board.clear_lines().len(), BOARD_ROWS);
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_write_grid() {
        let board = Board::from_text(&["#........#"]);
        let mut grid = [[CellState::Ghost; BOARD_COLS]; BOARD_ROWS];
        board.write_grid(&mut grid);
        assert_eq!(grid[19][0], CellState::Filled);
        assert_eq!(grid[19][9], CellState::Filled);
        assert_eq!(grid[19][5], CellState::Empty);
        assert_eq!(grid[0][0], CellState::Empty);
    }
}
