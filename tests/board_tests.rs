//! Board tests: bounds, locking and line clearing

use tetric::core::{rotate, shape_of, Board};
use tetric::types::{CellState, PieceKind, Position, BOARD_COLS, BOARD_ROWS};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.rows(), BOARD_ROWS);
    assert_eq!(board.cols(), BOARD_COLS);
    assert_eq!(board.filled_count(), 0);

    for row in 0..BOARD_ROWS as i32 {
        for col in 0..BOARD_COLS as i32 {
            assert_eq!(board.get(row, col), Some(false));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_ROWS as i32, 0), None);
    assert_eq!(board.get(0, BOARD_COLS as i32), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();

    assert!(!board.set(-1, 0, true));
    assert!(!board.set(0, BOARD_COLS as i32, true));
    assert!(board.set(5, 5, true));
    assert!(board.is_filled(5, 5));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_lock_drops_cells_above_grid() {
    let mut board = Board::new();
    let vertical_i = rotate(&shape_of(PieceKind::I));

    let written = board.lock(&vertical_i, Position::new(-2, 3));

    assert_eq!(written, 2);
    assert!(board.is_filled(0, 3));
    assert!(board.is_filled(1, 3));
    assert!(!board.is_filled(2, 3));
}

#[test]
fn test_clear_single_line_shifts_rows_down() {
    let mut board = Board::from_text(&[
        "#.........",
        ".#........",
        "##########",
    ]);

    let cleared = board.clear_lines();

    assert_eq!(cleared.as_slice(), &[19]);
    assert!(board.is_filled(19, 1));
    assert!(board.is_filled(18, 0));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_clear_non_adjacent_lines() {
    let mut board = Board::from_text(&[
        "##########",
        "#.........",
        "##########",
        "..#.......",
    ]);

    let cleared = board.clear_lines();

    assert_eq!(cleared.as_slice(), &[16, 18]);
    // Survivors keep their order at the bottom.
    assert!(board.is_filled(18, 0));
    assert!(board.is_filled(19, 2));
    assert_eq!(board.filled_count(), 2);
    for row in 0..18 {
        for col in 0..BOARD_COLS as i32 {
            assert!(!board.is_filled(row, col));
        }
    }
}

#[test]
fn test_clear_tetris() {
    let mut board = Board::from_text(&["##########"; 4]);
    let cleared = board.clear_lines();
    assert_eq!(cleared.as_slice(), &[16, 17, 18, 19]);
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_clear_without_full_rows_is_noop() {
    let mut board = Board::from_text(&["#########.", ".#########"]);
    let before = board;
    assert!(board.clear_lines().is_empty());
    assert_eq!(board, before);
}

#[test]
fn test_write_grid_only_filled_and_empty() {
    let board = Board::from_text(&["#.#"]);
    let mut grid = [[CellState::Ghost; BOARD_COLS]; BOARD_ROWS];
    board.write_grid(&mut grid);

    assert_eq!(grid[19][0], CellState::Filled);
    assert_eq!(grid[19][1], CellState::Empty);
    assert_eq!(grid[19][2], CellState::Filled);
    assert_eq!(grid[0][0], CellState::Empty);
}
