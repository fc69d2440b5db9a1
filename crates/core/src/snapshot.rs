//! Render snapshot - the read-only view handed to renderers
//!
//! Derived on demand from the game state and never stored back into it. The grid
//! starts as a copy of the board, then the active piece is overlaid as `Filled`,
//! then the ghost projection is marked on cells the overlay left alone.

use serde::Serialize;

use crate::board::Board;
use crate::game_state::Tetromino;
use crate::shape::Shape;
use crate::types::{CellState, GameStatus, PieceKind, Position, BOARD_COLS, BOARD_ROWS};

/// Rendered grid, `BOARD_ROWS x BOARD_COLS`
pub type RenderGrid = [[CellState; BOARD_COLS]; BOARD_ROWS];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub position: Position,
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            shape: value.shape,
            position: value.position,
        }
    }
}

impl ActiveSnapshot {
    /// Absolute (row, col) of every cell of the piece that lies on the grid
    pub fn visible_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        visible_cells(&self.shape, self.position)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderSnapshot {
    pub grid: RenderGrid,
    pub hold: Option<PieceKind>,
    pub status: GameStatus,
    pub active: Option<ActiveSnapshot>,
    pub ghost_row: Option<i8>,
    pub can_hold: bool,
    pub episode_id: u32,
    pub pieces_locked: u32,
    pub lines_cleared: u32,
}

impl RenderSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[CellState::Empty; BOARD_COLS]; BOARD_ROWS];
        self.hold = None;
        self.status = GameStatus::NotStarted;
        self.active = None;
        self.ghost_row = None;
        self.can_hold = true;
        self.episode_id = 0;
        self.pieces_locked = 0;
        self.lines_cleared = 0;
    }

    /// # Panics
    ///
    /// Panics if `row >= BOARD_ROWS` or `col >= BOARD_COLS`; see [`RenderSnapshot::get`].
    pub fn cell(&self, row: usize, col: usize) -> CellState {
        self.grid[row][col]
    }

    /// Cell at (row, col), `None` outside the grid
    pub fn get(&self, row: usize, col: usize) -> Option<CellState> {
        self.grid.get(row)?.get(col).copied()
    }

    /// Number of grid cells in the given state
    pub fn count(&self, state: CellState) -> usize {
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == state)
            .count()
    }

    /// Grid in the numeric 0/1/2 encoding
    pub fn grid_u8(&self) -> [[u8; BOARD_COLS]; BOARD_ROWS] {
        let mut out = [[0u8; BOARD_COLS]; BOARD_ROWS];
        for (dst, src) in out.iter_mut().zip(self.grid.iter()) {
            for (d, s) in dst.iter_mut().zip(src.iter()) {
                *d = s.as_u8();
            }
        }
        out
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::Running
    }
}

impl Default for RenderSnapshot {
    fn default() -> Self {
        Self {
            grid: [[CellState::Empty; BOARD_COLS]; BOARD_ROWS],
            hold: None,
            status: GameStatus::NotStarted,
            active: None,
            ghost_row: None,
            can_hold: true,
            episode_id: 0,
            pieces_locked: 0,
            lines_cleared: 0,
        }
    }
}

fn visible_cells(shape: &Shape, position: Position) -> impl Iterator<Item = (usize, usize)> + '_ {
    shape.minos().filter_map(move |(dr, dc)| {
        let row = position.row as i32 + dr as i32;
        let col = position.col as i32 + dc as i32;
        if row < 0 || row >= BOARD_ROWS as i32 || col < 0 || col >= BOARD_COLS as i32 {
            return None;
        }
        Some((row as usize, col as usize))
    })
}

/// Compose board, active overlay and ghost projection into `out`
pub fn render_grid(
    board: &Board,
    active: Option<&Tetromino>,
    ghost: Option<Position>,
    out: &mut RenderGrid,
) {
    board.write_grid(out);

    let Some(active) = active else {
        return;
    };

    for (row, col) in visible_cells(&active.shape, active.position) {
        out[row][col] = CellState::Filled;
    }

    if let Some(ghost) = ghost {
        for (row, col) in visible_cells(&active.shape, ghost) {
            if out[row][col] != CellState::Filled {
                out[row][col] = CellState::Ghost;
            }
        }
    }
}
