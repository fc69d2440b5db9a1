//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no game logic, making them usable in any
//! context (core state machine, engine driver, terminal rendering, event logs).
//!
//! # Board Dimensions
//!
//! Fixed playfield dimensions:
//!
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Spawn position**: row 0, column 4 for every piece
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 500 | Fixed gravity period |
//!
//! # Examples
//!
//! ```
//! use tetric_types::{Intent, PieceKind, BOARD_COLS, BOARD_ROWS};
//!
//! let parsed = PieceKind::from_str("t").unwrap();
//! assert_eq!(parsed, PieceKind::T);
//!
//! let intent = Intent::from_str("hardDrop").unwrap();
//! assert_eq!(intent, Intent::HardDrop);
//!
//! assert_eq!(BOARD_ROWS, 20);
//! assert_eq!(BOARD_COLS, 10);
//! ```

use serde::Serialize;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: usize = 20;

/// Board width in cells (10 columns)
pub const BOARD_COLS: usize = 10;

/// Row at which new pieces appear
pub const SPAWN_ROW: i8 = 0;

/// Column at which new pieces appear
pub const SPAWN_COL: i8 = 4;

/// Spawn position for every new or swapped-in piece
pub const SPAWN_POSITION: Position = Position::new(SPAWN_ROW, SPAWN_COL);

/// Default gravity period in milliseconds
pub const DEFAULT_TICK_MS: u64 = 500;

/// The seven tetromino piece kinds
///
/// Each piece has a canonical color identifier:
/// - **I**: cyan, 1x4 bar
/// - **O**: yellow, 2x2 square
/// - **T**: purple
/// - **J**: blue
/// - **L**: orange (mirror of J)
/// - **S**: green
/// - **Z**: red (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in canonical order, the contents of a fresh bag before shuffling
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetric_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("x"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Canonical color identifier
    pub fn color_name(&self) -> &'static str {
        match self {
            PieceKind::I => "cyan",
            PieceKind::O => "yellow",
            PieceKind::T => "purple",
            PieceKind::J => "blue",
            PieceKind::L => "orange",
            PieceKind::S => "green",
            PieceKind::Z => "red",
        }
    }
}

/// Offset of a shape's top-left cell within the grid
///
/// `row` may be negative while a piece is partially above the visible grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Position {
    pub row: i8,
    pub col: i8,
}

impl Position {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Position shifted by the given row/column deltas
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

/// Abstract player intents accepted by the game core
///
/// The mapping from raw keys to intents lives outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down
    SoftDrop,
    /// Drop piece to its lowest legal row and lock it
    HardDrop,
    /// Rotate piece 90° clockwise (no wall kicks)
    Rotate,
    /// Swap with the hold slot (once per piece)
    Hold,
    /// Start a game from the home screen, or replay after game over
    StartGame,
}

impl Intent {
    /// Parse intent from a camelCase name (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tetric_types::Intent;
    ///
    /// assert_eq!(Intent::from_str("moveLeft"), Some(Intent::MoveLeft));
    /// assert_eq!(Intent::from_str("STARTGAME"), Some(Intent::StartGame));
    /// assert_eq!(Intent::from_str("pause"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Intent::MoveLeft),
            "moveright" => Some(Intent::MoveRight),
            "softdrop" => Some(Intent::SoftDrop),
            "harddrop" => Some(Intent::HardDrop),
            "rotate" => Some(Intent::Rotate),
            "hold" => Some(Intent::Hold),
            "startgame" => Some(Intent::StartGame),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Intent::MoveLeft => "moveLeft",
            Intent::MoveRight => "moveRight",
            Intent::SoftDrop => "softDrop",
            Intent::HardDrop => "hardDrop",
            Intent::Rotate => "rotate",
            Intent::Hold => "hold",
            Intent::StartGame => "startGame",
        }
    }
}

/// Lifecycle of a game
///
/// `NotStarted -> Running` on the first `StartGame`, `Running -> GameOver` when a
/// freshly spawned piece collides, `GameOver -> Running` on replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    #[default]
    NotStarted,
    Running,
    GameOver,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "not_started",
            GameStatus::Running => "running",
            GameStatus::GameOver => "game_over",
        }
    }
}

/// A cell of the rendered grid
///
/// `Ghost` only ever appears in render snapshots, never in the board itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    #[default]
    Empty,
    Filled,
    Ghost,
}

impl CellState {
    /// Numeric encoding: 0 = empty, 1 = filled, 2 = ghost
    pub fn as_u8(&self) -> u8 {
        match self {
            CellState::Empty => 0,
            CellState::Filled => 1,
            CellState::Ghost => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intent_names_roundtrip() {
        for intent in [
            Intent::MoveLeft,
            Intent::MoveRight,
            Intent::SoftDrop,
            Intent::HardDrop,
            Intent::Rotate,
            Intent::Hold,
            Intent::StartGame,
        ] {
            assert_eq!(Intent::from_str(intent.as_str()), Some(intent));
        }
    }

    #[test]
    fn test_piece_kind_names_and_colors() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
        assert_eq!(PieceKind::I.color_name(), "cyan");
        assert_eq!(PieceKind::Z.color_name(), "red");
    }

    #[test]
    fn test_cell_state_encoding() {
        assert_eq!(CellState::Empty.as_u8(), 0);
        assert_eq!(CellState::Filled.as_u8(), 1);
        assert_eq!(CellState::Ghost.as_u8(), 2);
    }

    #[test]
    fn test_position_offset() {
        assert_eq!(SPAWN_POSITION.offset(1, -1), Position::new(1, 3));
    }
}
