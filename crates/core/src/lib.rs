//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and the state machine that drives them.
//! It has **zero dependencies** on UI, timers, networking, or I/O, making it:
//!
//! - **Deterministic**: Same seed and same event sequence produce identical games
//! - **Testable**: Every rule is reachable from plain function calls
//! - **Portable**: The host decides how ticks and intents are delivered
//!
//! # Module Structure
//!
//! - [`shape`]: Fixed-size bitmap type for tetromino shapes
//! - [`pieces`]: Shape table, one stored orientation per kind
//! - [`rotation`]: 90° clockwise bitmap rotation (no pivot, no wall kicks)
//! - [`rng`]: 7-bag piece generation
//! - [`collision`]: Shape-vs-board collision predicate
//! - [`board`]: 20x10 grid with locking and line clearing
//! - [`game_state`]: The state machine (gravity tick + player intents)
//! - [`snapshot`]: Render snapshot derivation (active overlay + ghost)
//!
//! # Game Rules
//!
//! The rule set is deliberately the baseline mechanic:
//!
//! - **7-Bag Randomizer**: every kind appears once per seven draws
//! - **Naive Rotation**: transpose + reverse; rejected if the result collides
//! - **Fixed Gravity**: one row per tick, lock on the tick that cannot move
//! - **Ghost Piece**: projection of where a hard drop would land
//! - **Hold**: one slot, once per piece lifetime
//!
//! # Example
//!
//! ```
//! use tetric_core::GameState;
//! use tetric_types::{GameStatus, Intent};
//!
//! let mut game = GameState::new(12345);
//! assert!(game.apply(Intent::StartGame));
//! assert_eq!(game.status(), GameStatus::Running);
//!
//! game.apply(Intent::MoveRight);
//! game.apply(Intent::Rotate);
//! assert!(game.apply(Intent::HardDrop));
//! assert_eq!(game.pieces_locked(), 1);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod rotation;
pub mod shape;
pub mod snapshot;

pub use tetric_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use collision::collides;
pub use game_state::{GameState, HeldPiece, LockEvent, Tetromino};
pub use pieces::shape_of;
pub use rng::{new_bag, Bag};
pub use rotation::rotate;
pub use shape::Shape;
pub use snapshot::{ActiveSnapshot, RenderGrid, RenderSnapshot};
