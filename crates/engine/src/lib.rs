//! Engine module - drives the game core in real time
//!
//! The core ([`tetric_core::GameState`]) is a pure state machine. This crate is the
//! host around it: one tokio task owns the state and processes exactly one event
//! at a time, either a player [`Intent`](tetric_types::Intent) from a channel or a
//! gravity tick from an interval timer.
//!
//! # Lifecycle
//!
//! 1. [`spawn`] the engine with an [`EngineConfig`] (inside a tokio runtime)
//! 2. Send intents through the returned [`EngineHandle`]
//! 3. Read the latest [`RenderSnapshot`](tetric_core::RenderSnapshot) from the handle
//!    or subscribe to changes
//! 4. [`EngineHandle::shutdown`] closes the channel and returns the final state
//!
//! The gravity timer only exists while the game is running. It is dropped the
//! moment the game ends and rebuilt on replay, so a stale timer can never touch a
//! reset board.
//!
//! # Environment Variables
//!
//! - `TETRIC_TICK_MS`: gravity period (default: 500)
//! - `TETRIC_SEED`: bag seed (default: derived from the clock)
//! - `TETRIC_EVENT_LOG`: JSON-lines event log path (default: disabled)
//! - `TETRIC_COMMAND_BUFFER`: intent channel capacity (default: 64)

pub mod config;
pub mod driver;
pub mod error;
pub mod event_log;

pub use tetric_core as core;
pub use tetric_types as types;

pub use config::EngineConfig;
pub use driver::{spawn, EngineHandle};
pub use error::EngineError;
pub use event_log::{EventLog, LogRecord};
