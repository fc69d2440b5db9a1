//! Terminal input: maps `crossterm` key events onto game [`Intent`](crate::types::Intent)s.
//!
//! Only this crate knows about physical keys; the game core sees abstract intents.

pub mod map;

pub use tetric_types as types;

pub use map::{handle_key_event, should_quit};
