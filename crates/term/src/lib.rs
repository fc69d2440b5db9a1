//! Terminal rendering for the game.
//!
//! Views draw render snapshots onto an in-memory [`Canvas`]; the
//! [`TerminalRenderer`] then flushes canvases to the terminal with crossterm.

pub mod canvas;
pub mod game_view;
pub mod renderer;

pub use tetric_core as core;
pub use tetric_types as types;

pub use canvas::{Canvas, Glyph, Rgb, Style};
pub use game_view::{GameView, Layout, Viewport};
pub use renderer::{encode_diff, encode_full, TerminalRenderer};
