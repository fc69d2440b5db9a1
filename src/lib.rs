//! Terminal Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name: `tetric::{types, core, engine, input, term}`.

pub use tetric_core as core;
pub use tetric_engine as engine;
pub use tetric_input as input;
pub use tetric_term as term;
pub use tetric_types as types;
