//! TUI Pacman (workspace facade crate).
//!
//! This package exposes a stable `tui_pacman::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_pacman_core as core;
pub use tui_pacman_input as input;
pub use tui_pacman_term as term;
pub use tui_pacman_types as types;
