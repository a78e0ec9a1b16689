//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that is diffed and flushed to the terminal.
//!
//! Goals:
//! - Keep `core` free of presentation concerns (the view only sees snapshots)
//! - Keep styling in a plain [`Palette`] value rather than global state
//! - Allow precise control over aspect ratio (2 columns per maze cell by default)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pacman_core as core;
pub use tui_pacman_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Palette, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
