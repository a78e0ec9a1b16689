//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework beyond the
//! `crossterm` event types. It maps key events into [`crate::types::GameAction`];
//! keys without a mapping are dropped here and never reach the session.

pub mod map;

pub use tui_pacman_types as types;

pub use map::{handle_key_event, map_key_code};
