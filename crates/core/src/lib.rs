//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the maze, actor state, movement rules, pursuer behaviour,
//! and the per-tick simulation step. It has **zero dependencies** on UI, terminal,
//! or I/O, making it:
//!
//! - **Deterministic**: Same strategy seed produces identical games
//! - **Testable**: Pursuer behaviour is injected, so tests can script it
//! - **Portable**: Can run in any environment (terminal, headless, benches)
//! - **Fast**: The tick step does not allocate
//!
//! # Module Structure
//!
//! - [`board`]: 30x20 grid of cell types that owns the remaining-pickup count
//! - [`maze`]: The static maze layout every session starts from
//! - [`actors`]: Player and pursuer state
//! - [`movement`]: Toroidal one-cell steps with wall rejection
//! - [`strategy`]: Pluggable pursuer facing decisions (random wander by default)
//! - [`game_state`]: The session: score, lives, phase, power mode, and the tick step
//! - [`snapshot`]: Read-only copy of a session handed to renderers
//!
//! # Game Rules
//!
//! - **Auto-movement**: The player keeps moving in its facing every tick and stalls at walls
//! - **Wrap-around**: Stepping off an edge re-enters on the opposite edge
//! - **Pickups**: 10 points each; eating the last one wins
//! - **Power pickups**: 50 points and 20 ticks of frightened pursuers
//! - **Pursuers**: Wander randomly; a frightened one is worth 200 and respawns,
//!   an unfrightened one costs a life
//!
//! # Example
//!
//! ```
//! use tui_pacman_core::{GameState, KeepFacing};
//! use tui_pacman_types::{Direction, GameAction, Phase};
//!
//! let mut game = GameState::new();
//! let mut pursuers = KeepFacing;
//!
//! game.apply_action(GameAction::SetFacing(Direction::Right));
//! game.step(&mut pursuers);
//!
//! // The first step to the right eats a pickup.
//! assert_eq!(game.score(), 10);
//! assert_eq!(game.phase(), Phase::Playing);
//! ```

pub mod actors;
pub mod board;
pub mod game_state;
pub mod maze;
pub mod movement;
pub mod snapshot;
pub mod strategy;

pub use tui_pacman_types as types;

// Re-export commonly used types for convenience
pub use actors::{Player, Pursuer};
pub use board::{Board, Consumed};
pub use game_state::{GameState, TickEvent, TickEvents};
pub use movement::{try_move, wrap_step};
pub use snapshot::GameSnapshot;
pub use strategy::{KeepFacing, PursuerStrategy, RandomWander};
