//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 30 columns (indexed 0-29)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Player start**: (1, 1), facing right
//!
//! # Simulation Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 120 | Reference tick cadence |
//! | `START_LIVES` | 3 | Lives at session start |
//! | `POWER_TICKS` | 20 | Power mode / frightened duration in ticks |
//! | `PICKUP_SCORE` | 10 | Score for a pickup |
//! | `POWER_PICKUP_SCORE` | 50 | Score for a power pickup |
//! | `PURSUER_EATEN_SCORE` | 200 | Score for eating a frightened pursuer |
//! | `TURN_CHANCE_PERCENT` | 20 | Per-tick chance a wandering pursuer turns |
//!
//! # Examples
//!
//! ```
//! use tui_pacman_types::{Direction, GameAction, Position, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! // Directions map to unit deltas
//! assert_eq!(Direction::Up.delta(), (0, -1));
//!
//! // Facing changes are the only input that reaches the player
//! let action = GameAction::SetFacing(Direction::Down);
//! assert_eq!(action.as_str(), "setFacing");
//!
//! assert_eq!(Position::new(1, 1), Position { x: 1, y: 1 });
//! assert_eq!(BOARD_WIDTH, 30);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (30 columns)
pub const BOARD_WIDTH: u8 = 30;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Reference tick interval in milliseconds.
pub const TICK_MS: u32 = 120;

/// Lives at the start of a session.
pub const START_LIVES: u32 = 3;

/// Level counter at the start of a session (static).
pub const START_LEVEL: u32 = 1;

/// Player spawn and recall coordinate.
pub const PLAYER_START: Position = Position::new(1, 1);

/// Player facing at the start of a session.
pub const PLAYER_START_FACING: Direction = Direction::Right;

/// Size of the fixed pursuer roster.
pub const PURSUER_COUNT: usize = 4;

/// Spawn coordinates, indexed by roster slot.
pub const PURSUER_SPAWNS: [Position; PURSUER_COUNT] = [
    Position::new(14, 10),
    Position::new(15, 10),
    Position::new(14, 11),
    Position::new(15, 11),
];

/// Pursuer facing at spawn.
pub const PURSUER_START_FACING: Direction = Direction::Up;

/// Duration of power mode and of pursuer fright, in ticks.
pub const POWER_TICKS: u32 = 20;

/// Score for consuming a pickup.
pub const PICKUP_SCORE: u32 = 10;

/// Score for consuming a power pickup.
pub const POWER_PICKUP_SCORE: u32 = 50;

/// Score for catching a frightened pursuer.
pub const PURSUER_EATEN_SCORE: u32 = 200;

/// Chance (in percent) that a wandering pursuer picks a new facing on a tick.
pub const TURN_CHANCE_PERCENT: u32 = 20;


/// A board coordinate. Always within `[0, BOARD_WIDTH) x [0, BOARD_HEIGHT)` once it
/// has gone through the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Movement directions
///
/// The y axis grows downwards: `Up` is `(0, -1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order used for uniform random picks.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit step `(dx, dy)` for this direction.
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Quarter turn clockwise
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_pacman_types::Direction;
    ///
    /// assert_eq!(Direction::Up.turn_cw(), Direction::Right);
    /// assert_eq!(Direction::Right.turn_cw(), Direction::Down);
    /// assert_eq!(Direction::Down.turn_cw(), Direction::Left);
    /// assert_eq!(Direction::Left.turn_cw(), Direction::Up);
    /// ```
    pub fn turn_cw(&self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Contents of a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellType {
    Wall,
    Pickup,
    PowerPickup,
    #[default]
    Empty,
}

/// Session phase
///
/// `Playing` is the only phase in which ticks advance the simulation.
/// `Won` and `Lost` are left only through a restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    #[default]
    Playing,
    Paused,
    Won,
    Lost,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        match self {
            Phase::Won | Phase::Lost => true,
            Phase::Playing | Phase::Paused => false,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Playing => "playing",
            Phase::Paused => "paused",
            Phase::Won => "won",
            Phase::Lost => "lost",
        }
    }
}

/// Input signals that cross into the game session
///
/// Raw key events are mapped into these by the input layer; everything else is
/// dropped before it reaches the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Change the player's facing; movement happens on the next ticks
    SetFacing(Direction),
    /// Toggle between playing and paused
    TogglePause,
    /// Discard the session and start a fresh one
    Restart,
    /// Leave the game loop
    Quit,
}

impl GameAction {
    /// Convert to camelCase string (for logs)
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::SetFacing(_) => "setFacing",
            GameAction::TogglePause => "togglePause",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}
