//! Player and pursuer state.

use crate::types::{
    Direction, Position, PLAYER_START, PLAYER_START_FACING, PURSUER_COUNT, PURSUER_SPAWNS,
    PURSUER_START_FACING,
};

/// The player token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Player {
    pub pos: Position,
    /// Set by input; the engine moves one cell this way every tick.
    pub facing: Direction,
}

impl Player {
    pub fn new() -> Self {
        Self {
            pos: PLAYER_START,
            facing: PLAYER_START_FACING,
        }
    }
}

impl Default for Player {
    fn default() -> Self {
        Self::new()
    }
}

/// A pursuer.
///
/// Fright is stored only as a countdown, so `is_frightened()` can never disagree
/// with `frightened_ticks() > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pursuer {
    pub pos: Position,
    pub facing: Direction,
    frightened_ticks: u32,
}

impl Pursuer {
    pub fn new(pos: Position, facing: Direction) -> Self {
        Self {
            pos,
            facing,
            frightened_ticks: 0,
        }
    }

    /// The fixed roster, in slot order.
    pub fn roster() -> [Pursuer; PURSUER_COUNT] {
        PURSUER_SPAWNS.map(|pos| Pursuer::new(pos, PURSUER_START_FACING))
    }

    /// Respawn slot for a roster index: two columns from (14, 10), filled row by row.
    pub fn respawn_slot(index: usize) -> Position {
        Position::new(14 + (index % 2) as u8, 10 + (index / 2) as u8)
    }

    pub fn is_frightened(&self) -> bool {
        self.frightened_ticks > 0
    }

    pub fn frightened_ticks(&self) -> u32 {
        self.frightened_ticks
    }

    pub fn frighten(&mut self, ticks: u32) {
        self.frightened_ticks = ticks;
    }

    pub fn calm(&mut self) {
        self.frightened_ticks = 0;
    }

    /// Count one tick of fright down. Returns true if fright ended on this tick.
    pub fn decay_fright(&mut self) -> bool {
        if self.frightened_ticks == 0 {
            return false;
        }
        self.frightened_ticks -= 1;
        self.frightened_ticks == 0
    }
}
