use crate::actors::{Player, Pursuer};
use crate::types::{
    CellType, Phase, BOARD_HEIGHT, BOARD_WIDTH, PURSUER_COUNT, START_LEVEL, START_LIVES,
};

/// Read-only copy of a session, handed to renderers between ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[CellType; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub player: Player,
    pub pursuers: [Pursuer; PURSUER_COUNT],
    pub score: u32,
    pub lives: u32,
    pub level: u32,
    pub phase: Phase,
    pub power_mode: bool,
    pub power_ticks: u32,
    pub remaining_pickups: u32,
    pub ticks: u64,
}

impl GameSnapshot {
    /// First pursuer standing on (x, y), in roster order.
    pub fn pursuer_at(&self, x: u8, y: u8) -> Option<&Pursuer> {
        self.pursuers
            .iter()
            .find(|p| p.pos.x == x && p.pos.y == y)
    }

    pub fn player_at(&self, x: u8, y: u8) -> bool {
        self.player.pos.x == x && self.player.pos.y == y
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[CellType::Empty; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            player: Player::new(),
            pursuers: Pursuer::roster(),
            score: 0,
            lives: START_LIVES,
            level: START_LEVEL,
            phase: Phase::Playing,
            power_mode: false,
            power_ticks: 0,
            remaining_pickups: 0,
            ticks: 0,
        }
    }
}
