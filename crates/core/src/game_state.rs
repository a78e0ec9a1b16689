//! Game state module - the session and its per-tick simulation step
//!
//! A [`GameState`] owns everything a running game has: the board, the player, the
//! pursuer roster, score, lives, level, power mode and the current [`Phase`].
//! External code changes it in exactly two ways:
//!
//! - [`GameState::apply_action`] for input signals (facing, pause, restart)
//! - [`GameState::step`] once per tick of the external clock
//!
//! A step runs, in order: player move and pickup consumption, win check, each
//! pursuer in roster order (fright decay, facing decision, move, collision), and
//! finally the power-mode countdown. Nothing moves unless the phase is `Playing`.

use arrayvec::ArrayVec;

use crate::actors::{Player, Pursuer};
use crate::board::Board;
use crate::movement::try_move;
use crate::snapshot::GameSnapshot;
use crate::strategy::PursuerStrategy;
use crate::types::*;

/// Upper bound on events a single tick can produce: one consumption, a win, one
/// collision per pursuer, a loss and the end of power mode.
pub const MAX_TICK_EVENTS: usize = 2 + PURSUER_COUNT + 2;

/// Events emitted by one tick, in the order they happened.
pub type TickEvents = ArrayVec<TickEvent, MAX_TICK_EVENTS>;

/// Something that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickEvent {
    PickupEaten { at: Position },
    PowerPickupEaten { at: Position },
    /// A frightened pursuer was caught and sent back to its respawn slot.
    PursuerEaten { index: usize },
    /// The player was caught by an unfrightened pursuer.
    PlayerCaught { index: usize, lives_left: u32 },
    PowerModeEnded,
    Won,
    Lost,
}

/// Complete session state
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    player: Player,
    pursuers: [Pursuer; PURSUER_COUNT],
    score: u32,
    lives: u32,
    level: u32,
    phase: Phase,
    /// Session-level power countdown; power mode is active while non-zero.
    power_ticks: u32,
    /// Ticks simulated in this session (paused ticks are not counted).
    ticks: u64,
}

impl GameState {
    /// Create a fresh session on the static maze
    pub fn new() -> Self {
        Self::with_board(Board::new())
    }

    /// Create a fresh session on a given board, with actors at their spawns.
    pub fn with_board(board: Board) -> Self {
        Self {
            board,
            player: Player::new(),
            pursuers: Pursuer::roster(),
            score: 0,
            lives: START_LIVES,
            level: START_LEVEL,
            phase: Phase::Playing,
            power_ticks: 0,
            ticks: 0,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn pursuers(&self) -> &[Pursuer; PURSUER_COUNT] {
        &self.pursuers
    }

    /// Direct access for scenario setup (tests, benches, demo tooling).
    pub fn player_mut(&mut self) -> &mut Player {
        &mut self.player
    }

    /// Direct access for scenario setup (tests, benches, demo tooling).
    pub fn pursuers_mut(&mut self) -> &mut [Pursuer; PURSUER_COUNT] {
        &mut self.pursuers
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn power_mode_active(&self) -> bool {
        self.power_ticks > 0
    }

    pub fn power_ticks(&self) -> u32 {
        self.power_ticks
    }

    pub fn remaining_pickups(&self) -> u32 {
        self.board.remaining_pickups()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        for (y, row) in out.board.iter_mut().enumerate() {
            row.copy_from_slice(self.board.row(y as u8));
        }
        out.player = self.player;
        out.pursuers = self.pursuers;
        out.score = self.score;
        out.lives = self.lives;
        out.level = self.level;
        out.phase = self.phase;
        out.power_mode = self.power_mode_active();
        out.power_ticks = self.power_ticks;
        out.remaining_pickups = self.board.remaining_pickups();
        out.ticks = self.ticks;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Apply an input signal
    ///
    /// Returns whether the signal changed anything. `Quit` is never handled here;
    /// leaving the loop is the caller's job.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::SetFacing(dir) => {
                self.player.facing = dir;
                true
            }
            GameAction::TogglePause => {
                if self.phase.is_terminal() {
                    return false;
                }
                self.phase = match self.phase {
                    Phase::Paused => Phase::Playing,
                    _ => Phase::Paused,
                };
                true
            }
            GameAction::Restart => {
                *self = Self::new();
                true
            }
            GameAction::Quit => false,
        }
    }

    /// Advance the simulation by one tick
    pub fn step<S>(&mut self, strategy: &mut S) -> TickEvents
    where
        S: PursuerStrategy + ?Sized,
    {
        let mut events = TickEvents::new();
        match self.phase {
            Phase::Playing => {}
            Phase::Paused | Phase::Won | Phase::Lost => return events,
        }
        self.ticks += 1;

        self.step_player(&mut events);

        // The win check does not short-circuit the tick: pursuers still move and
        // collide on the tick the last pickup is eaten.
        if self.board.remaining_pickups() == 0 {
            self.phase = Phase::Won;
            events.push(TickEvent::Won);
        }

        self.step_pursuers(strategy, &mut events);
        self.decay_power_mode(&mut events);
        events
    }

    fn step_player(&mut self, events: &mut TickEvents) {
        let Some(next) = try_move(&self.board, self.player.pos, self.player.facing) else {
            return;
        };
        self.player.pos = next;

        let consumed = self.board.consume(next);
        self.score += consumed.score_delta;
        match consumed.cell {
            CellType::Pickup => events.push(TickEvent::PickupEaten { at: next }),
            CellType::PowerPickup => {
                self.enter_power_mode();
                events.push(TickEvent::PowerPickupEaten { at: next });
            }
            CellType::Empty | CellType::Wall => {}
        }
    }

    fn enter_power_mode(&mut self) {
        self.power_ticks = POWER_TICKS;
        for pursuer in &mut self.pursuers {
            pursuer.frighten(POWER_TICKS);
        }
    }

    fn step_pursuers<S>(&mut self, strategy: &mut S, events: &mut TickEvents)
    where
        S: PursuerStrategy + ?Sized,
    {
        for index in 0..self.pursuers.len() {
            let pursuer = &mut self.pursuers[index];
            pursuer.decay_fright();

            pursuer.facing = strategy.decide_next_facing(pursuer, &self.board);
            match try_move(&self.board, pursuer.pos, pursuer.facing) {
                Some(next) => pursuer.pos = next,
                None => pursuer.facing = strategy.facing_after_blocked(pursuer, &self.board),
            }

            if pursuer.pos != self.player.pos {
                continue;
            }

            if pursuer.is_frightened() {
                pursuer.calm();
                pursuer.pos = Pursuer::respawn_slot(index);
                self.score += PURSUER_EATEN_SCORE;
                events.push(TickEvent::PursuerEaten { index });
            } else {
                self.catch_player(index, events);
            }
        }
    }

    /// Take a life. Running out of lives ends the session, even on the tick the
    /// board was cleared. Once lives are gone, further catches change nothing.
    fn catch_player(&mut self, index: usize, events: &mut TickEvents) {
        if self.lives == 0 {
            return;
        }
        self.lives -= 1;
        events.push(TickEvent::PlayerCaught {
            index,
            lives_left: self.lives,
        });

        if self.lives > 0 {
            self.player.pos = PLAYER_START;
            return;
        }
        self.phase = Phase::Lost;
        events.push(TickEvent::Lost);
    }

    fn decay_power_mode(&mut self, events: &mut TickEvents) {
        if self.power_ticks == 0 {
            return;
        }
        self.power_ticks -= 1;
        if self.power_ticks == 0 {
            events.push(TickEvent::PowerModeEnded);
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
