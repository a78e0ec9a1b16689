//! Pursuer strategy module - how pursuers pick their facing
//!
//! The engine asks a [`PursuerStrategy`] twice per pursuer and tick at most:
//! once before the move (may turn voluntarily) and once more if the move was
//! blocked by a wall (must pick again). The default strategy is the classic
//! random wander: no pathfinding and no interest in the player.
//!
//! Strategies are injected, so tests can swap in a deterministic one.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::actors::Pursuer;
use crate::board::Board;
use crate::types::{Direction, TURN_CHANCE_PERCENT};

pub trait PursuerStrategy {
    /// Facing to move in this tick. Returning `pursuer.facing` keeps course.
    fn decide_next_facing(&mut self, pursuer: &Pursuer, board: &Board) -> Direction;

    /// Facing to take after a move into a wall was rejected.
    fn facing_after_blocked(&mut self, pursuer: &Pursuer, board: &Board) -> Direction;
}

/// Random wandering with wall avoidance.
///
/// Turns to a uniformly random direction with a fixed chance per tick, and always
/// re-rolls uniformly after bumping into a wall. The re-roll may pick the same
/// blocked direction again.
#[derive(Debug, Clone)]
pub struct RandomWander<R = ChaCha8Rng> {
    rng: R,
    turn_chance_percent: u32,
}

impl RandomWander<ChaCha8Rng> {
    /// Reproducible wandering from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomWander<R> {
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            turn_chance_percent: TURN_CHANCE_PERCENT,
        }
    }

    fn random_direction(&mut self) -> Direction {
        Direction::ALL[self.rng.gen_range(0..Direction::ALL.len())]
    }
}

impl<R: Rng> PursuerStrategy for RandomWander<R> {
    fn decide_next_facing(&mut self, pursuer: &Pursuer, _board: &Board) -> Direction {
        if self.rng.gen_range(0..100) < self.turn_chance_percent {
            self.random_direction()
        } else {
            pursuer.facing
        }
    }

    fn facing_after_blocked(&mut self, _pursuer: &Pursuer, _board: &Board) -> Direction {
        self.random_direction()
    }
}

/// Deterministic strategy: never turns on its own, turns clockwise at walls.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeepFacing;

impl PursuerStrategy for KeepFacing {
    fn decide_next_facing(&mut self, pursuer: &Pursuer, _board: &Board) -> Direction {
        pursuer.facing
    }

    fn facing_after_blocked(&mut self, pursuer: &Pursuer, _board: &Board) -> Direction {
        pursuer.facing.turn_cw()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;

    fn pursuer() -> Pursuer {
        Pursuer::new(Position::new(5, 5), Direction::Up)
    }

    #[test]
    fn test_seeded_wander_is_deterministic() {
        let board = Board::new();
        let p = pursuer();
        let mut a = RandomWander::seeded(12345);
        let mut b = RandomWander::seeded(12345);

        for _ in 0..200 {
            assert_eq!(
                a.decide_next_facing(&p, &board),
                b.decide_next_facing(&p, &board)
            );
            assert_eq!(
                a.facing_after_blocked(&p, &board),
                b.facing_after_blocked(&p, &board)
            );
        }
    }

    #[test]
    fn test_turn_rate_is_roughly_twenty_percent() {
        let board = Board::new();
        let p = pursuer();
        // Only count turns away from Up: a random pick lands on Up 1/4 of the time.
        let mut wander = RandomWander::seeded(7);
        let turned = (0..10_000)
            .filter(|_| wander.decide_next_facing(&p, &board) != Direction::Up)
            .count();

        // Expected 20% * 3/4 = 15%.
        assert!((1_200..1_800).contains(&turned), "turned {} times", turned);
    }

    #[test]
    fn test_zero_turn_chance_keeps_facing() {
        let board = Board::new();
        let p = pursuer();
        let mut wander = RandomWander {
            rng: ChaCha8Rng::seed_from_u64(1),
            turn_chance_percent: 0,
        };
        for _ in 0..1_000 {
            assert_eq!(wander.decide_next_facing(&p, &board), Direction::Up);
        }
    }

    #[test]
    fn test_blocked_reroll_covers_all_directions() {
        let board = Board::new();
        let p = pursuer();
        let mut wander = RandomWander::seeded(99);
        let mut seen = [false; 4];
        for _ in 0..200 {
            let dir = wander.facing_after_blocked(&p, &board);
            let i = Direction::ALL.iter().position(|d| *d == dir).unwrap();
            seen[i] = true;
        }
        assert_eq!(seen, [true; 4]);
    }

    #[test]
    fn test_keep_facing_turns_clockwise_when_blocked() {
        let board = Board::new();
        let p = pursuer();
        let mut keep = KeepFacing;
        assert_eq!(keep.decide_next_facing(&p, &board), Direction::Up);
        assert_eq!(keep.facing_after_blocked(&p, &board), Direction::Right);
    }
}
