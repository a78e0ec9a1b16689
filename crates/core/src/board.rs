//! Board module - manages the maze grid
//!
//! The board is a 30x20 grid of [`CellType`]s. Its shape never changes; the only
//! mutation is pickup consumption, which turns a pickup cell into an empty one.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..29 (left to right), y ranges 0..19 (top to bottom)

use crate::maze::MAZE;
use crate::types::{
    CellType, Position, BOARD_HEIGHT, BOARD_WIDTH, PICKUP_SCORE, POWER_PICKUP_SCORE,
};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Result of consuming a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Consumed {
    /// What the cell held before consumption.
    pub cell: CellType,
    pub score_delta: u32,
}

impl Consumed {
    /// Power mode is session state; the board only signals it.
    pub fn enters_power_mode(&self) -> bool {
        self.cell == CellType::PowerPickup
    }
}

/// The maze grid - 30 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [CellType; BOARD_SIZE],
    /// Number of `Pickup` cells left. Power pickups are not counted.
    remaining_pickups: u32,
}

impl Board {
    /// Create the board for a fresh session from the static maze
    pub fn new() -> Self {
        Self::from_layout(&MAZE)
    }

    /// Build a board from text rows: `W` wall, `D` pickup, `P` power pickup,
    /// anything else empty. Missing rows and columns are empty; extra ones are ignored.
    pub fn from_layout(rows: &[&str]) -> Self {
        let mut cells = [CellType::Empty; BOARD_SIZE];
        let mut remaining_pickups = 0;

        for (y, row) in rows.iter().take(BOARD_HEIGHT as usize).enumerate() {
            for (x, ch) in row.chars().take(BOARD_WIDTH as usize).enumerate() {
                let cell = match ch {
                    'W' => CellType::Wall,
                    'D' => {
                        remaining_pickups += 1;
                        CellType::Pickup
                    }
                    'P' => CellType::PowerPickup,
                    _ => CellType::Empty,
                };
                cells[y * BOARD_WIDTH as usize + x] = cell;
            }
        }

        Self {
            cells,
            remaining_pickups,
        }
    }

    /// Calculate flat index from a position
    ///
    /// Positions are in bounds by construction; the engine never produces others.
    #[inline(always)]
    fn index(pos: Position) -> usize {
        debug_assert!(pos.x < BOARD_WIDTH && pos.y < BOARD_HEIGHT);
        (pos.y as usize) * (BOARD_WIDTH as usize) + (pos.x as usize)
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    pub fn cell_at(&self, pos: Position) -> CellType {
        self.cells[Self::index(pos)]
    }

    pub fn is_wall(&self, pos: Position) -> bool {
        self.cell_at(pos) == CellType::Wall
    }

    /// Consume whatever is at `pos`
    ///
    /// Pickups and power pickups become empty and report their score. Empty cells
    /// and walls are left alone and score nothing.
    pub fn consume(&mut self, pos: Position) -> Consumed {
        let idx = Self::index(pos);
        let cell = self.cells[idx];
        let score_delta = match cell {
            CellType::Pickup => {
                self.cells[idx] = CellType::Empty;
                self.remaining_pickups -= 1;
                PICKUP_SCORE
            }
            CellType::PowerPickup => {
                self.cells[idx] = CellType::Empty;
                POWER_PICKUP_SCORE
            }
            CellType::Empty | CellType::Wall => 0,
        };
        Consumed { cell, score_delta }
    }

    /// Pickups left to eat; the session is won when this reaches zero.
    pub fn remaining_pickups(&self) -> u32 {
        self.remaining_pickups
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[CellType] {
        &self.cells
    }

    /// Iterate over one row of cells
    pub fn row(&self, y: u8) -> &[CellType] {
        let start = (y as usize) * (BOARD_WIDTH as usize);
        &self.cells[start..start + BOARD_WIDTH as usize]
    }

    /// Count cells of a given type (linear scan, for checks and tests)
    pub fn count(&self, kind: CellType) -> usize {
        self.cells.iter().filter(|&&c| c == kind).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(Position::new(0, 0)), 0);
        assert_eq!(Board::index(Position::new(29, 0)), 29);
        assert_eq!(Board::index(Position::new(0, 1)), 30);
        assert_eq!(Board::index(Position::new(29, 19)), 599);
    }

    #[test]
    fn test_static_maze_counts() {
        let board = Board::new();
        assert_eq!(board.remaining_pickups(), 148);
        assert_eq!(board.count(CellType::Pickup), 148);
        assert_eq!(board.count(CellType::PowerPickup), 2);
        assert_eq!(board.cell_at(Position::new(1, 3)), CellType::PowerPickup);
        assert_eq!(board.cell_at(Position::new(28, 3)), CellType::PowerPickup);
    }

    #[test]
    fn test_short_rows_are_padded_with_empty() {
        let board = Board::from_layout(&["WD"]);
        assert_eq!(board.cell_at(Position::new(0, 0)), CellType::Wall);
        assert_eq!(board.cell_at(Position::new(1, 0)), CellType::Pickup);
        assert_eq!(board.cell_at(Position::new(2, 0)), CellType::Empty);
        assert_eq!(board.cell_at(Position::new(0, 19)), CellType::Empty);
        assert_eq!(board.remaining_pickups(), 1);
    }

    #[test]
    fn test_consume_pickup() {
        let mut board = Board::from_layout(&["DD"]);
        let consumed = board.consume(Position::new(0, 0));

        assert_eq!(consumed.cell, CellType::Pickup);
        assert_eq!(consumed.score_delta, 10);
        assert!(!consumed.enters_power_mode());
        assert_eq!(board.cell_at(Position::new(0, 0)), CellType::Empty);
        assert_eq!(board.remaining_pickups(), 1);
    }

    #[test]
    fn test_consume_power_pickup_does_not_touch_pickup_count() {
        let mut board = Board::from_layout(&["PD"]);
        let consumed = board.consume(Position::new(0, 0));

        assert_eq!(consumed.score_delta, 50);
        assert!(consumed.enters_power_mode());
        assert_eq!(board.cell_at(Position::new(0, 0)), CellType::Empty);
        assert_eq!(board.remaining_pickups(), 1);
    }

    #[test]
    fn test_consume_empty_and_wall_are_noops() {
        let mut board = Board::from_layout(&["W D"]);
        let before = board.clone();

        assert_eq!(board.consume(Position::new(0, 0)).score_delta, 0);
        assert_eq!(board.consume(Position::new(1, 0)).score_delta, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_consume_twice_scores_once() {
        let mut board = Board::from_layout(&["D"]);
        assert_eq!(board.consume(Position::new(0, 0)).score_delta, 10);
        assert_eq!(board.consume(Position::new(0, 0)).score_delta, 0);
        assert_eq!(board.remaining_pickups(), 0);
    }
}
