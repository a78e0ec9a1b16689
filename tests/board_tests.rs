//! Board tests - the static maze and pickup consumption

use tui_pacman::core::Board;
use tui_pacman::types::{CellType, Position, BOARD_HEIGHT, BOARD_WIDTH, PURSUER_SPAWNS};

#[test]
fn test_board_dimensions() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
    assert_eq!(board.cells().len(), 600);
}

#[test]
fn test_static_maze_border_rows_are_walls() {
    let board = Board::new();
    for x in 0..BOARD_WIDTH {
        assert_eq!(board.cell_at(Position::new(x, 0)), CellType::Wall);
    }
}

#[test]
fn test_player_start_is_open() {
    let board = Board::new();
    assert!(!board.is_wall(Position::new(1, 1)));
}

#[test]
fn test_lower_spawn_slots_are_open() {
    // The upper two spawn slots sit inside the pen wall; pursuers walk out of it.
    let board = Board::new();
    assert!(board.is_wall(PURSUER_SPAWNS[0]));
    assert!(board.is_wall(PURSUER_SPAWNS[1]));
    assert!(!board.is_wall(PURSUER_SPAWNS[2]));
    assert!(!board.is_wall(PURSUER_SPAWNS[3]));
}

#[test]
fn test_remaining_pickups_tracks_board_contents() {
    let mut board = Board::new();
    let mut expected = board.remaining_pickups();

    for y in 0..BOARD_HEIGHT {
        for x in 0..BOARD_WIDTH {
            let pos = Position::new(x, y);
            let was_pickup = board.cell_at(pos) == CellType::Pickup;
            let consumed = board.consume(pos);
            if was_pickup {
                expected -= 1;
                assert_eq!(consumed.score_delta, 10);
            }
            assert_eq!(board.remaining_pickups(), expected);
            assert_eq!(board.count(CellType::Pickup), expected as usize);
        }
    }

    assert_eq!(board.remaining_pickups(), 0);
    assert_eq!(board.count(CellType::PowerPickup), 0);
    // Walls are never consumed.
    assert_eq!(board.count(CellType::Wall), Board::new().count(CellType::Wall));
}
