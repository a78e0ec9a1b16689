//! Movement rules shared by the player and the pursuers.
//!
//! A step moves one cell in the facing direction. Each axis wraps around on its
//! own, before the wall check, so a mover can never leave the board. A step into
//! a wall is rejected and the mover stays put.

use crate::board::Board;
use crate::types::{Direction, Position, BOARD_HEIGHT, BOARD_WIDTH};

/// The cell one step from `pos` in `dir`, wrapped onto the board.
pub fn wrap_step(pos: Position, dir: Direction) -> Position {
    let (dx, dy) = dir.delta();
    Position::new(
        wrap_axis(pos.x, dx, BOARD_WIDTH),
        wrap_axis(pos.y, dy, BOARD_HEIGHT),
    )
}

#[inline(always)]
fn wrap_axis(v: u8, d: i8, size: u8) -> u8 {
    let next = v as i16 + d as i16;
    if next < 0 {
        size - 1
    } else if next >= size as i16 {
        0
    } else {
        next as u8
    }
}

/// Where a mover at `pos` facing `dir` ends up, or `None` if a wall blocks it.
pub fn try_move(board: &Board, pos: Position, dir: Direction) -> Option<Position> {
    let next = wrap_step(pos, dir);
    if board.is_wall(next) {
        None
    } else {
        Some(next)
    }
}
