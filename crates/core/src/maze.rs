//! The static maze every session starts from.
//!
//! Legend: `W` wall, `D` pickup, `P` power pickup, anything else empty.
//! Short rows are padded with empty cells by [`Board::from_layout`](crate::Board::from_layout).

use crate::types::BOARD_HEIGHT;

pub const MAZE: [&str; BOARD_HEIGHT as usize] = [
    "WWWWWWWWWWWWWWWWWWWWWWWWWWWWWW",
    "WDDDDDDDDDDDDWWDDDDDDDDDDDDDDW",
    "WDWWWWDWWWWWDWWDWWWWWDWWWWWDWW",
    "WPDWWWDWWWWWDWWDWWWWWDWWWWWDPW",
    "WDWWWWDWWWWWDWWDWWWWWDWWWWWDWW",
    "WDDDDDDDDDDDDDDDDDDDDDDDDDDDDW",
    "WDWWWWDWWDWWWWWWWWDWWDWWWWWDWW",
    "WDWWWWDWWDWWWWWWWWDWWDWWWWWDWW",
    "WDDDDDDWWDDDDWWDDDDWWDDDDDDWW",
    "WWWWWWDWWWWW WWWW WWWWDWWWWWW",
    "     WDWWWWW WWWW WWWWDW     ",
    "     WDWW          WWDW     ",
    "     WDWW WWWWWWWW WWDW     ",
    "WWWWWWDWW W      W WWDWWWWWWW",
    "      D   W      W   D      ",
    "WWWWWWDWW WWWWWWWW WWDWWWWWWW",
    "     WDWW          WWDW     ",
    "     WDWW WWWWWWWW WWDW     ",
    "WWWWWWDWW WWWWWWWW WWDWWWWWWW",
    "WDDDDDDDDDDDDWWDDDDDDDDDDDDWW",
];
