//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested. All colours come from a
//! [`Palette`] value owned by the view; there is no global style state.

use crate::core::{GameSnapshot, Pursuer};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{CellType, Phase, BOARD_HEIGHT, BOARD_WIDTH};

pub const PLAYER_GLYPH: char = '❤';
pub const PURSUER_GLYPH: char = '⚉';
pub const PICKUP_GLYPH: char = '·';
pub const POWER_PICKUP_GLYPH: char = '●';
pub const WALL_GLYPH: char = '█';

pub const WIN_TEXT: &str = "YOU WIN! Press 'r' to play again or 'q' to quit.";
pub const LOSE_TEXT: &str = "GAME OVER! Press 'r' to play again or 'q' to quit.";
pub const PAUSED_TEXT: &str = "Game Paused. Press 'p' to continue.";
pub const CONTROLS_TEXT: &str =
    "Controls: arrow keys to move, 'p' to pause, 'q' to quit, 'r' to restart";

/// Rows below the board frame: the status line and the message line.
const FOOTER_ROWS: u16 = 2;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Colours for every element the view draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub player: CellStyle,
    pub pursuer: CellStyle,
    pub frightened: CellStyle,
    pub wall: CellStyle,
    pub pickup: CellStyle,
    pub power_pickup: CellStyle,
    pub empty: CellStyle,
    pub border: CellStyle,
    pub status: CellStyle,
    pub won: CellStyle,
    pub lost: CellStyle,
    pub hint: CellStyle,
}

impl Default for Palette {
    fn default() -> Self {
        let white = CellStyle::fg(Rgb::hex(0xffffff));
        Self {
            player: CellStyle::fg(Rgb::hex(0xffff00)),
            pursuer: CellStyle::fg(Rgb::hex(0xd7005f)),
            frightened: CellStyle::fg(Rgb::hex(0x0000ff)),
            wall: CellStyle::fg(Rgb::hex(0xff00ff)),
            pickup: white,
            power_pickup: white,
            empty: CellStyle::default(),
            border: CellStyle::fg(Rgb::new(200, 200, 200)),
            status: CellStyle::fg(Rgb::hex(0xff00af)).bold(),
            won: CellStyle::fg(Rgb::hex(0x00ff00)).bold(),
            lost: CellStyle::fg(Rgb::hex(0xff0000)).bold(),
            hint: CellStyle::fg(Rgb::hex(0xff00af)).on(Rgb::hex(0xafffff)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the maze.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
    palette: Palette,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell roughly squares up terminal glyphs.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
            palette: Palette::default(),
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            ..Self::default()
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Width and height of the board frame, border included.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            BOARD_HEIGHT as u16 + 2,
        )
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames; it is only reallocated when
    /// the viewport grows.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(self.palette.empty.into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h + FOOTER_ROWS) / 2,
            AnchorY::Top => 0,
        };

        self.draw_border(fb, start_x, start_y, frame_w, frame_h);

        for y in 0..BOARD_HEIGHT {
            for x in 0..BOARD_WIDTH {
                let (glyph, pad, style) = self.cell_look(snap, x, y);
                let px = start_x + 1 + (x as u16) * self.cell_w;
                let py = start_y + 1 + y as u16;
                fb.put_char(px, py, glyph, style);
                fb.fill_rect(px + 1, py, self.cell_w - 1, 1, pad, style);
            }
        }

        let footer_y = start_y.saturating_add(frame_h);
        self.draw_status(fb, snap, start_x, footer_y);
        self.draw_message(fb, snap.phase, viewport, footer_y.saturating_add(1));
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Glyph, padding and style for one board cell. The player is drawn over
    /// pursuers, pursuers over the board.
    fn cell_look(&self, snap: &GameSnapshot, x: u8, y: u8) -> (char, char, CellStyle) {
        if snap.player_at(x, y) {
            return (PLAYER_GLYPH, ' ', self.palette.player);
        }
        if let Some(pursuer) = snap.pursuer_at(x, y) {
            return (PURSUER_GLYPH, ' ', self.pursuer_style(pursuer));
        }
        match snap.board[y as usize][x as usize] {
            CellType::Wall => (WALL_GLYPH, WALL_GLYPH, self.palette.wall),
            CellType::Pickup => (PICKUP_GLYPH, ' ', self.palette.pickup),
            CellType::PowerPickup => (POWER_PICKUP_GLYPH, ' ', self.palette.power_pickup),
            CellType::Empty => (' ', ' ', self.palette.empty),
        }
    }

    fn pursuer_style(&self, pursuer: &Pursuer) -> CellStyle {
        if pursuer.is_frightened() {
            self.palette.frightened
        } else {
            self.palette.pursuer
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
        let style = self.palette.border;

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_status(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let style = self.palette.status;
        let mut cx = fb.put_str(x, y, "Score: ", style);
        cx = fb.put_u32(cx, y, snap.score, style);
        cx = fb.put_str(cx, y, "  Lives: ", style);
        cx = fb.put_u32(cx, y, snap.lives, style);
        cx = fb.put_str(cx, y, "  Level: ", style);
        fb.put_u32(cx, y, snap.level, style);
    }

    fn draw_message(&self, fb: &mut FrameBuffer, phase: Phase, viewport: Viewport, y: u16) {
        let (text, style) = match phase {
            Phase::Won => (WIN_TEXT, self.palette.won),
            Phase::Lost => (LOSE_TEXT, self.palette.lost),
            Phase::Paused => (PAUSED_TEXT, self.palette.hint),
            Phase::Playing => (CONTROLS_TEXT, self.palette.hint),
        };
        let text_w = text.chars().count() as u16;
        let x = viewport.width.saturating_sub(text_w) / 2;
        fb.put_str(x, y, text, style);
    }
}
