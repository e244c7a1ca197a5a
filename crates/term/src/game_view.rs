//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested, and it does not
//! allocate once the framebuffer has its size.

use std::fmt::Write as _;

use arrayvec::ArrayString;

use crate::core::GameSnapshot;
use crate::effects::Effects;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::theme;
use crate::types::{Position, TerminationCause, BACKGROUND_COUNT};

/// Width of the side panel including its left gap.
const PANEL_W: u16 = 16;

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

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Board placement inside the viewport, in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Layout {
    /// Top-left corner of the border.
    x: u16,
    y: u16,
    frame_w: u16,
    frame_h: u16,
    /// Whether the side panel fits next to the board.
    panel: bool,
}

/// A lightweight terminal renderer for the snake game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps the board roughly square.
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Terminal size needed to show the board and the side panel.
    pub fn preferred_viewport(&self, grid_size: u8) -> Viewport {
        let g = grid_size as u16;
        Viewport::new(g * self.cell_w + 2 + PANEL_W, g + 2)
    }

    fn layout(&self, grid_size: u8, viewport: Viewport) -> Layout {
        let g = grid_size as u16;
        let frame_w = g * self.cell_w + 2;
        let frame_h = g + 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };
        let panel = viewport.width >= frame_w + PANEL_W;
        let total_w = if panel { frame_w + PANEL_W } else { frame_w };
        Layout {
            x: viewport.width.saturating_sub(total_w) / 2,
            y,
            frame_w,
            frame_h,
            panel,
        }
    }

    /// Render into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is only resized
    /// when the viewport changes.
    pub fn render_into(
        &self,
        snap: &GameSnapshot,
        fx: &Effects,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);

        let theme_rgb = match fx.fade() {
            Some((from, progress)) => theme::blended(from, snap.background_index, progress),
            None => theme::background(snap.background_index),
        };
        let outer = CellStyle::new(theme::MUTED, theme::outer_bg(theme_rgb));
        let board_bg = theme::board_bg(theme_rgb);
        let lay = self.layout(snap.grid_size, viewport);

        fb.clear(outer.into_cell(' '));

        self.draw_board(fb, lay, snap.grid_size, board_bg);
        self.draw_border(fb, lay, CellStyle::new(theme::BORDER, outer.bg));

        // Food under the snake so a same-cell overlap (only possible after a
        // board-full ending) shows the head.
        self.draw_food(fb, lay, snap.food, snap.grid_size);
        for (i, &segment) in snap.snake.iter().enumerate() {
            let color = if i == 0 { theme::HEAD } else { theme::BODY };
            let style = CellStyle::new(color, board_bg);
            self.fill_cell(fb, lay, segment, snap.grid_size, '█', style);
        }

        self.draw_side_panel(fb, snap, fx, lay, outer.bg);

        if snap.game_over() {
            self.draw_game_over(fb, snap, lay, board_bg);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, fx: &Effects, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, fx, viewport, &mut fb);
        fb
    }

    fn draw_board(&self, fb: &mut FrameBuffer, lay: Layout, grid_size: u8, board_bg: Rgb) {
        let inner_w = lay.frame_w - 2;
        let inner_h = lay.frame_h - 2;
        let bg = CellStyle::new(theme::MUTED, board_bg);
        fb.fill_rect(lay.x + 1, lay.y + 1, inner_w, inner_h, ' ', bg);

        let dot = CellStyle::new(theme::grid_dot(board_bg), board_bg);
        for y in 0..grid_size as i16 {
            for x in 0..grid_size as i16 {
                let (cx, cy) = self.cell_origin(lay, Position::new(x, y));
                fb.put_char(cx, cy, '·', dot);
            }
        }
    }

    fn draw_border(&self, fb: &mut FrameBuffer, lay: Layout, style: CellStyle) {
        let (x, y, w, h) = (lay.x, lay.y, lay.frame_w, lay.frame_h);
        if w < 2 || h < 2 {
            return;
        }

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

    fn draw_food(&self, fb: &mut FrameBuffer, lay: Layout, food: Position, grid_size: u8) {
        if !food.in_bounds(grid_size) {
            return;
        }
        let style = CellStyle::new(theme::FOOD_FG, theme::FOOD_BG).bold();
        let (cx, cy) = self.cell_origin(lay, food);
        fb.fill_rect(cx, cy, self.cell_w, 1, ' ', style);
        fb.put_char(cx, cy, 'W', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        fx: &Effects,
        lay: Layout,
        bg: Rgb,
    ) {
        if !lay.panel {
            return;
        }
        let px = lay.x + lay.frame_w + 2;

        let label = CellStyle::new(theme::MUTED, bg);
        let value = CellStyle::new(theme::TEXT, bg).bold();
        let mut y = lay.y;
        let mut line = |fb: &mut FrameBuffer, text: &str, style: CellStyle| {
            fb.put_str(px, y, text, style);
            y += 1;
        };

        line(fb, "SNAKE", CellStyle::new(theme::HEAD, bg).bold());
        line(fb, "", label);
        // Stack buffers: u32::MAX is 10 digits.
        let mut buf = ArrayString::<16>::new();
        line(fb, "SCORE", label);
        let _ = write!(buf, "{}", snap.score);
        line(fb, buf.as_str(), value);
        line(fb, "LEVEL", label);
        buf.clear();
        let _ = write!(buf, "{}", snap.level);
        line(fb, buf.as_str(), value);
        line(fb, "BG", label);
        buf.clear();
        let _ = write!(buf, "{}/{}", snap.background_index as u32 + 1, BACKGROUND_COUNT);
        line(fb, buf.as_str(), value);
        line(fb, "", label);

        if fx.pop_visible() && snap.running {
            line(fb, "+1", CellStyle::new(theme::POP, bg).bold());
        } else {
            line(fb, "", label);
        }
        line(fb, "", label);

        line(fb, "ARROWS/WASD", label);
        line(fb, "R  RESTART", label);
        line(fb, "Q  QUIT", label);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, lay: Layout, board_bg: Rgb) {
        let cx = lay.x + lay.frame_w / 2;
        let cy = lay.y + lay.frame_h / 2;
        let title = CellStyle::new(theme::TEXT, board_bg).bold();
        let body = CellStyle::new(theme::MUTED, board_bg);

        let reason = match snap.termination {
            Some(TerminationCause::Wall) => "HIT THE WALL",
            Some(TerminationCause::SelfCollision) => "HIT YOURSELF",
            Some(TerminationCause::BoardFull) => "BOARD FULL",
            None => "",
        };

        fb.put_str_centered(cx, cy.saturating_sub(2), "GAME OVER", title);
        fb.put_str_centered(cx, cy.saturating_sub(1), reason, body);
        let mut score = ArrayString::<24>::new();
        let _ = write!(score, "SCORE {}", snap.score);
        fb.put_str_centered(cx, cy, score.as_str(), title);
        fb.put_str_centered(cx, cy + 1, "PRESS R TO RESTART", body);
    }

    fn cell_origin(&self, lay: Layout, pos: Position) -> (u16, u16) {
        (
            lay.x + 1 + (pos.x as u16) * self.cell_w,
            lay.y + 1 + pos.y as u16,
        )
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        lay: Layout,
        pos: Position,
        grid_size: u8,
        ch: char,
        style: CellStyle,
    ) {
        if !pos.in_bounds(grid_size) {
            return;
        }
        let (cx, cy) = self.cell_origin(lay, pos);
        fb.fill_rect(cx, cy, self.cell_w, 1, ch, style);
    }
}
