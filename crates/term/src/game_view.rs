//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{GameSnapshot, Shape};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// A transient message drawn over the board, such as the game-over banner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeView {
    pub title: &'static str,
    pub score: u32,
}

/// Block color for a cell tag
pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0xF0, 0x80, 0x80),
        PieceKind::O => Rgb::new(0xAD, 0xD8, 0xE6),
        PieceKind::T => Rgb::new(0x90, 0xEE, 0x90),
        PieceKind::S => Rgb::new(0xDD, 0xDD, 0x90),
        PieceKind::Z => Rgb::new(0xE6, 0xE6, 0xFA),
        PieceKind::J => Rgb::new(0xA3, 0x83, 0xD6),
        PieceKind::L => Rgb::new(0x69, 0xC7, 0xC7),
    }
}

/// Highlight and shadow strength for block edges, in percent
const BEVEL_PERCENT: i32 = 20;

const BG: Rgb = Rgb::new(0, 0, 0);

/// A lightweight terminal renderer for the game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Width and height of the bordered play field in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (BOARD_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        self.render_into_with_notice(snap, None, viewport, fb);
    }

    pub fn render_into_with_notice(
        &self,
        snap: &GameSnapshot,
        notice: Option<&NoticeView>,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let (frame_w, frame_h) = self.frame_size();
        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::plain(Rgb::new(200, 200, 200), BG);

        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::plain(BG, BG),
        );
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Merged board cells.
        let origin = (start_x + 1, start_y + 1);
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &tag) in row.iter().enumerate() {
                if let Some(kind) = PieceKind::from_tag(tag) {
                    self.draw_block(fb, origin, x as u16, y as u16, kind);
                }
            }
        }

        // Active piece; rows above the board are not drawn.
        if let Some(active) = snap.active {
            self.draw_shape(fb, origin, &active.shape, active.x, active.y, true);
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        if let Some(notice) = notice {
            self.draw_notice(fb, start_x, start_y, frame_w, frame_h, notice);
        } else if snap.paused {
            self.draw_overlay_text(fb, start_x, start_y + frame_h / 2, frame_w, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        self.render_with_notice(snap, None, viewport)
    }

    pub fn render_with_notice(
        &self,
        snap: &GameSnapshot,
        notice: Option<&NoticeView>,
        viewport: Viewport,
    ) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into_with_notice(snap, notice, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

    /// Draw the occupied cells of `shape` with its top-left at board (x, y).
    ///
    /// With `clip` set, cells outside the board are skipped; otherwise the
    /// offset is taken as-is (used by the preview panel).
    fn draw_shape(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        shape: &Shape,
        x: i8,
        y: i8,
        clip: bool,
    ) {
        for (dx, dy, tag) in shape.occupied() {
            let (bx, by) = (x + dx, y + dy);
            if bx < 0 || by < 0 {
                continue;
            }
            if clip && (bx >= BOARD_WIDTH as i8 || by >= BOARD_HEIGHT as i8) {
                continue;
            }
            if let Some(kind) = PieceKind::from_tag(tag) {
                self.draw_block(fb, origin, bx as u16, by as u16, kind);
            }
        }
    }

    /// One block: main color with a lighter left edge and a darker right edge.
    fn draw_block(&self, fb: &mut FrameBuffer, origin: (u16, u16), x: u16, y: u16, kind: PieceKind) {
        let base = piece_color(kind);
        let light = CellStyle::plain(base.shade(BEVEL_PERCENT), base);
        let fill = CellStyle::plain(base, base);
        let dark = CellStyle::plain(base.shade(-BEVEL_PERCENT), base);

        let px = origin.0 + x * self.cell_w;
        let py = origin.1 + y * self.cell_h;
        for row in 0..self.cell_h {
            for col in 0..self.cell_w {
                let (ch, style) = if col == 0 {
                    ('▎', light)
                } else if col + 1 == self.cell_w {
                    ('▕', dark)
                } else {
                    ('█', fill)
                };
                fb.put_char(px + col, py + row, ch, style);
            }
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        panel_x: u16,
        start_y: u16,
    ) {
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 12 {
            return;
        }

        let label = CellStyle {
            bold: true,
            ..CellStyle::plain(Rgb::new(220, 220, 220), BG)
        };
        let value = CellStyle::plain(Rgb::new(200, 200, 200), BG);
        let hint = CellStyle {
            dim: true,
            ..value
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.score, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "LINES", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        fb.put_u32(panel_x, y, snap.drop_interval_ms, value);
        fb.put_str(panel_x + digits(snap.drop_interval_ms), y, "ms", value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(next) = snap.next {
            // Preview box is 4 cells wide; narrow shapes are nudged to the center.
            let pad = (4 - next.shape.width() as i8) / 2;
            self.draw_shape(fb, (panel_x, y), &next.shape, pad, 0, false);
        }
        y = y.saturating_add(5);

        for line in ["←/→ move", "↑ rotate", "↓ drop", "P pause", "ENTER start", "Q quit"] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y = y.saturating_add(1);
        }
    }

    fn draw_notice(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        notice: &NoticeView,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        self.draw_overlay_text(fb, start_x, mid_y.saturating_sub(1), frame_w, notice.title);

        let style = overlay_style();
        let text_w = 6 + digits(notice.score);
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, mid_y.saturating_add(1), "SCORE ", style);
        fb.put_u32(x + 6, mid_y.saturating_add(1), notice.score, style);
    }

    fn draw_overlay_text(&self, fb: &mut FrameBuffer, start_x: u16, y: u16, frame_w: u16, text: &str) {
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        fb.put_str(x, y, text, overlay_style());
    }
}

fn overlay_style() -> CellStyle {
    CellStyle {
        bold: true,
        ..CellStyle::plain(Rgb::new(255, 255, 255), BG)
    }
}

fn digits(value: u32) -> u16 {
    value.checked_ilog10().map_or(1, |d| d as u16 + 1)
}
