//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Only the visible rows are drawn; the hidden spawn rows at the top of the
//! grid never reach the screen.

use crate::core::GameSnapshot;
use crate::fb::{FrameBuffer, Paint};
use crate::types::{BOARD_WIDTH, VISIBLE_HEIGHT};

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

/// Narrowest side panel worth drawing
const PANEL_MIN_WIDTH: u16 = 8;

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

    /// Size of the bordered playfield in terminal cells.
    pub fn frame_size(&self) -> (u16, u16) {
        (
            (BOARD_WIDTH as u16) * self.cell_w + 2,
            (VISIBLE_HEIGHT as u16) * self.cell_h + 2,
        )
    }

    /// Render the snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; its allocation is
    /// kept when the viewport size does not change.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.reset(viewport.width, viewport.height);

        let (frame_w, frame_h) = self.frame_size();
        let x = viewport.width.saturating_sub(frame_w) / 2;
        let y = viewport.height.saturating_sub(frame_h) / 2;

        draw_border(fb, x, y, frame_w, frame_h);
        fb.playfield(x + 1, y + 1, &snap.board, self.cell_w, self.cell_h);

        let panel_x = x.saturating_add(frame_w).saturating_add(2);
        if viewport.width.saturating_sub(panel_x) >= PANEL_MIN_WIDTH {
            draw_side_panel(fb, snap, panel_x, y);
        }

        if snap.game_over {
            let banner = "GAME OVER";
            let bx = x.saturating_add(frame_w.saturating_sub(banner.len() as u16) / 2);
            fb.text(bx, y.saturating_add(frame_h / 2), banner, Paint::Banner);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let right = x.saturating_add(w - 1);
    let bottom = y.saturating_add(h - 1);
    fb.fill(x + 1, y, w - 2, 1, '─', Paint::Border);
    fb.fill(x + 1, bottom, w - 2, 1, '─', Paint::Border);
    fb.fill(x, y + 1, 1, h - 2, '│', Paint::Border);
    fb.fill(right, y + 1, 1, h - 2, '│', Paint::Border);
    fb.put(x, y, '┌', Paint::Border);
    fb.put(right, y, '┐', Paint::Border);
    fb.put(x, bottom, '└', Paint::Border);
    fb.put(right, bottom, '┘', Paint::Border);
}

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
    let counters = [
        ("SCORE", snap.score),
        ("LINES", snap.total_lines),
        ("PIECES", snap.pieces_locked),
    ];
    let mut row = y;
    for (label, value) in counters {
        fb.text(x, row, label, Paint::Label);
        fb.number(x, row.saturating_add(1), value, Paint::Value);
        row = row.saturating_add(3);
    }

    fb.text(x, row, "PIECE", Paint::Label);
    let kind = snap.active.map_or('-', |k| {
        k.as_str().chars().next().unwrap_or('-').to_ascii_uppercase()
    });
    fb.put(x, row.saturating_add(1), kind, Paint::Value);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fb::{Cell, BLOCK};
    use crate::types::PieceKind;

    #[test]
    fn frame_is_twenty_visible_rows_plus_border() {
        assert_eq!(GameView::default().frame_size(), (22, 22));
        assert_eq!(GameView::new(1, 1).frame_size(), (12, 22));
    }

    #[test]
    fn hidden_rows_are_not_drawn() {
        let mut snap = GameSnapshot::default();
        snap.board[0] = [1; BOARD_WIDTH];
        snap.board[1] = [1; BOARD_WIDTH];

        let fb = GameView::default().render(&snap, Viewport::new(22, 22));
        for y in 0..fb.height() {
            assert!(!fb.row_text(y).contains(BLOCK), "row {} drew a hidden block", y);
        }
    }

    #[test]
    fn border_corners_and_panel() {
        let mut snap = GameSnapshot::default();
        snap.score = 120;
        snap.active = Some(PieceKind::T);

        // Playfield centred at x = 18, panel from x = 42.
        let fb = GameView::default().render(&snap, Viewport::new(58, 22));
        assert_eq!(fb.get(18, 0), Some(Cell::new('┌', Paint::Border)));
        assert_eq!(fb.get(39, 21), Some(Cell::new('┘', Paint::Border)));
        assert!(fb.row_text(0).trim_end().ends_with("┐  SCORE"));
        assert!(fb.row_text(1).trim_end().ends_with("│  120"));
        assert_eq!(fb.get(42, 1), Some(Cell::new('1', Paint::Value)));
        assert!(fb.row_text(10).contains('T'));
    }
}
