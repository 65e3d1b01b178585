//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). Only the visible rows are drawn; the spawn
//! buffer above them stays hidden.

use crate::core::{GameSnapshot, ShapeSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH, SPAWN_BUFFER_ROWS};

const VISIBLE_ROWS: u16 = (BOARD_HEIGHT - SPAWN_BUFFER_ROWS) as u16;

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Display color of each shape kind.
pub fn kind_color(kind: ShapeKind) -> Rgb {
    match kind {
        ShapeKind::I => Rgb::new(80, 220, 220),
        ShapeKind::O => Rgb::new(240, 220, 80),
        ShapeKind::T => Rgb::new(200, 120, 220),
        ShapeKind::S => Rgb::new(100, 220, 120),
        ShapeKind::Z => Rgb::new(220, 80, 80),
        ShapeKind::J => Rgb::new(80, 120, 220),
        ShapeKind::L => Rgb::new(255, 165, 0),
    }
}

fn kind_letter(kind: ShapeKind) -> char {
    match kind {
        ShapeKind::I => 'I',
        ShapeKind::O => 'O',
        ShapeKind::T => 'T',
        ShapeKind::S => 'S',
        ShapeKind::Z => 'Z',
        ShapeKind::J => 'J',
        ShapeKind::L => 'L',
    }
}

/// Terminal layout for the board and the info panel.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2 columns per cell compensates for the usual glyph aspect ratio.
        Self { cell_w: 2 }
    }
}

impl GameView {
    /// Render into an existing framebuffer (resized to the viewport).
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.fill(Cell::default());

        let board_w = (BOARD_WIDTH as u16).saturating_mul(self.cell_w);
        let frame_w = board_w.saturating_add(2);
        let frame_h = VISIBLE_ROWS + 2;
        let start_x = viewport.width.saturating_sub(frame_w.saturating_add(16)) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for row in 0..VISIBLE_ROWS {
            let y = (row + SPAWN_BUFFER_ROWS as u16) as usize;
            for x in 0..BOARD_WIDTH as u16 {
                let px = start_x
                    .saturating_add(1)
                    .saturating_add(x.saturating_mul(self.cell_w));
                let py = start_y.saturating_add(1).saturating_add(row);
                match snap.board[y][x as usize] {
                    Some(kind) => {
                        let style = CellStyle::new(kind_color(kind), BOARD_BG).bold();
                        fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                    }
                    None => {
                        let style = CellStyle::new(Rgb::new(90, 90, 100), BOARD_BG);
                        fb.fill_rect(px, py, self.cell_w, 1, ' ', style);
                        fb.put_char(px, py, '·', style);
                    }
                }
            }
        }

        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        self.draw_panel(fb, snap, panel_x, start_y);

        if snap.game_over {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
        } else if snap.paused {
            draw_overlay(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, x: u16, y: u16) {
        let label = CellStyle::default().bold();
        let value = CellStyle::default();

        let mut y = y;
        for (name, v) in [
            ("LEVEL", snap.level),
            ("SCORE", snap.score),
            ("ROWS", snap.completed_rows),
        ] {
            fb.put_str(x, y, name, label);
            fb.put_str(x, y + 1, &v.to_string(), value);
            y += 3;
        }

        fb.put_str(x, y, "NEXT", label);
        draw_preview(fb, &snap.next, x, y + 1, self.cell_w);
        y += 4;

        for kind in ShapeKind::ALL {
            let style = CellStyle::new(kind_color(kind), PANEL_BG);
            fb.put_char(x, y, kind_letter(kind), style.bold());
            fb.put_str(x + 2, y, &snap.statistics[kind.index()].to_string(), value);
            y += 1;
        }
    }
}

/// Draw a shape's cells relative to its rotation box, two rows tall.
fn draw_preview(fb: &mut FrameBuffer, shape: &ShapeSnapshot, x: u16, y: u16, cell_w: u16) {
    let style = CellStyle::new(kind_color(shape.kind), PANEL_BG).bold();
    for cell in shape.cells {
        let dx = (cell.x - shape.origin.x).max(0) as u16;
        let dy = (cell.y - shape.origin.y).max(0) as u16;
        let px = x.saturating_add(dx.saturating_mul(cell_w));
        fb.fill_rect(px, y.saturating_add(dy), cell_w, 1, '█', style);
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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

fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, text: &str) {
    let text_w = text.chars().count() as u16;
    let style = CellStyle::new(Rgb::new(255, 255, 255), PANEL_BG).bold();
    fb.put_str(x + w.saturating_sub(text_w) / 2, y + h / 2, text, style);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Point;

    fn text(fb: &FrameBuffer) -> String {
        (0..fb.height())
            .map(|y| fb.row_text(y))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn board_blocks(fb: &FrameBuffer) -> Vec<(u16, u16)> {
        // 60x24 viewport: frame at (11, 1), board cells start one inside.
        let mut out = Vec::new();
        for y in 2..22 {
            for x in 12..32 {
                if fb.get(x, y).map(|c| c.ch) == Some('█') {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_hidden_rows_are_not_drawn() {
        let mut snap = GameSnapshot::default();
        for x in 0..BOARD_WIDTH as usize {
            snap.board[0][x] = Some(ShapeKind::Z);
            snap.board[1][x] = Some(ShapeKind::Z);
        }
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        assert!(board_blocks(&fb).is_empty());
    }

    #[test]
    fn test_bottom_row_is_drawn() {
        let mut snap = GameSnapshot::default();
        snap.board[BOARD_HEIGHT as usize - 1][0] = Some(ShapeKind::I);
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        assert_eq!(board_blocks(&fb), vec![(12, 21), (13, 21)]);
    }

    #[test]
    fn test_overlays() {
        let mut snap = GameSnapshot::default();
        snap.paused = true;
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        assert!(text(&fb).contains("PAUSED"));

        snap.game_over = true;
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        assert!(text(&fb).contains("GAME OVER"));
    }

    #[test]
    fn test_panel_shows_counters() {
        let mut snap = GameSnapshot::default();
        snap.score = 1200;
        snap.level = 3;
        snap.completed_rows = 31;
        let fb = GameView::default().render(&snap, Viewport::new(60, 24));
        let t = text(&fb);
        assert!(t.contains("SCORE"));
        assert!(t.contains("1200"));
        assert!(t.contains("31"));
    }

    #[test]
    fn test_widest_viewport_does_not_overflow() {
        let mut snap = GameSnapshot::default();
        snap.board[BOARD_HEIGHT as usize - 1][BOARD_WIDTH as usize - 1] = Some(ShapeKind::L);
        snap.next.cells = [Point::new(3, 1); 4];
        let fb = GameView::default().render(&snap, Viewport::new(u16::MAX, 2));
        assert_eq!(fb.width(), u16::MAX);
    }

    #[test]
    fn test_tiny_viewport_does_not_panic() {
        let snap = GameSnapshot::default();
        let fb = GameView::default().render(&snap, Viewport::new(3, 2));
        assert_eq!(fb.width(), 3);
    }
}
