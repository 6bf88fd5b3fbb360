//! BoardView: maps a game snapshot into a terminal framebuffer.
//!
//! This module is pure (no I/O). Both games share the well, side panel and
//! overlay drawing; each snapshot type decides what goes into them.

use crate::core::{PuyoSnapshot, TetrisSnapshot};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::types::{Phase, PieceKind, PuyoColor, PUYO_COLS, PUYO_ROWS, TETRIS_COLS, TETRIS_ROWS};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);

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

/// Characters for one board cell: the first terminal column, then the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Glyph {
    first: char,
    rest: char,
}

impl Glyph {
    const fn solid(ch: char) -> Self {
        Self {
            first: ch,
            rest: ch,
        }
    }
}

const BLOCK: Glyph = Glyph::solid('█');
const GHOST: Glyph = Glyph::solid('░');
const EMPTY: Glyph = Glyph::solid('·');
const PUYO: Glyph = Glyph {
    first: '●',
    rest: ' ',
};

/// Screen placement of a bordered well.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Well {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
    rows: u16,
    cols: u16,
}

/// Shared layout and drawing for both games.
pub struct BoardView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for BoardView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio.
        Self::new(2, 1)
    }
}

/// A snapshot that knows how to lay itself out.
pub trait Drawable {
    fn draw(&self, view: &BoardView, viewport: Viewport, fb: &mut FrameBuffer);
}

impl BoardView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into<D: Drawable + ?Sized>(
        &self,
        snap: &D,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));
        snap.draw(self, viewport, fb);
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render<D: Drawable + ?Sized>(&self, snap: &D, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal position of the top-left character of board cell `(row, col)`
    /// for a board of the given size.
    pub fn cell_origin(&self, viewport: Viewport, rows: usize, cols: usize, row: u16, col: u16) -> (u16, u16) {
        let well = self.well(viewport, rows, cols);
        (
            well.x + 1 + col * self.cell_w,
            well.y + 1 + row * self.cell_h,
        )
    }

    fn well(&self, viewport: Viewport, rows: usize, cols: usize) -> Well {
        let w = cols as u16 * self.cell_w + 2;
        let h = rows as u16 * self.cell_h + 2;
        let x = viewport.width.saturating_sub(w) / 2;
        let y = viewport.height.saturating_sub(h) / 2;
        Well {
            x,
            y,
            w,
            h,
            rows: rows as u16,
            cols: cols as u16,
        }
    }

    fn draw_well(&self, fb: &mut FrameBuffer, well: Well) {
        let bg = CellStyle::new(Rgb::new(80, 80, 90), WELL_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG);

        fb.fill_rect(well.x + 1, well.y + 1, well.w - 2, well.h - 2, ' ', bg);

        let (x, y, w, h) = (well.x, well.y, well.w, well.h);
        fb.put_char(x, y, '┌', border);
        fb.put_char(x + w - 1, y, '┐', border);
        fb.put_char(x, y + h - 1, '└', border);
        fb.put_char(x + w - 1, y + h - 1, '┘', border);
        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', border);
            fb.put_char(x + dx, y + h - 1, '─', border);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', border);
            fb.put_char(x + w - 1, y + dy, '│', border);
        }

        let dot = CellStyle::new(Rgb::new(90, 90, 100), WELL_BG).dim();
        for row in 0..well.rows {
            for col in 0..well.cols {
                self.fill_cell(fb, well, row as i8, col as i8, EMPTY, dot);
            }
        }
    }

    /// Draw one board cell; cells outside the board are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, well: Well, row: i8, col: i8, glyph: Glyph, style: CellStyle) {
        if row < 0 || col < 0 || row as u16 >= well.rows || col as u16 >= well.cols {
            return;
        }
        let px = well.x + 1 + col as u16 * self.cell_w;
        let py = well.y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, glyph.rest, style);
        fb.fill_rect(px, py, 1, self.cell_h, glyph.first, style);
    }

    fn draw_overlay(&self, fb: &mut FrameBuffer, well: Well, phase: Phase) {
        let text = match phase {
            Phase::Idle => "ENTER TO START",
            Phase::Paused => "PAUSED",
            Phase::GameOver => "GAME OVER",
            Phase::Running => return,
        };
        let mid_y = well.y.saturating_add(well.h / 2);
        let text_w = text.chars().count() as u16;
        let x = well.x.saturating_add(well.w.saturating_sub(text_w) / 2);
        let style = CellStyle::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
        fb.put_str(x, mid_y, text, style);
    }

    /// Left edge of the side panel, or `None` when it would not fit.
    fn panel_x(&self, viewport: Viewport, well: Well) -> Option<u16> {
        let panel_x = well.x.saturating_add(well.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return None;
        }
        Some(panel_x)
    }
}

fn label_style() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold()
}

fn value_style() -> CellStyle {
    CellStyle::new(Rgb::new(200, 200, 200), SCREEN_BG)
}

/// Write `LABEL` then `value` below it; returns the next free row.
fn panel_entry(fb: &mut FrameBuffer, x: u16, y: u16, label: &str, value: u32) -> u16 {
    fb.put_str(x, y, label, label_style());
    fb.put_u32(x, y.saturating_add(1), value, value_style());
    y.saturating_add(3)
}

fn piece_style(kind: PieceKind) -> CellStyle {
    CellStyle::new(kind.color(), WELL_BG).bold()
}

fn puyo_style(color: PuyoColor) -> CellStyle {
    CellStyle::new(color.color(), WELL_BG).bold()
}

impl Drawable for TetrisSnapshot {
    fn draw(&self, view: &BoardView, viewport: Viewport, fb: &mut FrameBuffer) {
        let well = view.well(viewport, TETRIS_ROWS, TETRIS_COLS);
        view.draw_well(fb, well);

        for (r, row) in self.board.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(kind) = cell {
                    view.fill_cell(fb, well, r as i8, c as i8, BLOCK, piece_style(*kind));
                }
            }
        }

        if let Some(active) = &self.active {
            if let Some(ghost_row) = self.ghost_row {
                let ghost = CellStyle::new(Rgb::new(140, 140, 140), WELL_BG).dim();
                let drop = ghost_row - active.row;
                for &(r, c) in &active.cells {
                    view.fill_cell(fb, well, r + drop, c, GHOST, ghost);
                }
            }
            for &(r, c) in &active.cells {
                view.fill_cell(fb, well, r, c, BLOCK, piece_style(active.kind));
            }
        }

        if let Some(x) = view.panel_x(viewport, well) {
            let mut y = well.y;
            y = panel_entry(fb, x, y, "SCORE", self.score);
            y = panel_entry(fb, x, y, "LEVEL", self.level);
            y = panel_entry(fb, x, y, "LINES", self.lines);
            fb.put_str(x, y, "NEXT", label_style());
            if let Some(kind) = self.next {
                let style = CellStyle::new(kind.color(), SCREEN_BG).bold();
                fb.put_str(x, y.saturating_add(1), "██", style);
                fb.put_str(x + 3, y.saturating_add(1), kind.as_str(), value_style());
            }
        }

        view.draw_overlay(fb, well, self.phase);
    }
}

impl Drawable for PuyoSnapshot {
    fn draw(&self, view: &BoardView, viewport: Viewport, fb: &mut FrameBuffer) {
        let well = view.well(viewport, PUYO_ROWS, PUYO_COLS);
        view.draw_well(fb, well);

        for (r, row) in self.board.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if let Some(color) = cell {
                    view.fill_cell(fb, well, r as i8, c as i8, PUYO, puyo_style(*color));
                }
            }
        }

        if let Some(active) = &self.active {
            for cell in &active.cells {
                view.fill_cell(fb, well, cell.row, cell.col, PUYO, puyo_style(cell.color));
            }
        }

        if let Some(x) = view.panel_x(viewport, well) {
            let mut y = well.y;
            y = panel_entry(fb, x, y, "SCORE", self.score);
            let chain = self.last_resolve.as_ref().map_or(0, |r| r.chains);
            y = panel_entry(fb, x, y, "CHAIN", chain);
            fb.put_str(x, y, "NEXT", label_style());
            if let Some([anchor, satellite]) = self.next {
                // Satellite above the anchor, as it will enter.
                fb.put_char(x, y.saturating_add(1), '●', CellStyle::new(satellite.color(), SCREEN_BG));
                fb.put_char(x, y.saturating_add(2), '●', CellStyle::new(anchor.color(), SCREEN_BG));
            }
        }

        view.draw_overlay(fb, well, self.phase);
    }
}
