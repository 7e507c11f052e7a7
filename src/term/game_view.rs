//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! Pure (no I/O), so it can be unit-tested against snapshots.

use crate::core::{base_shape, GameSnapshot, Shape};
use crate::term::fb::{FrameBuffer, Rgb, Style};
use crate::types::{GameStatus, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

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

/// Renders the well, the side panel and status overlays.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

const WELL_BG: Rgb = Rgb::new(17, 24, 39);

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self { cell_w, cell_h }
    }

    /// Render a snapshot into a fresh framebuffer sized to the viewport.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let border = Style {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let well = Style {
            fg: Rgb::new(55, 65, 81),
            bg: WELL_BG,
            bold: false,
        };

        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        self.draw_border(&mut fb, start_x, start_y, frame_w, frame_h, border);

        // Settled cells.
        for y in 0..BOARD_HEIGHT as usize {
            for x in 0..BOARD_WIDTH as usize {
                if let Some(kind) = snapshot.board[y][x] {
                    self.draw_board_cell(&mut fb, start_x, start_y, x as u16, y as u16, kind);
                }
            }
        }

        // Active piece, cell by cell from its shape matrix. Cells above
        // row 0 are simply not drawn.
        if let Some(active) = snapshot.active {
            let n = active.shape.size() as i8;
            for dy in 0..n {
                for dx in 0..n {
                    if !active.shape.filled(dy as usize, dx as usize) {
                        continue;
                    }
                    let x = active.x + dx;
                    let y = active.y + dy;
                    if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                        self.draw_board_cell(
                            &mut fb,
                            start_x,
                            start_y,
                            x as u16,
                            y as u16,
                            active.kind,
                        );
                    }
                }
            }
        }

        self.draw_side_panel(&mut fb, snapshot, viewport, start_x, start_y, frame_w);

        match snapshot.status {
            GameStatus::Idle => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "PRESS ENTER");
            }
            GameStatus::GameOver => {
                self.draw_overlay_text(&mut fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            }
            GameStatus::Running => {}
        }

        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = Style {
            fg: kind_color(kind),
            bg: WELL_BG,
            bold: true,
        };
        let px = start_x + 1 + x * self.cell_w;
        let py = start_y + 1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snapshot: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = Style {
            fg: Rgb::new(250, 204, 21),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &format!("{}", snapshot.score), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        if let Some(kind) = snapshot.next {
            self.draw_preview(fb, panel_x, y, kind);
        }
    }

    /// Draw the queued piece's shape matrix as a mini grid.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let shape: Shape = base_shape(kind);
        let style = Style {
            fg: kind_color(kind),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };
        let n = shape.size() as usize;
        for row in 0..n {
            for col in 0..n {
                if shape.filled(row, col) {
                    let px = x + (col as u16) * self.cell_w;
                    let py = y + row as u16;
                    fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                }
            }
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

/// Piece kind to display color.
fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(6, 182, 212),
        PieceKind::O => Rgb::new(234, 179, 8),
        PieceKind::T => Rgb::new(168, 85, 247),
        PieceKind::L => Rgb::new(249, 115, 22),
        PieceKind::J => Rgb::new(59, 130, 246),
        PieceKind::S => Rgb::new(34, 197, 94),
        PieceKind::Z => Rgb::new(239, 68, 68),
    }
}
