//! GameView: draws a [`RenderSnapshot`] onto a [`Canvas`].
//!
//! No I/O here. The board is framed, each cell is `cell_w` columns wide to
//! offset the usual glyph aspect ratio, and a side panel shows hold and counters.

use crate::canvas::{Canvas, Glyph, Rgb, Style};
use crate::core::RenderSnapshot;
use crate::types::{CellState, GameStatus, PieceKind, BOARD_COLS, BOARD_ROWS};

pub const FILLED_GLYPH: char = '█';
pub const GHOST_GLYPH: char = '░';
pub const EMPTY_GLYPH: char = '·';

const WELL_BG: Rgb = Rgb(30, 30, 40);
const LOCKED_FG: Rgb = Rgb(150, 150, 165);

/// Terminal size in cells.
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

/// Top-left corner and size of the framed board on the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub x: u16,
    pub y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
}

pub struct GameView {
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Board placement for a viewport; centered horizontally and vertically
    pub fn layout(&self, viewport: Viewport) -> Layout {
        let frame_w = BOARD_COLS as u16 * self.cell_w + 2;
        let frame_h = BOARD_ROWS as u16 + 2;
        Layout {
            x: viewport.width.saturating_sub(frame_w + PANEL_W) / 2,
            y: viewport.height.saturating_sub(frame_h) / 2,
            frame_w,
            frame_h,
        }
    }

    /// Canvas position of the left glyph of board cell (row, col)
    pub fn cell_origin(&self, layout: Layout, row: usize, col: usize) -> (u16, u16) {
        (
            layout.x + 1 + col as u16 * self.cell_w,
            layout.y + 1 + row as u16,
        )
    }

    pub fn render_into(&self, snap: &RenderSnapshot, viewport: Viewport, canvas: &mut Canvas) {
        canvas.resize(viewport.width, viewport.height);
        canvas.fill(Glyph::default());

        let layout = self.layout(viewport);
        draw_frame(canvas, layout, Style::new(Rgb(200, 200, 200), Rgb::BLACK));

        for row in 0..BOARD_ROWS {
            for col in 0..BOARD_COLS {
                let (ch, style) = match snap.cell(row, col) {
                    CellState::Empty => (EMPTY_GLYPH, Style::new(Rgb(90, 90, 100), WELL_BG).dim()),
                    CellState::Ghost => (GHOST_GLYPH, Style::new(Rgb(140, 140, 140), WELL_BG).dim()),
                    CellState::Filled => (FILLED_GLYPH, Style::new(LOCKED_FG, WELL_BG)),
                };
                self.draw_cell(canvas, layout, row, col, ch, style);
            }
        }

        // Recolor the falling piece by kind.
        if let Some(active) = snap.active {
            let style = Style::new(piece_color(active.kind), WELL_BG).bold();
            for (row, col) in active.visible_cells() {
                self.draw_cell(canvas, layout, row, col, FILLED_GLYPH, style);
            }
        }

        self.draw_panel(canvas, snap, layout);

        match snap.status {
            GameStatus::NotStarted => {
                draw_banner(canvas, layout, 0, "PRESS ENTER");
            }
            GameStatus::GameOver => {
                draw_banner(canvas, layout, 0, "GAME OVER");
                draw_banner(canvas, layout, 2, "ENTER: REPLAY");
            }
            GameStatus::Running => {}
        }
    }

    /// Render into a fresh canvas
    pub fn render(&self, snap: &RenderSnapshot, viewport: Viewport) -> Canvas {
        let mut canvas = Canvas::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut canvas);
        canvas
    }

    fn draw_cell(
        &self,
        canvas: &mut Canvas,
        layout: Layout,
        row: usize,
        col: usize,
        ch: char,
        style: Style,
    ) {
        let (x, y) = self.cell_origin(layout, row, col);
        canvas.fill_rect(x, y, self.cell_w, 1, ch, style);
    }

    fn draw_panel(&self, canvas: &mut Canvas, snap: &RenderSnapshot, layout: Layout) {
        let x = layout.x + layout.frame_w + 2;
        if x >= canvas.width() {
            return;
        }

        let label = Style::default().bold();
        let value = Style::default();
        let mut y = layout.y;

        canvas.text(x, y, "HOLD", label);
        y += 1;
        match snap.hold {
            Some(kind) => {
                let style = Style::new(piece_color(kind), Rgb::BLACK);
                let style = if snap.can_hold { style.bold() } else { style.dim() };
                canvas.text(x, y, kind_letter(kind), style);
            }
            None => canvas.text(x, y, "-", value),
        }
        y += 2;

        canvas.text(x, y, "LINES", label);
        canvas.number(x, y + 1, snap.lines_cleared, value);
        y += 3;

        canvas.text(x, y, "PIECES", label);
        canvas.number(x, y + 1, snap.pieces_locked, value);
        y += 3;

        canvas.text(x, y, "GAME", label);
        canvas.number(x, y + 1, snap.episode_id + 1, value);
        y += 3;

        let help = Style::default().dim();
        for line in HELP {
            canvas.text(x, y, line, help);
            y += 1;
        }
    }
}

const PANEL_W: u16 = 16;

const HELP: [&str; 6] = [
    "<- -> move",
    "up    rotate",
    "down  soft",
    "space hard",
    "c     hold",
    "q     quit",
];

fn draw_frame(canvas: &mut Canvas, layout: Layout, style: Style) {
    let Layout {
        x,
        y,
        frame_w: w,
        frame_h: h,
    } = layout;
    let (right, bottom) = (x + w - 1, y + h - 1);

    for col in x + 1..right {
        canvas.put(col, y, '─', style);
        canvas.put(col, bottom, '─', style);
    }
    for row in y + 1..bottom {
        canvas.put(x, row, '│', style);
        canvas.put(right, row, '│', style);
    }
    canvas.put(x, y, '┌', style);
    canvas.put(right, y, '┐', style);
    canvas.put(x, bottom, '└', style);
    canvas.put(right, bottom, '┘', style);
}

/// Centered text across the board, `line` rows below the middle
fn draw_banner(canvas: &mut Canvas, layout: Layout, line: u16, text: &str) {
    let len = text.chars().count() as u16;
    let x = layout.x + layout.frame_w.saturating_sub(len) / 2;
    let y = layout.y + layout.frame_h / 2 + line;
    canvas.text(x, y, text, Style::new(Rgb::WHITE, Rgb::BLACK).bold());
}

pub fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb(80, 220, 220),
        PieceKind::O => Rgb(240, 220, 80),
        PieceKind::T => Rgb(200, 120, 220),
        PieceKind::J => Rgb(80, 120, 220),
        PieceKind::L => Rgb(255, 165, 0),
        PieceKind::S => Rgb(100, 220, 120),
        PieceKind::Z => Rgb(220, 80, 80),
    }
}

fn kind_letter(kind: PieceKind) -> &'static str {
    match kind {
        PieceKind::I => "I",
        PieceKind::O => "O",
        PieceKind::T => "T",
        PieceKind::J => "J",
        PieceKind::L => "L",
        PieceKind::S => "S",
        PieceKind::Z => "Z",
    }
}
