//! GameView: maps a `core::GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::str::FromStr;

use crate::core::GameSnapshot;
use crate::fb::{CellStyle, FrameBuffer, Rgb};

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

/// How a single occupied board cell is drawn.
///
/// Every cell is two terminal columns wide to roughly square up the glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlockStyle {
    /// Solid blocks: `██`
    #[default]
    Square,
    /// Bracketed blocks: `()`
    Rounded,
}

impl BlockStyle {
    pub fn glyphs(&self) -> [char; 2] {
        match self {
            BlockStyle::Square => ['█', '█'],
            BlockStyle::Rounded => ['(', ')'],
        }
    }
}

impl FromStr for BlockStyle {
    type Err = String;

    /// Parse from a case-insensitive name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "square" => Ok(BlockStyle::Square),
            "rounded" | "round" => Ok(BlockStyle::Rounded),
            _ => Err(format!("unknown block style {s:?} (expected square or rounded)")),
        }
    }
}

/// Where the board frame lands inside a viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardLayout {
    /// Top-left corner of the border
    pub frame_x: u16,
    pub frame_y: u16,
    pub frame_w: u16,
    pub frame_h: u16,
    /// Top-left corner of the play area (inside the border)
    pub play_x: u16,
    pub play_y: u16,
    pub play_w: u16,
    pub play_h: u16,
}

/// Terminal columns per board cell.
const CELL_W: u16 = 2;

const PLAY_BG: Rgb = Rgb::new(30, 30, 40);
const LOCKED_FG: Rgb = Rgb::new(255, 150, 150);
const ACTIVE_FG: Rgb = Rgb::new(220, 40, 40);

/// A lightweight terminal renderer for the Tetris game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView {
    style: BlockStyle,
}

impl GameView {
    pub fn new(style: BlockStyle) -> Self {
        Self { style }
    }

    pub fn style(&self) -> BlockStyle {
        self.style
    }

    /// Centered placement of a `cols x rows` board in `viewport`.
    pub fn layout(&self, cols: u8, rows: u8, viewport: Viewport) -> BoardLayout {
        let play_w = cols as u16 * CELL_W;
        let play_h = rows as u16;
        let frame_w = play_w + 2;
        let frame_h = play_h + 2;
        let frame_x = viewport.width.saturating_sub(frame_w) / 2;
        let frame_y = viewport.height.saturating_sub(frame_h) / 2;
        BoardLayout {
            frame_x,
            frame_y,
            frame_w,
            frame_h,
            play_x: frame_x + 1,
            play_y: frame_y + 1,
            play_w,
            play_h,
        }
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// Callers can reuse one framebuffer across frames; it is resized to the
    /// viewport when needed.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().cell(' '));

        let layout = self.layout(snap.cols, snap.rows, viewport);
        let bg = CellStyle::new(Rgb::new(80, 80, 90), PLAY_BG);
        let border = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        fb.fill_rect(
            layout.play_x,
            layout.play_y,
            layout.play_w,
            layout.play_h,
            ' ',
            bg,
        );
        draw_border(fb, &layout, border);

        let locked = CellStyle::new(LOCKED_FG, PLAY_BG);
        let empty = CellStyle::new(Rgb::new(90, 90, 100), PLAY_BG).dim();
        for (y, row) in snap.board.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell != 0 {
                    self.draw_block(fb, &layout, x as i16, y as i16, locked);
                } else {
                    self.draw_cell(fb, &layout, x as i16, y as i16, ['·', ' '], empty);
                }
            }
        }

        if let Some(active) = &snap.active {
            let style = CellStyle::new(ACTIVE_FG, PLAY_BG).bold();
            for &(x, y) in &active.cells {
                self.draw_block(fb, &layout, x, y, style);
            }
        }

        draw_side_panel(fb, snap, viewport, &layout);

        if snap.game_over {
            draw_overlay_text(fb, &layout, 0, "GAME OVER");
            draw_overlay_text(fb, &layout, 1, "R: restart");
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_block(&self, fb: &mut FrameBuffer, layout: &BoardLayout, x: i16, y: i16, style: CellStyle) {
        self.draw_cell(fb, layout, x, y, self.style.glyphs(), style);
    }

    fn draw_cell(
        &self,
        fb: &mut FrameBuffer,
        layout: &BoardLayout,
        x: i16,
        y: i16,
        glyphs: [char; 2],
        style: CellStyle,
    ) {
        // Cells above the top edge are not drawn.
        if x < 0 || y < 0 || x as u16 * CELL_W >= layout.play_w || y as u16 >= layout.play_h {
            return;
        }
        let px = layout.play_x + x as u16 * CELL_W;
        let py = layout.play_y + y as u16;
        fb.put_char(px, py, glyphs[0], style);
        fb.put_char(px + 1, py, glyphs[1], style);
    }
}

fn draw_border(fb: &mut FrameBuffer, layout: &BoardLayout, style: CellStyle) {
    let (x, y, w, h) = (layout.frame_x, layout.frame_y, layout.frame_w, layout.frame_h);
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

fn draw_side_panel(fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, layout: &BoardLayout) {
    let panel_x = layout
        .frame_x
        .saturating_add(layout.frame_w)
        .saturating_add(2);
    if panel_x >= viewport.width || viewport.width - panel_x < 12 {
        return;
    }

    let label = CellStyle::default().bold();
    let value = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

    let mut y = layout.frame_y;
    fb.put_str(panel_x, y, "SCORE", label);
    y = y.saturating_add(1);
    fb.put_u32(panel_x, y, snap.score, value);
    y = y.saturating_add(2);

    // Controls are hidden once the game is over; the overlay offers restart.
    if snap.game_over {
        return;
    }
    fb.put_str(panel_x, y, "CONTROLS", label);
    for line in ["←/a  left", "→/d  right", "↓/s  down", "↑/w  rotate", "q    quit"] {
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, line, value.dim());
    }
}

fn draw_overlay_text(fb: &mut FrameBuffer, layout: &BoardLayout, line: u16, text: &str) {
    let mid_y = layout
        .frame_y
        .saturating_add(layout.frame_h / 2)
        .saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = layout
        .frame_x
        .saturating_add(layout.frame_w.saturating_sub(text_w) / 2);
    let style = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    fb.put_str(x, mid_y, text, style);
}
