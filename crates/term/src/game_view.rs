//! GameView: draws a [`GameSnapshot`] into a [`FrameBuffer`].
//!
//! Pure, no I/O. Each board cell is `cell_w` columns wide (2 by default) so
//! the well looks square on a typical terminal font.

use crate::core::{GameSnapshot, Tetromino};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceColor, BOARD_HEIGHT, BOARD_WIDTH};

const WELL_BG: Rgb = Rgb::new(30, 30, 40);
const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
const PANEL_MIN_WIDTH: u16 = 12;

const CONTROLS: [&str; 8] = [
    "←→ move",
    "↑  rotate",
    "↓  soft drop",
    "SPC hard drop",
    "P  pause",
    "M  mute",
    "R  restart",
    "Q  quit",
];

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

pub struct GameView {
    cell_w: u16,
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self::new(2, 1)
    }
}

/// Top-left corner of the well frame, plus its outer size.
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render into a reused framebuffer, resizing it to `viewport`.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame = self.frame(viewport);

        fb.fill_rect(
            frame.x + 1,
            frame.y + 1,
            frame.w - 2,
            frame.h - 2,
            ' ',
            Style::new(WELL_BG, WELL_BG),
        );
        draw_border(fb, frame, Style::new(Rgb::new(200, 200, 200), SCREEN_BG));

        for (y, row) in snap.board.rows().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                let origin = (frame.x + 1, frame.y + 1);
                match cell {
                    Some(color) => self.draw_block(fb, origin, x as u16, y as u16, *color),
                    None => self.fill_cell(
                        fb,
                        origin,
                        x as u16,
                        y as u16,
                        '·',
                        Style::new(Rgb::new(90, 90, 100), WELL_BG).dim(),
                    ),
                }
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.paused() {
            draw_overlay(fb, frame, &["PAUSED", "P to resume"]);
        } else if snap.game_over() {
            draw_overlay(fb, frame, &["GAME OVER", "R to restart"]);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Terminal column and row of the top-left character of board cell (x, y).
    pub fn cell_origin(&self, viewport: Viewport, x: u16, y: u16) -> (u16, u16) {
        let frame = self.frame(viewport);
        (
            frame.x + 1 + x * self.cell_w,
            frame.y + 1 + y * self.cell_h,
        )
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = (BOARD_WIDTH as u16) * self.cell_w + 2;
        let h = (BOARD_HEIGHT as u16) * self.cell_h + 2;
        let panel = PANEL_MIN_WIDTH + 2;
        let x = viewport.width.saturating_sub(w + panel) / 2;
        let y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(h) / 2,
            AnchorY::Top => 0,
        };
        Frame { x, y, w, h }
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: (u16, u16),
        x: u16,
        y: u16,
        ch: char,
        style: Style,
    ) {
        let px = origin.0 + x * self.cell_w;
        let py = origin.1 + y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_block(&self, fb: &mut FrameBuffer, origin: (u16, u16), x: u16, y: u16, color: PieceColor) {
        let style = Style::new(color_rgb(color), WELL_BG).bold();
        self.fill_cell(fb, origin, x, y, '█', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let panel_x = frame.x.saturating_add(frame.w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < PANEL_MIN_WIDTH {
            return;
        }

        let label = Style::default().bold();
        let value = Style::new(Rgb::new(200, 200, 200), SCREEN_BG);
        let hint = value.dim();

        let mut y = frame.y;
        for (name, n) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y + 1, n, value);
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y += 1;
        if !snap.game_over() {
            self.draw_preview(fb, panel_x, y, snap.next);
        }
        y += 5;

        let sound = if snap.muted { "SOUND OFF" } else { "SOUND ON" };
        fb.put_str(panel_x, y, sound, value);
        y += 2;

        for line in CONTROLS {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, hint);
            y += 1;
        }
    }

    /// Draws the next piece's matrix with the same block glyphs as the well.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, next: Tetromino) {
        let style = Style::new(color_rgb(next.color), SCREEN_BG).bold();
        for (row, col) in next.shape.occupied() {
            let px = x + (col as u16) * self.cell_w;
            fb.fill_rect(px, y + row as u16, self.cell_w, 1, '█', style);
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, frame: Frame, style: Style) {
    let Frame { x, y, w, h } = frame;
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

/// Centered lines over the middle of the well.
fn draw_overlay(fb: &mut FrameBuffer, frame: Frame, lines: &[&str]) {
    let style = Style::new(Rgb::new(255, 255, 255), SCREEN_BG).bold();
    let top = frame.y + frame.h / 2 - (lines.len() as u16) / 2;
    for (i, text) in lines.iter().enumerate() {
        let text_w = text.chars().count() as u16;
        let x = frame.x + frame.w.saturating_sub(text_w) / 2;
        fb.put_str(x, top + i as u16, text, style);
    }
}

pub fn color_rgb(color: PieceColor) -> Rgb {
    match color {
        PieceColor::Cyan => Rgb::new(80, 220, 220),
        PieceColor::Blue => Rgb::new(80, 120, 220),
        PieceColor::Orange => Rgb::new(255, 165, 0),
        PieceColor::Yellow => Rgb::new(240, 220, 80),
        PieceColor::Green => Rgb::new(100, 220, 120),
        PieceColor::Purple => Rgb::new(200, 120, 220),
        PieceColor::Red => Rgb::new(220, 80, 80),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{FixedSequence, Game};
    use crate::types::{GameAction, PieceKind};

    const VIEW: Viewport = Viewport {
        width: 60,
        height: 24,
    };

    #[test]
    fn active_piece_is_drawn_in_its_color() {
        let game = Game::new(FixedSequence::repeat(PieceKind::O));
        let view = GameView::default();
        let fb = view.render(&game.snapshot(), VIEW);

        // O spawns at (3, 0) and covers columns 3-4.
        let (px, py) = view.cell_origin(VIEW, 3, 0);
        let glyph = fb.get(px, py).unwrap();
        assert_eq!(glyph.ch, '█');
        assert_eq!(glyph.style.fg, color_rgb(PieceColor::Yellow));
        assert_eq!(fb.get(px + 1, py).unwrap().ch, '█');

        let (ex, ey) = view.cell_origin(VIEW, 0, 0);
        assert_eq!(fb.get(ex, ey).unwrap().ch, '·');
    }

    #[test]
    fn side_panel_shows_stats_and_sound() {
        let mut game = Game::new(FixedSequence::repeat(PieceKind::T));
        game.apply_action(GameAction::ToggleMute);
        let fb = GameView::default().render(&game.snapshot(), VIEW);

        for text in ["SCORE", "LEVEL", "LINES", "NEXT", "SOUND OFF"] {
            assert!(fb.contains_text(text), "missing {text}");
        }
        assert!(!fb.contains_text("PAUSED"));
    }

    #[test]
    fn overlays_follow_status() {
        let mut game = Game::new(FixedSequence::repeat(PieceKind::T));
        game.apply_action(GameAction::TogglePause);
        let fb = GameView::default().render(&game.snapshot(), VIEW);
        assert!(fb.contains_text("PAUSED"));

        game.apply_action(GameAction::TogglePause);
        game.apply_action(GameAction::Tick);
        while !game.snapshot().game_over() {
            game.apply_action(GameAction::HardDrop);
        }
        let fb = GameView::default().render(&game.snapshot(), VIEW);
        assert!(fb.contains_text("GAME OVER"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let game = Game::new(FixedSequence::repeat(PieceKind::I));
        let fb = GameView::default().render(&game.snapshot(), Viewport::new(5, 3));
        assert_eq!((fb.width(), fb.height()), (5, 3));
    }
}
