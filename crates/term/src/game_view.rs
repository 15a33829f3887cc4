//! GameView: maps a `GameSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameSnapshot;
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GameStatus, Tile, BOARD_SIZE, FIB_SEQUENCE};

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

const BOARD_BG: Rgb = Rgb::new(60, 56, 52);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Side panel width in columns
const PANEL_W: u16 = 14;

/// Renders the 4x4 board, a score panel and end-of-game overlays.
pub struct GameView {
    /// Tile width in terminal columns.
    tile_w: u16,
    /// Tile height in terminal rows.
    tile_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 8x3 keeps tiles roughly square in common terminal fonts and fits
        // the five-character "Forge" label.
        Self {
            tile_w: 8,
            tile_h: 3,
        }
    }
}

impl GameView {
    pub fn new(tile_w: u16, tile_h: u16) -> Self {
        Self {
            tile_w: tile_w.max(1),
            tile_h: tile_h.max(1),
        }
    }

    /// Outer size of the bordered board: tiles separated by one-cell gutters.
    pub fn frame_size(&self) -> (u16, u16) {
        let n = BOARD_SIZE as u16;
        (n * (self.tile_w + 1) + 1, n * (self.tile_h + 1) + 1)
    }

    /// Top-left terminal cell of the tile at (row, col), relative to the frame.
    pub fn tile_origin(&self, row: usize, col: usize) -> (u16, u16) {
        (
            1 + col as u16 * (self.tile_w + 1),
            1 + row as u16 * (self.tile_h + 1),
        )
    }

    /// Frame origin for a viewport: centered, top-aligned when too short.
    pub fn frame_origin(&self, viewport: Viewport) -> (u16, u16) {
        let (frame_w, frame_h) = self.frame_size();
        let panel_w = if viewport.width >= frame_w + PANEL_W + 2 {
            PANEL_W + 2
        } else {
            0
        };
        (
            viewport.width.saturating_sub(frame_w + panel_w) / 2,
            viewport.height.saturating_sub(frame_h) / 2,
        )
    }

    /// Render into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell::blank(CellStyle::default()));

        let (frame_w, frame_h) = self.frame_size();
        let (start_x, start_y) = self.frame_origin(viewport);

        let border = CellStyle::new(Rgb::new(187, 173, 160), PANEL_BG);
        fb.fill_rect(
            start_x + 1,
            start_y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            CellStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        for (row, tiles) in snap.board.iter().enumerate() {
            for (col, tile) in tiles.iter().enumerate() {
                let (ox, oy) = self.tile_origin(row, col);
                self.draw_tile(fb, start_x + ox, start_y + oy, *tile);
            }
        }

        self.draw_side_panel(fb, snap, viewport, start_x + frame_w + 2, start_y);

        match snap.status {
            GameStatus::Playing => {}
            GameStatus::Won => draw_overlay(fb, start_x, start_y, frame_w, frame_h, "YOU WIN!"),
            GameStatus::Lost => draw_overlay(fb, start_x, start_y, frame_w, frame_h, "GAME OVER"),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_tile(&self, fb: &mut FrameBuffer, x: u16, y: u16, tile: Tile) {
        let style = tile_style(tile);
        fb.fill_rect(x, y, self.tile_w, self.tile_h, ' ', style);

        let mid_y = y + self.tile_h / 2;
        match tile {
            Tile::Empty => fb.put_centered(x, mid_y, self.tile_w, "·", style.dim()),
            _ => fb.put_centered(x, mid_y, self.tile_w, &tile.label(), style.bold()),
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        x: u16,
        y: u16,
    ) {
        if x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let label = CellStyle::new(Rgb::new(238, 228, 218), PANEL_BG).bold();
        let value = CellStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        let help = value.dim();

        let mut cy = y;
        for (name, v) in [
            ("SCORE", snap.score),
            ("BEST", snap.best_score),
            ("MOVES", snap.moves),
        ] {
            fb.put_str(x, cy, name, label);
            fb.put_str(x, cy + 1, &v.to_string(), value);
            cy += 3;
        }

        for text in ["arrows/hjkl", "or drag: move", "r: restart", "q: quit"] {
            fb.put_str(x, cy, text, help);
            cy += 1;
        }
    }
}

/// Tile colour scheme: Normal tiles warm up along the progression, Forge and
/// Forged share the molten palette.
fn tile_style(tile: Tile) -> CellStyle {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    match tile {
        Tile::Empty => CellStyle::new(Rgb::new(150, 140, 130), Rgb::new(205, 193, 180)),
        Tile::Forge => CellStyle::new(light, Rgb::new(120, 40, 20)),
        Tile::Forged(_) => CellStyle::new(light, Rgb::new(200, 70, 30)),
        Tile::Normal(v) => {
            const NORMAL_BG: [Rgb; 11] = [
                Rgb::new(238, 228, 218),
                Rgb::new(237, 224, 200),
                Rgb::new(242, 177, 121),
                Rgb::new(245, 149, 99),
                Rgb::new(246, 124, 95),
                Rgb::new(246, 94, 59),
                Rgb::new(237, 207, 114),
                Rgb::new(237, 204, 97),
                Rgb::new(237, 200, 80),
                Rgb::new(237, 197, 63),
                Rgb::new(237, 194, 46),
            ];
            let idx = FIB_SEQUENCE
                .iter()
                .position(|&f| f == v)
                .unwrap_or(NORMAL_BG.len() - 1);
            let fg = if idx < 2 { dark } else { light };
            CellStyle::new(fg, NORMAL_BG[idx])
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '╭', style);
    fb.put_char(x + w - 1, y, '╮', style);
    fb.put_char(x, y + h - 1, '╰', style);
    fb.put_char(x + w - 1, y + h - 1, '╯', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, frame_w: u16, frame_h: u16, text: &str) {
    let banner = CellStyle::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
    let hint = CellStyle::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));
    let mid_y = y + frame_h / 2;

    fb.fill_rect(x + 1, mid_y - 1, frame_w - 2, 3, ' ', banner);
    fb.put_centered(x, mid_y - 1, frame_w, text, banner);
    fb.put_centered(x, mid_y + 1, frame_w, "press r to restart", hint);
}
