//! Board compositing.
//! Paints the checkerboard, the piece glyphs and the grid into an RGBA buffer.

use image::imageops;
use image::RgbaImage;
use imageproc::drawing::draw_filled_rect_mut;
use imageproc::rect::Rect;

use crate::atlas::PieceAtlas;
use crate::config::RenderConfig;
use crate::fen::{BOARD_FILES, Cell, FenCellIterator};

/// A visited square and whether it is painted dark.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct PlacedCell {
    pub cell: Cell,
    pub dark: bool,
}

/// Walks the placement and assigns checker parity: a8 is light, colours
/// alternate along a rank and between ranks.
pub fn board_layout(placement: &str, cell_size: u32) -> Vec<PlacedCell> {
    let mut dark = false;
    let mut layout = Vec::with_capacity(BOARD_FILES * BOARD_FILES);

    for (i, cell) in FenCellIterator::new(placement, cell_size).walk().enumerate() {
        layout.push(PlacedCell { cell, dark });
        dark = !dark;
        // Eight flips land back on the rank's start colour; offset the next rank.
        if (i + 1) % BOARD_FILES == 0 {
            dark = !dark;
        }
    }
    layout
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BoardRenderer {
    config: RenderConfig,
}

impl BoardRenderer {
    pub fn new(config: RenderConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// Renders a piece-placement field. Malformed input never fails; it just
    /// draws fewer pieces.
    pub fn render(&self, placement: &str, atlas: &PieceAtlas) -> RgbaImage {
        let side = self.config.board_side();
        let cell_size = self.config.cell_size;
        let mut board = RgbaImage::from_pixel(side, side, self.config.light_rgba());

        for PlacedCell { cell, dark } in board_layout(placement, cell_size) {
            if dark {
                let rect = Rect::at(cell.x as i32, cell.y as i32).of_size(cell_size, cell_size);
                draw_filled_rect_mut(&mut board, rect, self.config.dark_rgba());
            }
            if let Some(glyph) = cell.content.piece().and_then(|piece| atlas.get(piece)) {
                imageops::overlay(&mut board, glyph, cell.x as i64, cell.y as i64);
            }
        }

        self.draw_grid(&mut board);
        board
    }

    /// Nine vertical and nine horizontal lines, borders included.
    fn draw_grid(&self, board: &mut RgbaImage) {
        let width = self.config.grid_width;
        if width == 0 {
            return;
        }
        let side = self.config.board_side();
        let color = self.config.grid_rgba();

        for i in 0..=BOARD_FILES as u32 {
            let start = (i * self.config.cell_size) as i32 - (width / 2) as i32;
            draw_filled_rect_mut(board, Rect::at(start, 0).of_size(width, side), color);
            draw_filled_rect_mut(board, Rect::at(0, start).of_size(side, width), color);
        }
    }
}
