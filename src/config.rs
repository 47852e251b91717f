//! Config module.
//! Fixed render settings: cell size, square colours, grid pen.
//! These are constructor-time constants, not runtime flags.

use image::Rgba;
use serde::Serialize;

/// Cell size of the stock glyph set (`Chess_*45.png`).
pub const DEFAULT_CELL_SIZE: u32 = 45;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RenderConfig {
    /// Side of one square in pixels.
    pub cell_size: u32,
    pub light_square: [u8; 3],
    pub dark_square: [u8; 3],
    pub grid_color: [u8; 3],
    /// Stroke width of the grid lines in pixels.
    pub grid_width: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            light_square: [0xc6, 0xc3, 0x63],
            dark_square: [0x73, 0xa2, 0x6b],
            grid_color: [0x00, 0x00, 0x00],
            grid_width: 2,
        }
    }
}

impl RenderConfig {
    /// Side length of the rendered board (8 cells).
    pub fn board_side(&self) -> u32 {
        self.cell_size * 8
    }

    pub fn light_rgba(&self) -> Rgba<u8> {
        opaque(self.light_square)
    }

    pub fn dark_rgba(&self) -> Rgba<u8> {
        opaque(self.dark_square)
    }

    pub fn grid_rgba(&self) -> Rgba<u8> {
        opaque(self.grid_color)
    }
}

fn opaque([r, g, b]: [u8; 3]) -> Rgba<u8> {
    Rgba([r, g, b, 0xff])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_board_side() {
        let config = RenderConfig::default();
        assert_eq!(config.board_side(), 360);
    }

    #[test]
    fn test_colors_are_opaque() {
        let config = RenderConfig::default();
        assert_eq!(config.dark_rgba(), Rgba([0x73, 0xa2, 0x6b, 0xff]));
        assert_eq!(config.grid_rgba().0[3], 0xff);
    }
}
