//! Piece glyph atlas.
//! Loads the 12 pre-rendered piece images once from an asset directory.
//! Missing or unreadable glyphs are skipped; the renderer draws nothing for them.

use image::imageops::{self, FilterType};
use image::RgbaImage;
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, warn};

use crate::piece::Piece;

#[derive(Clone, Debug, Default)]
pub struct PieceAtlas {
    glyphs: HashMap<Piece, RgbaImage>,
}

impl PieceAtlas {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Loads `Chess_<kind><l|d>t<cell>.png` for every piece from `asset_dir`.
    /// Glyphs not sized to one cell are resized.
    pub fn load<P: AsRef<Path>>(asset_dir: P, cell_size: u32) -> Self {
        let asset_dir = asset_dir.as_ref();
        let mut atlas = Self::empty();

        for piece in Piece::all() {
            let path = asset_dir.join(piece.glyph_file_name(cell_size));
            if !path.is_file() {
                debug!(piece = %piece, path = %path.display(), "glyph missing, skipping");
                continue;
            }
            match image::open(&path) {
                Ok(glyph) => atlas.insert(piece, fit_to_cell(glyph.to_rgba8(), cell_size)),
                Err(e) => warn!(piece = %piece, path = %path.display(), error = %e, "unreadable glyph, skipping"),
            }
        }

        debug!(dir = %asset_dir.display(), loaded = atlas.len(), "piece atlas ready");
        atlas
    }

    pub fn insert(&mut self, piece: Piece, glyph: RgbaImage) {
        self.glyphs.insert(piece, glyph);
    }

    pub fn get(&self, piece: Piece) -> Option<&RgbaImage> {
        self.glyphs.get(&piece)
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

fn fit_to_cell(glyph: RgbaImage, cell_size: u32) -> RgbaImage {
    if glyph.dimensions() == (cell_size, cell_size) {
        glyph
    } else {
        imageops::resize(&glyph, cell_size, cell_size, FilterType::Lanczos3)
    }
}
