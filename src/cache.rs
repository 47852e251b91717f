//! Content-addressed board image cache.
//! A board lives at `<out_dir>/<md5 of the FEN>.png`; the file's existence is
//! the whole index. Existing files are never touched again.

use anyhow::{Context, Result};
use image::ImageFormat;
use md5::{Digest, Md5};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use crate::atlas::PieceAtlas;
use crate::fen::placement_field;
use crate::render::BoardRenderer;

/// Lowercase hex MD5 of the raw FEN bytes.
pub fn cache_key(fen: &str) -> String {
    format!("{:x}", Md5::digest(fen.as_bytes()))
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CacheStatus {
    /// File was already on disk.
    Hit,
    /// File was rendered and written by this call.
    Rendered,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CacheEntry {
    pub path: PathBuf,
    pub status: CacheStatus,
}

#[derive(Clone, Debug)]
pub struct ImageCache {
    renderer: BoardRenderer,
    atlas: Arc<PieceAtlas>,
}

impl ImageCache {
    pub fn new(renderer: BoardRenderer, atlas: Arc<PieceAtlas>) -> Self {
        Self { renderer, atlas }
    }

    pub fn renderer(&self) -> &BoardRenderer {
        &self.renderer
    }

    /// Path a FEN string is (or would be) cached at.
    pub fn path_for<P: AsRef<Path>>(fen: &str, out_dir: P) -> PathBuf {
        out_dir.as_ref().join(format!("{}.png", cache_key(fen)))
    }

    /// Returns the cached image for `fen`, rendering it first if needed.
    pub fn get_or_render<P: AsRef<Path>>(&self, fen: &str, out_dir: P) -> Result<PathBuf> {
        self.fetch(fen, out_dir).map(|entry| entry.path)
    }

    /// Like [`get_or_render`](Self::get_or_render) but reports whether the
    /// file was already present.
    ///
    /// The existence check and the write are not atomic; concurrent callers
    /// may both render, producing identical bytes.
    pub fn fetch<P: AsRef<Path>>(&self, fen: &str, out_dir: P) -> Result<CacheEntry> {
        let out_dir = out_dir.as_ref();
        let path = Self::path_for(fen, out_dir);

        if path.is_file() {
            debug!(path = %path.display(), "Already exists");
            return Ok(CacheEntry {
                path,
                status: CacheStatus::Hit,
            });
        }

        fs::create_dir_all(out_dir)
            .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;

        let board = self.renderer.render(placement_field(fen), &self.atlas);
        board
            .save_with_format(&path, ImageFormat::Png)
            .with_context(|| format!("Failed to write board image {}", path.display()))?;

        info!(path = %path.display(), "Created");
        Ok(CacheEntry {
            path,
            status: CacheStatus::Rendered,
        })
    }
}
