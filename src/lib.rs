//! Renders FEN piece placements to PNG boards and caches them on disk by
//! content, so the same position is only ever drawn once.
//!
//! ```no_run
//! use std::sync::Arc;
//! use fen_board::{BoardRenderer, ImageCache, PieceAtlas, RenderConfig};
//!
//! let config = RenderConfig::default();
//! let atlas = Arc::new(PieceAtlas::load("chess_fen_media", config.cell_size));
//! let cache = ImageCache::new(BoardRenderer::new(config), atlas);
//! let path = cache.get_or_render("8/8/8/8/8/8/8/8 w - - 0 1", "boards")?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod atlas;
pub mod cache;
pub mod config;
pub mod fen;
pub mod logging;
pub mod markup;
pub mod piece;
pub mod render;

pub use atlas::PieceAtlas;
pub use cache::{CacheEntry, CacheStatus, ImageCache, cache_key};
pub use config::RenderConfig;
pub use fen::{BoardPosition, Cell, CellContent, FenCellIterator, placement_field};
pub use markup::{BoardSource, CacheSource, SideToMove, substitute};
pub use piece::{Color, Piece, PieceKind};
pub use render::BoardRenderer;
