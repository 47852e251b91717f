//! Text markup front end.
//! Replaces every `[fen]...[/fen]` span in a piece of text with an image tag
//! pointing at the rendered board, plus a side-to-move caption.

use anyhow::Result;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::cache::ImageCache;
use crate::fen::placement_field;

static FEN_TAG: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?is)\[fen\](?P<notation>.+?)\[/fen\]").unwrap());

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SideToMove {
    White,
    Black,
    /// No `w`/`b` token follows the placement field.
    Unknown,
}

impl SideToMove {
    /// First `w` or `b` token after the placement field, case-insensitive.
    pub fn detect(notation: &str) -> Self {
        notation
            .split_whitespace()
            .skip(1)
            .find_map(|token| match token {
                "w" | "W" => Some(SideToMove::White),
                "b" | "B" => Some(SideToMove::Black),
                _ => None,
            })
            .unwrap_or(SideToMove::Unknown)
    }

    pub fn caption(self) -> Option<&'static str> {
        match self {
            SideToMove::White => Some("White to move."),
            SideToMove::Black => Some("Black to move."),
            SideToMove::Unknown => None,
        }
    }
}

impl fmt::Display for SideToMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SideToMove::White => write!(f, "white"),
            SideToMove::Black => write!(f, "black"),
            SideToMove::Unknown => write!(f, "unknown"),
        }
    }
}

/// Anything that can turn a FEN string into an image path.
pub trait BoardSource {
    fn board_for(&self, fen: &str) -> Result<PathBuf>;

    /// Side length of the produced images in pixels.
    fn board_side(&self) -> u32;
}

/// An [`ImageCache`] bound to one output directory.
pub struct CacheSource<'a> {
    cache: &'a ImageCache,
    out_dir: PathBuf,
}

impl<'a> CacheSource<'a> {
    pub fn new<P: AsRef<Path>>(cache: &'a ImageCache, out_dir: P) -> Self {
        Self {
            cache,
            out_dir: out_dir.as_ref().to_path_buf(),
        }
    }
}

impl BoardSource for CacheSource<'_> {
    fn board_for(&self, fen: &str) -> Result<PathBuf> {
        self.cache.get_or_render(fen, &self.out_dir)
    }

    fn board_side(&self) -> u32 {
        self.cache.renderer().config().board_side()
    }
}

/// Substitutes all FEN spans in `text`. Fails if any board cannot be produced.
pub fn substitute<S: BoardSource + ?Sized>(text: &str, source: &S) -> Result<String> {
    let side = source.board_side();
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for caps in FEN_TAG.captures_iter(text) {
        let (Some(span), Some(notation)) = (caps.get(0), caps.name("notation")) else {
            continue;
        };
        let notation = notation.as_str();
        let path = source.board_for(notation)?;

        out.push_str(&text[last..span.start()]);
        out.push_str(&format!(
            r#"<img src="{}" width="{}" height="{}" border="1" />"#,
            path.display(),
            side,
            side
        ));
        if let Some(caption) = SideToMove::detect(notation).caption() {
            out.push_str("<br/>");
            out.push_str(caption);
        }
        last = span.end();
    }

    out.push_str(&text[last..]);
    Ok(out)
}

/// Notations of all FEN spans in `text`, placement fields only.
pub fn placements(text: &str) -> Vec<&str> {
    FEN_TAG
        .captures_iter(text)
        .filter_map(|caps| caps.name("notation"))
        .map(|m| placement_field(m.as_str()))
        .collect()
}
