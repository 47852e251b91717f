//! FEN piece-placement walker.
//! Visits the 64 squares rank 8 to rank 1, files a to h, and yields each
//! square's content together with its pixel coordinate.
//! Never fails: malformed input degrades to empty squares.

use crate::piece::Piece;

pub const BOARD_FILES: usize = 8;
pub const BOARD_SQUARES: usize = BOARD_FILES * BOARD_FILES;

/// What occupies a square.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum CellContent {
    Empty,
    Piece(Piece),
    /// A character in piece position that is not one of the 12 symbols.
    Unknown(char),
}

impl CellContent {
    fn from_char(c: char) -> Self {
        match Piece::from_char(c) {
            Some(piece) => CellContent::Piece(piece),
            None => CellContent::Unknown(c),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellContent::Empty)
    }

    pub fn piece(&self) -> Option<Piece> {
        match self {
            CellContent::Piece(piece) => Some(*piece),
            _ => None,
        }
    }
}

/// One visited square: content plus top-left pixel coordinate.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Cell {
    pub content: CellContent,
    pub x: u32,
    pub y: u32,
}

/// Returns the first whitespace-separated field of a FEN string.
pub fn placement_field(fen: &str) -> &str {
    fen.split_whitespace().next().unwrap_or("")
}

/// Stateful cursor over a piece-placement string.
///
/// Call [`next_cell`](Self::next_cell) eight times, then
/// [`end_rank`](Self::end_rank), eight times over. [`BoardWalk`] does the
/// bookkeeping for you.
#[derive(Clone, Debug)]
pub struct FenCellIterator<'a> {
    source: &'a str,
    cell_size: u32,
    offset: usize,
    pending_empty: u32,
    x: u32,
    y: u32,
}

impl<'a> FenCellIterator<'a> {
    pub fn new(source: &'a str, cell_size: u32) -> Self {
        Self {
            source,
            cell_size,
            offset: 0,
            pending_empty: 0,
            x: 0,
            y: 0,
        }
    }

    /// Emits the current square and moves one cell to the right.
    pub fn next_cell(&mut self) -> Cell {
        let mut content = CellContent::Empty;

        if self.pending_empty == 0 {
            // '/' is left for end_rank; a short rank reads as empty.
            if let Some(c) = self.source[self.offset..].chars().next().filter(|&c| c != '/') {
                self.offset += c.len_utf8();
                match c.to_digit(10) {
                    Some(run @ 1..=8) => self.pending_empty = run,
                    _ => content = CellContent::from_char(c),
                }
            }
        }

        if self.pending_empty > 0 {
            self.pending_empty -= 1;
            content = CellContent::Empty;
        }

        let cell = Cell {
            content,
            x: self.x,
            y: self.y,
        };
        self.x += self.cell_size;
        cell
    }

    /// Skips past the next '/' (or to the end) and moves to the next rank.
    ///
    /// A pending empty run is not cleared, so an over-long run spills into
    /// the following rank.
    pub fn end_rank(&mut self) {
        self.offset = match self.source[self.offset..].find('/') {
            Some(i) => self.offset + i + 1,
            None => self.source.len(),
        };
        self.x = 0;
        self.y += self.cell_size;
    }

    pub fn walk(self) -> BoardWalk<'a> {
        BoardWalk {
            cells: self,
            emitted: 0,
        }
    }
}

/// Exactly 64 cells, with a rank advance after every eighth.
#[derive(Clone, Debug)]
pub struct BoardWalk<'a> {
    cells: FenCellIterator<'a>,
    emitted: usize,
}

impl Iterator for BoardWalk<'_> {
    type Item = Cell;

    fn next(&mut self) -> Option<Cell> {
        if self.emitted == BOARD_SQUARES {
            return None;
        }
        if self.emitted > 0 && self.emitted % BOARD_FILES == 0 {
            self.cells.end_rank();
        }
        self.emitted += 1;
        Some(self.cells.next_cell())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = BOARD_SQUARES - self.emitted;
        (left, Some(left))
    }
}

impl ExactSizeIterator for BoardWalk<'_> {}

/// Eagerly decoded board, row-major from a8 to h1.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BoardPosition {
    squares: [CellContent; BOARD_SQUARES],
}

impl BoardPosition {
    pub fn decode(placement: &str) -> Self {
        let mut squares = [CellContent::Empty; BOARD_SQUARES];
        // Coordinates are irrelevant here; unit cells keep them small.
        for (square, cell) in squares.iter_mut().zip(FenCellIterator::new(placement, 1).walk()) {
            *square = cell.content;
        }
        Self { squares }
    }

    pub fn squares(&self) -> &[CellContent; BOARD_SQUARES] {
        &self.squares
    }

    /// Square by row (0 = rank 8) and file (0 = a).
    pub fn at(&self, row: usize, file: usize) -> CellContent {
        self.squares[row * BOARD_FILES + file]
    }

    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| !s.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::{Color, PieceKind};
    use std::collections::HashSet;

    const START: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

    #[test]
    fn test_walk_yields_every_coordinate_once() {
        let cells: Vec<Cell> = FenCellIterator::new(START, 45).walk().collect();
        assert_eq!(cells.len(), 64);

        let coords: HashSet<(u32, u32)> = cells.iter().map(|c| (c.x, c.y)).collect();
        assert_eq!(coords.len(), 64);
        for cell in &cells {
            assert_eq!(cell.x % 45, 0);
            assert_eq!(cell.y % 45, 0);
            assert!(cell.x < 360 && cell.y < 360);
        }
    }

    #[test]
    fn test_row_advance_resets_x_and_steps_y() {
        let mut cells = FenCellIterator::new(START, 10);
        for file in 0..8 {
            let cell = cells.next_cell();
            assert_eq!((cell.x, cell.y), (file * 10, 0));
        }
        cells.end_rank();
        let cell = cells.next_cell();
        assert_eq!((cell.x, cell.y), (0, 10));
        assert_eq!(cell.content.piece(), Some(Piece::new(PieceKind::Pawn, Color::Black)));
    }

    #[test]
    fn test_start_position_counts() {
        let board = BoardPosition::decode(START);
        assert_eq!(board.occupied(), 32);
        assert_eq!(
            board.at(0, 4).piece(),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.at(7, 3).piece(),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert!(board.at(4, 4).is_empty());
    }

    #[test]
    fn test_empty_board() {
        let board = BoardPosition::decode("8/8/8/8/8/8/8/8");
        assert_eq!(board.occupied(), 0);
    }

    #[test]
    fn test_mixed_rank() {
        let board = BoardPosition::decode("8/8/8/3pP3/8/8/8/8");
        let rank5: Vec<CellContent> = (0..8).map(|file| board.at(3, file)).collect();
        assert!(rank5[..3].iter().all(CellContent::is_empty));
        assert_eq!(rank5[3].piece().map(Piece::to_char), Some('p'));
        assert_eq!(rank5[4].piece().map(Piece::to_char), Some('P'));
        assert!(rank5[5..].iter().all(CellContent::is_empty));
    }

    #[test]
    fn test_missing_rank_still_yields_64_cells() {
        let placement = "rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR";
        let cells: Vec<Cell> = FenCellIterator::new(placement, 45).walk().collect();
        assert_eq!(cells.len(), 64);
        assert!(cells[56..].iter().all(|c| c.content.is_empty()));
        assert_eq!(BoardPosition::decode(placement).occupied(), 32);
    }

    #[test]
    fn test_short_rank_pads_with_empty() {
        let board = BoardPosition::decode("kq/8/8/8/8/8/8/7K");
        assert_eq!(board.at(0, 1).piece().map(Piece::to_char), Some('q'));
        assert!((2..8).all(|file| board.at(0, file).is_empty()));
        assert_eq!(board.at(7, 7).piece().map(Piece::to_char), Some('K'));
    }

    #[test]
    fn test_long_rank_is_truncated() {
        let board = BoardPosition::decode("pppppppppp/PPPPPPPP/8/8/8/8/8/8");
        assert_eq!(board.occupied(), 16);
        assert_eq!(board.at(1, 0).piece().map(Piece::to_char), Some('P'));
    }

    #[test]
    fn test_unknown_letters_are_kept_as_unknown() {
        let board = BoardPosition::decode("x7/8/8/8/8/8/8/8");
        assert_eq!(board.at(0, 0), CellContent::Unknown('x'));
        assert!(board.at(0, 1).is_empty());
    }

    #[test]
    fn test_reading_past_end_is_empty() {
        let cells: Vec<Cell> = FenCellIterator::new("", 45).walk().collect();
        assert_eq!(cells.len(), 64);
        assert!(cells.iter().all(|c| c.content.is_empty()));
    }

    #[test]
    fn test_placement_field_drops_trailing_fields() {
        assert_eq!(placement_field(&format!("{} w KQkq - 0 1", START)), START);
        assert_eq!(placement_field("   "), "");
    }

    #[test]
    fn test_walk_is_exact_size() {
        let mut walk = FenCellIterator::new(START, 45).walk();
        assert_eq!(walk.len(), 64);
        walk.next();
        assert_eq!(walk.len(), 63);
    }
}
