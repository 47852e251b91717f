//! Piece symbols as they appear in a FEN piece-placement field.
//! Upper case is White, lower case is Black.

use std::fmt;

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    White,
    Black,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum PieceKind {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::King,
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Pawn,
    ];

    /// Lower-case FEN letter.
    pub fn letter(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Queen => 'q',
            PieceKind::Rook => 'r',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Pawn => 'p',
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Self { kind, color }
    }

    /// All 12 symbols, White first.
    pub fn all() -> impl Iterator<Item = Piece> {
        [Color::White, Color::Black]
            .into_iter()
            .flat_map(|color| PieceKind::ALL.into_iter().map(move |kind| Piece::new(kind, color)))
    }

    pub fn from_char(c: char) -> Option<Self> {
        let kind = PieceKind::ALL
            .into_iter()
            .find(|kind| kind.letter() == c.to_ascii_lowercase())?;
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self { kind, color })
    }

    pub fn to_char(self) -> char {
        match self.color {
            Color::White => self.kind.letter().to_ascii_uppercase(),
            Color::Black => self.kind.letter(),
        }
    }

    /// Glyph file name, e.g. `Chess_klt45.png` for the white king at 45 px.
    pub fn glyph_file_name(self, cell_size: u32) -> String {
        let shade = match self.color {
            Color::White => 'l',
            Color::Black => 'd',
        };
        format!("Chess_{}{}t{}.png", self.kind.letter(), shade, cell_size)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_has_twelve_distinct_symbols() {
        let symbols: String = Piece::all().map(Piece::to_char).collect();
        assert_eq!(symbols, "KQRBNPkqrbnp");
    }

    #[test]
    fn test_from_char_case_encodes_color() {
        assert_eq!(
            Piece::from_char('N'),
            Some(Piece::new(PieceKind::Knight, Color::White))
        );
        assert_eq!(
            Piece::from_char('n'),
            Some(Piece::new(PieceKind::Knight, Color::Black))
        );
        assert_eq!(Piece::from_char('x'), None);
        assert_eq!(Piece::from_char('3'), None);
        assert_eq!(Piece::from_char('/'), None);
    }

    #[test]
    fn test_glyph_file_name() {
        let white_king = Piece::new(PieceKind::King, Color::White);
        let black_pawn = Piece::new(PieceKind::Pawn, Color::Black);
        assert_eq!(white_king.glyph_file_name(45), "Chess_klt45.png");
        assert_eq!(black_pawn.glyph_file_name(45), "Chess_pdt45.png");
    }
}
