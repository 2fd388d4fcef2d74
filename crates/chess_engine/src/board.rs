//! Board utilities and helper functions
//!
//! Provides the [`Board`] value type and the fundamental board operations used
//! throughout the engine:
//! - Square validation
//! - Piece queries and placement
//! - Standard starting position
//!
//! `Board` is `Copy`. Every transformation in the engine returns a new board,
//! so the search can explore hypothetical positions without touching the
//! session's real one.

use std::fmt;

use crate::constants::*;
use crate::types::*;

/// Check if row/col coordinates are within board bounds
#[inline]
pub fn is_on_board(row: i32, col: i32) -> bool {
    (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col)
}

/// An 8x8 grid of optional pieces, indexed `[row][col]`
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// A board with no pieces
    pub const fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Standard starting position
    ///
    /// Black occupies rows 0-1, White rows 6-7.
    pub fn initial() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[0][col] = Some(Piece::new(kind, Color::Black));
            board.squares[1][col] = Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[6][col] = Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[7][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Build a board from explicit placements, for constructed positions
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let board = Board::from_pieces(&[
    ///     (sq("e1"), Piece::new(PieceKind::King, Color::White)),
    ///     (sq("e8"), Piece::new(PieceKind::King, Color::Black)),
    /// ]);
    /// ```
    pub fn from_pieces(placements: &[(Square, Piece)]) -> Self {
        let mut board = Board::empty();
        for &(square, piece) in placements {
            board.set(square, Some(piece));
        }
        board
    }

    /// Get piece at square
    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Place or clear a square in place
    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row() as usize][square.col() as usize] = piece;
    }

    /// Check if square is empty
    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Copy of the board with the piece on `from` relocated to `to`
    ///
    /// No promotion or other side effects; this is what legality checks
    /// simulate before asking whether the king is attacked.
    #[inline]
    pub fn with_piece_moved(&self, from: Square, to: Square) -> Board {
        let mut next = *self;
        next.set(to, self.get(from));
        next.set(from, None);
        next
    }

    /// Square of `color`'s king, scanning row by row
    pub fn find_king(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&square| self.get(square) == Some(king))
    }

    /// Occupied squares with their pieces, in scan order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    /// Occupied squares of one color, in scan order
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::initial()
    }
}

/// Text diagram with rank numbers on the left and files underneath.
///
/// ```text
/// 8 r n b q k b n r
/// 7 p p p p p p p p
/// 6 . . . . . . . .
/// ...
/// 1 R N B Q K B N R
///   a b c d e f g h
/// ```
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{}", BOARD_SIZE - row)?;
            for cell in cells {
                let symbol = cell.map_or('.', Piece::symbol);
                write!(f, " {}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, " ")?;
        for file in FILES {
            write!(f, " {}", file)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(row: u8, col: u8) -> Square {
        Square::new(row, col).unwrap()
    }

    #[test]
    fn test_is_on_board_bounds() {
        //! Only coordinates in 0..8 are on the board
        assert!(is_on_board(0, 0));
        assert!(is_on_board(7, 7));
        assert!(!is_on_board(-1, 0));
        assert!(!is_on_board(0, -1));
        assert!(!is_on_board(8, 3));
        assert!(!is_on_board(3, 8));
    }

    #[test]
    fn test_initial_position_layout() {
        //! Black on rows 0-1, White on rows 6-7, kings on the e-file
        let board = Board::initial();
        assert_eq!(
            board.get(sq(0, 4)),
            Some(Piece::new(PieceKind::King, Color::Black))
        );
        assert_eq!(
            board.get(sq(7, 3)),
            Some(Piece::new(PieceKind::Queen, Color::White))
        );
        assert_eq!(board.pieces().count(), 32);
        assert_eq!(board.pieces_of(Color::White).count(), 16);
        for row in 2..6 {
            for col in 0..8 {
                assert!(board.is_empty(sq(row, col)));
            }
        }
    }

    #[test]
    fn test_with_piece_moved_leaves_original_untouched() {
        //! Relocating returns a new board; the input keeps its piece
        let board = Board::initial();
        let next = board.with_piece_moved(sq(6, 4), sq(4, 4));

        assert!(next.is_empty(sq(6, 4)));
        assert_eq!(
            next.get(sq(4, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert_eq!(
            board.get(sq(6, 4)),
            Some(Piece::new(PieceKind::Pawn, Color::White))
        );
        assert!(board.is_empty(sq(4, 4)));
    }

    #[test]
    fn test_find_king_missing() {
        //! A board without a king reports None instead of panicking
        let board = Board::empty();
        assert_eq!(board.find_king(Color::White), None);
        assert_eq!(Board::initial().find_king(Color::White), Some(sq(7, 4)));
    }

    #[test]
    fn test_display_diagram() {
        //! Diagram starts at rank 8 and ends with the file letters
        let text = Board::initial().to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert_eq!(lines[0], "8 r n b q k b n r");
        assert_eq!(lines[4], "4 . . . . . . . .");
        assert_eq!(lines[7], "1 R N B Q K B N R");
        assert_eq!(lines[8], "  a b c d e f g h");
    }
}
