//! # Chess Engine Core Types
//!
//! Value types shared by every part of the engine.
//!
//! ## Squares
//!
//! A [`Square`] is a `(row, col)` pair, both in `0..8`. Row 0 is Black's back
//! rank (rank 8 in algebraic notation) and row 7 is White's back rank (rank 1).
//! Squares can only be built through checked constructors, so any `Square`
//! value is on the board.
//!
//! ## Pieces
//!
//! A [`Piece`] is an immutable `{kind, color}` pair. It is `Copy` and two bytes
//! wide, which keeps a whole board at 128 bytes and cheap to copy during search.
//!
//! ## Moves
//!
//! A [`Move`] is a record of what happened, not an action. The executor in
//! [`crate::api::make_move`] produces one; the session fills in the check flags
//! once it has looked at the resulting position.

use serde::{Deserialize, Serialize};

use crate::board::is_on_board;
use crate::constants::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The other side
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward pawn step
    #[inline]
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_START_ROW,
            Color::Black => BLACK_PAWN_START_ROW,
        }
    }

    #[inline]
    pub fn promotion_row(self) -> u8 {
        match self {
            Color::White => WHITE_PROMOTION_ROW,
            Color::Black => BLACK_PROMOTION_ROW,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Material value in pawns
    #[inline]
    pub fn value(self) -> i32 {
        match self {
            PieceKind::Pawn => PAWN_VALUE,
            PieceKind::Knight => KNIGHT_VALUE,
            PieceKind::Bishop => BISHOP_VALUE,
            PieceKind::Rook => ROOK_VALUE,
            PieceKind::Queen => QUEEN_VALUE,
            PieceKind::King => KING_VALUE,
        }
    }

    /// Letter used in move notation and board diagrams
    ///
    /// Knight uses `N` so it doesn't collide with the king.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Parse a promotion / diagram letter, case-insensitive
    pub fn from_letter(letter: char) -> Option<PieceKind> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece { kind, color }
    }

    /// Diagram character: uppercase for White, lowercase for Black
    pub fn symbol(self) -> char {
        let letter = self.kind.letter();
        match self.color {
            Color::White => letter,
            Color::Black => letter.to_ascii_lowercase(),
        }
    }

    /// Material value signed from White's point of view
    #[inline]
    pub fn signed_value(self) -> i32 {
        match self.color {
            Color::White => self.kind.value(),
            Color::Black => -self.kind.value(),
        }
    }
}

/// A square on the board, always in range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Build a square, `None` if off the board
    #[inline]
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if (row as usize) < BOARD_SIZE && (col as usize) < BOARD_SIZE {
            Some(Square { row, col })
        } else {
            None
        }
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    /// Step by a row/col delta, `None` if that leaves the board
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i32 + d_row as i32;
        let col = self.col as i32 + d_col as i32;
        if is_on_board(row, col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in scan order: row 0 to 7, col 0 to 7 within a row
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl TryFrom<(u8, u8)> for Square {
    type Error = crate::error::ChessEngineError;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Square::new(row, col).ok_or(crate::error::ChessEngineError::InvalidSquare {
            row: row as i32,
            col: col as i32,
        })
    }
}

impl From<Square> for (u8, u8) {
    fn from(square: Square) -> Self {
        (square.row, square.col)
    }
}

/// A move record
///
/// `captured` and `promotion` are filled by the executor. `is_check` and
/// `is_checkmate` describe the position after the move for the side that
/// has to reply, and are filled by whoever evaluates that position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub captured: Option<Piece>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub promotion: Option<PieceKind>,
    #[serde(default)]
    pub is_check: bool,
    #[serde(default)]
    pub is_checkmate: bool,
}

impl Move {
    /// A bare from/to move with no annotations
    pub fn new(from: Square, to: Square) -> Self {
        Move {
            from,
            to,
            captured: None,
            promotion: None,
            is_check: false,
            is_checkmate: false,
        }
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Status of a position for the side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Ongoing,
    Check,
    Checkmate,
    Draw,
}

impl GameStatus {
    /// Checkmate and Draw end the game
    pub fn is_terminal(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Draw)
    }
}
