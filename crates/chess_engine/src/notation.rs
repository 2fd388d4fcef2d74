//! Algebraic notation
//!
//! Squares are written as a file letter `a`-`h` followed by a rank digit
//! `1`-`8`, where rank is `8 - row`. Moves use short algebraic notation
//! without disambiguation: `e4`, `Nf3`, `exd5`, `Qxf7#`, `e8=Q+`.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::constants::{BOARD_SIZE, FILES};
use crate::error::ChessEngineError;
use crate::types::*;

/// Algebraic name of a square, e.g. row 6 col 4 is `"e2"`
pub fn square_to_algebraic(square: Square) -> String {
    let file = FILES[square.col() as usize];
    let rank = BOARD_SIZE as u8 - square.row();
    format!("{file}{rank}")
}

/// Parse a two-character algebraic square name
///
/// # Returns
///
/// `None` unless `text` is exactly a file `a`-`h` and a rank `1`-`8`.
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(parse_algebraic("a8"), Square::new(0, 0));
/// assert_eq!(parse_algebraic("e10"), None);
/// ```
pub fn parse_algebraic(text: &str) -> Option<Square> {
    let mut chars = text.chars();
    let (file, rank) = (chars.next()?, chars.next()?);
    if chars.next().is_some() {
        return None;
    }

    let col = FILES.iter().position(|&f| f == file)?;
    let rank = rank.to_digit(10)?;
    if !(1..=BOARD_SIZE as u32).contains(&rank) {
        return None;
    }

    Square::new((BOARD_SIZE as u32 - rank) as u8, col as u8)
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&square_to_algebraic(*self))
    }
}

impl FromStr for Square {
    type Err = ChessEngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_algebraic(s).ok_or_else(|| ChessEngineError::InvalidNotation {
            text: s.to_string(),
        })
    }
}

/// Short algebraic notation for `mv`, played on `board_before`
///
/// # Arguments
///
/// * `mv` - The move
/// * `board_before` - Position the move was played from
/// * `is_check` - The move gives check
/// * `is_checkmate` - The move gives checkmate (takes precedence over check)
///
/// # Returns
///
/// The notation, or an empty string when `mv.from` is empty on `board_before`.
///
/// # Examples
///
/// ```rust,ignore
/// let mv = Move::new(sq("g1"), sq("f3"));
/// assert_eq!(move_notation(&mv, &Board::initial(), false, false), "Nf3");
/// ```
pub fn move_notation(mv: &Move, board_before: &Board, is_check: bool, is_checkmate: bool) -> String {
    let Some(piece) = board_before.get(mv.from) else {
        return String::new();
    };

    let captures = mv.is_capture() || !board_before.is_empty(mv.to);
    let mut text = String::new();

    if piece.kind == PieceKind::Pawn {
        if captures {
            text.push(FILES[mv.from.col() as usize]);
        }
    } else {
        text.push(piece.kind.letter());
    }

    if captures {
        text.push('x');
    }
    text.push_str(&square_to_algebraic(mv.to));

    if let Some(kind) = mv.promotion {
        text.push('=');
        text.push(kind.letter());
    }

    if is_checkmate {
        text.push('#');
    } else if is_check {
        text.push('+');
    }

    text
}
