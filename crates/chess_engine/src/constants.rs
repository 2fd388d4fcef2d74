//! # Chess Engine Constants
//!
//! Board geometry, material values and the movement tables used by move
//! generation.
//!
//! ## Material values
//!
//! Scores are whole pawns, not centipawns:
//!
//! | Piece  | Value |
//! |--------|-------|
//! | Pawn   | 1     |
//! | Knight | 3     |
//! | Bishop | 3     |
//! | Rook   | 5     |
//! | Queen  | 9     |
//! | King   | 100   |
//!
//! The king outweighs every other piece combined so a line that loses it is
//! never preferred.
//!
//! ## Direction tables
//!
//! Offsets are `(d_row, d_col)` pairs. Row 0 is Black's back rank, so "up the
//! board" for White is a negative row delta. Table order matters: it is the
//! order moves come out of generation, and the search breaks ties by that order.

use crate::types::PieceKind;

/// Number of rows and columns on the board
pub const BOARD_SIZE: usize = 8;

/// File letters, indexed by column
pub const FILES: [char; BOARD_SIZE] = ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'];

pub const PAWN_VALUE: i32 = 1;
pub const KNIGHT_VALUE: i32 = 3;
pub const BISHOP_VALUE: i32 = 3;
pub const ROOK_VALUE: i32 = 5;
pub const QUEEN_VALUE: i32 = 9;
pub const KING_VALUE: i32 = 100;

/// Score bounds used as -inf / +inf by the search
pub const SCORE_INF: i32 = i32::MAX;

/// Row a pawn starts on (and may double-push from)
pub const WHITE_PAWN_START_ROW: u8 = 6;
pub const BLACK_PAWN_START_ROW: u8 = 1;

/// Row a pawn promotes on
pub const WHITE_PROMOTION_ROW: u8 = 0;
pub const BLACK_PROMOTION_ROW: u8 = 7;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const BISHOP_DIRS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

pub const ROOK_DIRS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Back rank layout, column 0 to 7
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];
