//! Queen move generation
//!
//! Queens combine the movement patterns of bishops and rooks.

use super::bishop;
use super::rook;
use crate::board::Board;
use crate::types::*;

/// Generate queen moves from a given square
///
/// Bishop rays come first, then rook rays.
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_queen_moves(&board, sq("d1"), Color::White, &mut moves);
/// ```
pub fn generate_queen_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    bishop::generate_bishop_moves(board, from, color, moves);
    rook::generate_rook_moves(board, from, color, moves);
}
