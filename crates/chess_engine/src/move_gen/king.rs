//! King move generation
//!
//! Kings move one square in any direction. Moving into an attacked square is
//! rejected later by the legality filter, not here. Castling is not
//! implemented.

use crate::board::Board;
use crate::constants::KING_OFFSETS;
use crate::types::*;

/// Generate king moves from a given square
pub fn generate_king_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_offset_moves(board, from, color, &KING_OFFSETS, moves);
}

/// Shared by kings and knights: try each offset once
pub(super) fn generate_offset_moves(
    board: &Board,
    from: Square,
    color: Color,
    offsets: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in offsets {
        let Some(to) = from.offset(d_row, d_col) else {
            continue;
        };

        // Valid if destination is empty or contains opponent piece
        match board.get(to) {
            Some(piece) if piece.color == color => {}
            _ => moves.push(to),
        }
    }
}
