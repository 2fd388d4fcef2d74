//! Knight move generation
//!
//! Knights move in an L-shape: 2 squares in one direction, then 1 square
//! perpendicular. They jump over pieces, so only the destination matters.

use super::king::generate_offset_moves;
use crate::board::Board;
use crate::constants::KNIGHT_OFFSETS;
use crate::types::*;

/// Generate knight moves from a given square
///
/// A destination is valid if it is on the board and either empty or holds an
/// opposing piece.
pub fn generate_knight_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    generate_offset_moves(board, from, color, &KNIGHT_OFFSETS, moves);
}
