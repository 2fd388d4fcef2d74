//! Bishop move generation
//!
//! Bishops slide diagonally until blocked by a piece or the board edge.

use super::sliding;
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::types::*;

/// Generate bishop moves from a given square
pub fn generate_bishop_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    sliding::generate_sliding_moves(board, from, color, &BISHOP_DIRS, moves);
}
