//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//!
//! ## Algorithm
//!
//! For each direction, step one square at a time from the origin:
//! 1. Off the board: the ray ends
//! 2. Empty square: valid move, keep going
//! 3. Opponent piece: valid capture, then the ray ends
//! 4. Own piece: not a move, the ray ends

use crate::board::Board;
use crate::types::*;

/// Cast rays from `from` in each of `directions`
///
/// # Arguments
///
/// * `board` - The position
/// * `from` - Square holding the sliding piece
/// * `color` - Color of the moving piece
/// * `directions` - `(d_row, d_col)` unit steps
/// * `moves` - Output vector to append destinations to
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    color: Color,
    directions: &[(i8, i8)],
    moves: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.get(next) {
                None => moves.push(next),
                Some(piece) => {
                    if piece.color != color {
                        moves.push(next);
                    }
                    break;
                }
            }
            current = next;
        }
    }
}
