//! Pawn move generation
//!
//! Handles pawn-specific move generation:
//! - Single and double forward pushes
//! - Diagonal captures
//! - Promotion is handled during move execution, not here
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, only onto an empty square
//! - **Double push**: from the start row (row 6 for White, row 1 for Black) when
//!   both squares ahead are empty
//! - **Captures**: one square diagonally forward, only onto an opposing piece
//!
//! En passant is not implemented.

use crate::board::Board;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - The position
/// * `from` - Square holding the pawn
/// * `color` - Color of the pawn
/// * `moves` - Output vector to append destinations to
///
/// # Examples
///
/// ```rust,ignore
/// let mut moves = Vec::new();
/// generate_pawn_moves(&Board::initial(), sq("e2"), Color::White, &mut moves);
/// // moves == [e3, e4]
/// ```
pub fn generate_pawn_moves(board: &Board, from: Square, color: Color, moves: &mut Vec<Square>) {
    let direction = color.pawn_direction();

    if let Some(one_forward) = from.offset(direction, 0) {
        if board.is_empty(one_forward) {
            moves.push(one_forward);

            if from.row() == color.pawn_start_row() {
                if let Some(two_forward) = from.offset(2 * direction, 0) {
                    if board.is_empty(two_forward) {
                        moves.push(two_forward);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(target) = from.offset(direction, d_col) else {
            continue;
        };
        if let Some(victim) = board.get(target) {
            if victim.color != color {
                moves.push(target);
            }
        }
    }
}
