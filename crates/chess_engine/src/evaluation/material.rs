//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::board::Board;

/// Evaluate material balance
///
/// Sum of signed piece values: positive favors White, negative favors Black.
/// See [`crate::constants`] for the value table.
pub fn evaluate_board(board: &Board) -> i32 {
    board.pieces().map(|(_, piece)| piece.signed_value()).sum()
}
