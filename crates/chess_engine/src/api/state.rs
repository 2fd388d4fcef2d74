//! Game state queries
//!
//! Predicates over a position for the side to move: check, checkmate and
//! stalemate, plus the combined [`GameStatus`].

use crate::board::Board;
use crate::move_gen::{is_king_in_check, legal_destinations};
use crate::types::*;

/// Does `color` have at least one legal move anywhere on the board?
///
/// Stops at the first piece with a legal destination.
pub fn has_any_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(from, _)| !legal_destinations(board, from, color).is_empty())
}

/// `color` is in check and has no legal move
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    is_king_in_check(board, color) && !has_any_legal_move(board, color)
}

/// `color` is not in check but has no legal move (stalemate)
///
/// Stalemate is the only draw condition evaluated.
pub fn is_draw(board: &Board, color: Color) -> bool {
    !is_king_in_check(board, color) && !has_any_legal_move(board, color)
}

/// Status of the position for `color`, the side about to move
///
/// Priority is Checkmate > Check > Draw > Ongoing.
pub fn game_status(board: &Board, color: Color) -> GameStatus {
    let in_check = is_king_in_check(board, color);
    let can_move = has_any_legal_move(board, color);

    match (in_check, can_move) {
        (true, false) => GameStatus::Checkmate,
        (true, true) => GameStatus::Check,
        (false, false) => GameStatus::Draw,
        (false, true) => GameStatus::Ongoing,
    }
}
