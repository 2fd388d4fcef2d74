//! Move execution and legal move queries
//!
//! Functions for executing moves and listing legal moves.

use crate::board::Board;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::move_gen::legal_destinations;
use crate::types::*;

/// Legal destinations for the piece on `square`, if it belongs to `color`
///
/// # Arguments
///
/// * `board` - The position
/// * `square` - Square of the piece to move
/// * `color` - Side to move
///
/// # Returns
///
/// Destinations that don't leave `color`'s king in check. Empty for an empty
/// square or a piece of the other color.
///
/// # Examples
///
/// ```rust,ignore
/// let moves = get_valid_moves(&Board::initial(), sq("g1"), Color::White);
/// // moves == [f3, h3]
/// ```
pub fn get_valid_moves(board: &Board, square: Square, color: Color) -> Vec<Square> {
    legal_destinations(board, square, color)
}

/// Every legal `(from, to)` pair for `color`
///
/// Pieces are visited in scan order (row 0 first, left to right) and each
/// piece's destinations in generation order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<(Square, Square)> {
    board
        .pieces_of(color)
        .flat_map(|(from, _)| {
            legal_destinations(board, from, color)
                .into_iter()
                .map(move |to| (from, to))
        })
        .collect()
}

/// Execute a move, returning the new board and the move record
///
/// # Arguments
///
/// * `board` - The position before the move (left untouched)
/// * `from` - Source square
/// * `to` - Destination square
/// * `promotion` - Piece kind for a pawn reaching the last row; Queen if `None`
///
/// # Returns
///
/// The new board and a [`Move`] with `captured` and `promotion` filled in.
/// `is_check` / `is_checkmate` are left `false` for the caller to set.
///
/// # Errors
///
/// [`ChessEngineError::NoPieceAtSquare`] if `from` is empty.
///
/// This function does not validate move legality. Use [`get_valid_moves`]
/// first to ensure the move is valid before calling this function.
///
/// # Examples
///
/// ```rust,ignore
/// // Move pawn from e2 to e4
/// let (board, mv) = make_move(&Board::initial(), sq("e2"), sq("e4"), None)?;
/// assert!(mv.captured.is_none());
/// ```
pub fn make_move(
    board: &Board,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
) -> ChessEngineResult<(Board, Move)> {
    let piece = board
        .get(from)
        .ok_or(ChessEngineError::NoPieceAtSquare { square: from })?;

    let mut record = Move::new(from, to);
    record.captured = board.get(to);

    let mut next = *board;
    let landing = if piece.kind == PieceKind::Pawn && to.row() == piece.color.promotion_row() {
        let kind = promotion.unwrap_or(PieceKind::Queen);
        record.promotion = Some(kind);
        Piece::new(kind, piece.color)
    } else {
        piece
    };

    next.set(to, Some(landing));
    next.set(from, None);

    Ok((next, record))
}
