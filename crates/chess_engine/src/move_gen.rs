//! Move generation
//!
//! Pseudo-legal move generation per piece type, and the legality filter built
//! on top of it.
//!
//! ## Pseudo-legal vs legal
//!
//! The per-piece generators only look at movement patterns and board
//! occupancy. A pseudo-legal move may leave the mover's own king attacked;
//! [`legal_destinations`] removes those by simulating each move and running
//! [`attack::is_king_in_check`] on the result.
//!
//! ## Output order
//!
//! Destinations come out in the order of the direction tables in
//! [`crate::constants`]. The search has no move ordering, so this order is
//! what decides ties and how much alpha-beta prunes.
//!
//! ## Module Organization
//!
//! - `pawn` - Single/double pushes and diagonal captures
//! - `knight`, `king` - Fixed offset tables
//! - `sliding` - Ray casting shared by bishop, rook and queen
//! - `bishop`, `rook`, `queen` - Sliding piece wrappers
//! - `attack` - Check detection

pub mod attack;
mod bishop;
mod king;
mod knight;
mod pawn;
mod queen;
mod rook;
mod sliding;

pub use attack::is_king_in_check;
pub use bishop::generate_bishop_moves;
pub use king::generate_king_moves;
pub use knight::generate_knight_moves;
pub use pawn::generate_pawn_moves;
pub use queen::generate_queen_moves;
pub use rook::generate_rook_moves;

use crate::board::Board;
use crate::types::*;

/// Append the pseudo-legal destinations of the piece on `from` to `moves`
///
/// Does nothing for an empty square. The color comes from the piece itself.
pub fn generate_piece_moves(board: &Board, from: Square, moves: &mut Vec<Square>) {
    let Some(piece) = board.get(from) else {
        return;
    };

    match piece.kind {
        PieceKind::Pawn => generate_pawn_moves(board, from, piece.color, moves),
        PieceKind::Knight => generate_knight_moves(board, from, piece.color, moves),
        PieceKind::Bishop => generate_bishop_moves(board, from, piece.color, moves),
        PieceKind::Rook => generate_rook_moves(board, from, piece.color, moves),
        PieceKind::Queen => generate_queen_moves(board, from, piece.color, moves),
        PieceKind::King => generate_king_moves(board, from, piece.color, moves),
    }
}

/// Pseudo-legal destinations of the piece on `from`
pub fn pseudo_legal_moves(board: &Board, from: Square) -> Vec<Square> {
    let mut moves = Vec::new();
    generate_piece_moves(board, from, &mut moves);
    moves
}

/// Legal destinations of the piece on `from` for `color`
///
/// Empty when the square is empty or holds a piece of the other color.
pub fn legal_destinations(board: &Board, from: Square, color: Color) -> Vec<Square> {
    match board.get(from) {
        Some(piece) if piece.color == color => {}
        _ => return Vec::new(),
    }

    let mut moves = pseudo_legal_moves(board, from);
    moves.retain(|&to| !is_king_in_check(&board.with_piece_moved(from, to), color));
    moves
}
