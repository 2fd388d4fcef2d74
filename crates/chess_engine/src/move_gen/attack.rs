//! Attack detection and check detection
//!
//! Check detection is the hottest path in the engine: the legality filter calls
//! it once per candidate move and the search calls it at every node. It reuses
//! a single destination buffer across all attacking pieces instead of
//! allocating one per piece.
//!
//! ## Algorithm
//!
//! To check whether a king is attacked, locate it, then generate pseudo-legal
//! destinations for every opposing piece and see whether any of them lands on
//! the king's square. Pawn pushes never land on an occupied square, so they
//! can't produce a false positive.

use super::generate_piece_moves;
use crate::board::Board;
use crate::types::*;

/// Longest possible pseudo-legal move list for one piece (queen in the center)
const MAX_PIECE_MOVES: usize = 27;

/// Check if `square` is reachable by any piece of `by_color`
///
/// # Arguments
///
/// * `board` - The position
/// * `square` - Target square
/// * `by_color` - Color of pieces that might attack
///
/// # Examples
///
/// ```rust,ignore
/// // Is e4 attacked by Black?
/// let attacked = is_square_attacked(&board, sq("e4"), Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    let mut destinations = Vec::with_capacity(MAX_PIECE_MOVES);

    for (from, _) in board.pieces_of(by_color) {
        destinations.clear();
        generate_piece_moves(board, from, &mut destinations);
        if destinations.contains(&square) {
            return true;
        }
    }

    false
}

/// Check if `color`'s king is attacked
///
/// A board without a king of that color is never in check; that can't arise
/// from legal play and is not treated as an error.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match board.find_king(color) {
        Some(king) => is_square_attacked(board, king, color.opponent()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_algebraic;

    fn sq(name: &str) -> Square {
        parse_algebraic(name).unwrap()
    }

    #[test]
    fn test_initial_position_no_check() {
        //! Neither king is attacked in the starting position
        let board = Board::initial();
        assert!(!is_king_in_check(&board, Color::White));
        assert!(!is_king_in_check(&board, Color::Black));
    }

    #[test]
    fn test_rook_gives_check_on_open_file() {
        //! A rook on the king's file with nothing between gives check
        let board = Board::from_pieces(&[
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("e8"), Piece::new(PieceKind::Rook, Color::Black)),
        ]);
        assert!(is_king_in_check(&board, Color::White));
    }

    #[test]
    fn test_blocked_rook_no_check() {
        //! Any piece between rook and king blocks the check
        let board = Board::from_pieces(&[
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("e4"), Piece::new(PieceKind::Pawn, Color::White)),
            (sq("e8"), Piece::new(PieceKind::Rook, Color::Black)),
        ]);
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn test_pawn_attacks_diagonally_only() {
        //! A pawn checks diagonally but not straight ahead
        let diagonal = Board::from_pieces(&[
            (sq("e4"), Piece::new(PieceKind::King, Color::White)),
            (sq("d5"), Piece::new(PieceKind::Pawn, Color::Black)),
        ]);
        assert!(is_king_in_check(&diagonal, Color::White));

        let ahead = Board::from_pieces(&[
            (sq("e4"), Piece::new(PieceKind::King, Color::White)),
            (sq("e5"), Piece::new(PieceKind::Pawn, Color::Black)),
        ]);
        assert!(!is_king_in_check(&ahead, Color::White));
    }

    #[test]
    fn test_knight_check() {
        //! Knights check over other pieces
        let board = Board::from_pieces(&[
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("e2"), Piece::new(PieceKind::Pawn, Color::White)),
            (sq("d2"), Piece::new(PieceKind::Pawn, Color::White)),
            (sq("f3"), Piece::new(PieceKind::Knight, Color::Black)),
        ]);
        assert!(is_king_in_check(&board, Color::White));
    }

    #[test]
    fn test_missing_king_is_not_check() {
        //! Without a king there is nothing to attack
        let board = Board::from_pieces(&[(sq("e8"), Piece::new(PieceKind::Queen, Color::Black))]);
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn test_square_attacked_by_color() {
        //! Attacks are attributed to the right side
        let board = Board::initial();
        assert!(is_square_attacked(&board, sq("f3"), Color::White));
        assert!(!is_square_attacked(&board, sq("f3"), Color::Black));
        assert!(is_square_attacked(&board, sq("f6"), Color::Black));
    }
}
