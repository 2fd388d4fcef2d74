//! Alpha-beta minimax
//!
//! Standard two-player minimax with alpha/beta bounds. White is the
//! maximizing side and Black the minimizing side; scores come from
//! [`evaluate_board`] so they are always from White's point of view.

use crate::api::{all_legal_moves, has_any_legal_move, make_move};
use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::evaluation::evaluate_board;
use crate::types::*;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, leaves included
    pub nodes: u64,
    /// Times a node stopped early because `beta <= alpha`
    pub cutoffs: u64,
}

/// Minimax value of `board` with `side` to move
///
/// # Arguments
///
/// * `board` - The position
/// * `depth` - Remaining plies
/// * `side` - Side to move in `board`
/// * `alpha` - Best score the maximizer is already guaranteed
/// * `beta` - Best score the minimizer is already guaranteed
/// * `maximizing` - Whether this node picks the largest child score
///
/// # Returns
///
/// The static evaluation when `depth == 0` or `side` is checkmated or
/// stalemated; otherwise the best child score for this node.
pub fn minimax(
    board: &Board,
    depth: u32,
    side: Color,
    alpha: i32,
    beta: i32,
    maximizing: bool,
) -> i32 {
    let mut stats = SearchStats::default();
    alphabeta(board, depth, side, alpha, beta, maximizing, &mut stats)
}

pub(super) fn alphabeta(
    board: &Board,
    depth: u32,
    side: Color,
    mut alpha: i32,
    mut beta: i32,
    maximizing: bool,
    stats: &mut SearchStats,
) -> i32 {
    stats.nodes += 1;

    // Checkmate or stalemate: no legal move either way
    if depth == 0 || !has_any_legal_move(board, side) {
        return evaluate_board(board);
    }

    let mut best = if maximizing { -SCORE_INF } else { SCORE_INF };

    for (from, to) in all_legal_moves(board, side) {
        let Ok((next, _)) = make_move(board, from, to, None) else {
            continue;
        };

        let score = alphabeta(
            &next,
            depth - 1,
            side.opponent(),
            alpha,
            beta,
            !maximizing,
            stats,
        );

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if beta <= alpha {
            stats.cutoffs += 1;
            break;
        }
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parse_algebraic;

    fn sq(name: &str) -> Square {
        parse_algebraic(name).unwrap()
    }

    #[test]
    fn test_depth_zero_is_static_eval() {
        //! At depth 0 the score is just material
        let mut board = Board::initial();
        board.set(sq("a7"), None);
        assert_eq!(minimax(&board, 0, Color::White, -SCORE_INF, SCORE_INF, true), 1);
    }

    #[test]
    fn test_maximizer_takes_free_queen() {
        //! One ply for White finds the capture worth a queen
        let board = Board::from_pieces(&[
            (sq("e1"), Piece::new(PieceKind::King, Color::White)),
            (sq("a1"), Piece::new(PieceKind::Rook, Color::White)),
            (sq("a8"), Piece::new(PieceKind::Queen, Color::Black)),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let score = minimax(&board, 1, Color::White, -SCORE_INF, SCORE_INF, true);
        assert_eq!(score, 5);
    }

    #[test]
    fn test_minimizer_recaptures() {
        //! Two plies: White grabs a pawn but loses the queen to the recapture
        let board = Board::from_pieces(&[
            (sq("a1"), Piece::new(PieceKind::King, Color::White)),
            (sq("d1"), Piece::new(PieceKind::Queen, Color::White)),
            (sq("d6"), Piece::new(PieceKind::Pawn, Color::Black)),
            (sq("c7"), Piece::new(PieceKind::Pawn, Color::Black)),
            (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
        ]);
        let mut stats = SearchStats::default();
        let score = alphabeta(
            &board,
            2,
            Color::White,
            -SCORE_INF,
            SCORE_INF,
            true,
            &mut stats,
        );
        // Best White can keep is the starting balance: Q vs two pawns
        assert_eq!(score, 9 - 2);
        assert!(stats.nodes > 1);
    }

    #[test]
    fn test_terminal_position_returns_eval() {
        //! A mated side gets the static score regardless of depth
        let board = Board::from_pieces(&[
            (sq("h8"), Piece::new(PieceKind::King, Color::Black)),
            (sq("g7"), Piece::new(PieceKind::Queen, Color::White)),
            (sq("f6"), Piece::new(PieceKind::King, Color::White)),
        ]);
        let mut stats = SearchStats::default();
        let score = alphabeta(
            &board,
            3,
            Color::Black,
            -SCORE_INF,
            SCORE_INF,
            false,
            &mut stats,
        );
        assert_eq!(score, 9);
        assert_eq!(stats.nodes, 1);
    }

    #[test]
    fn test_initial_position_two_plies_level() {
        //! No capture is reachable in two plies from the start
        let board = Board::initial();
        let full = minimax(&board, 2, Color::White, -SCORE_INF, SCORE_INF, true);
        assert_eq!(full, 0);
    }
}
