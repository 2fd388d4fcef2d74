//! Root move selection
//!
//! Scores each legal move of the side to move with [`alphabeta`] and keeps
//! the best one. Ties keep the earlier move in generation order.
//!
//! The child of every root move is searched with `maximizing` set from the
//! ROOT side (true when White is searching), not from the side that replies.
//! At the first reply ply the opponent therefore picks the reply that is best
//! for the root side; deeper plies alternate normally. Depth 1 is unaffected.

use super::alphabeta::{alphabeta, SearchStats};
use crate::api::{all_legal_moves, make_move};
use crate::board::Board;
use crate::constants::SCORE_INF;
use crate::types::*;

/// Result of a root search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Chosen move, `None` when the side to move has no legal move
    pub best_move: Option<Move>,
    /// Score of the chosen move from White's point of view
    pub score: i32,
    /// Positions visited across all root moves
    pub nodes: u64,
    /// Alpha-beta cutoffs taken
    pub cutoffs: u64,
}

/// Search `depth` plies and return the best move for `color` with statistics
///
/// # Arguments
///
/// * `board` - Position to search
/// * `color` - Side to move
/// * `depth` - Plies to look ahead, counting the root move itself
///
/// # Returns
///
/// A [`SearchOutcome`]. White keeps a move only when it scores strictly more
/// than the current best, Black only when strictly less, so the first best
/// move found wins ties.
///
/// # Examples
///
/// ```rust,ignore
/// let outcome = search_best_move(&Board::initial(), Color::White, 2);
/// assert!(outcome.best_move.is_some());
/// ```
pub fn search_best_move(board: &Board, color: Color, depth: u32) -> SearchOutcome {
    let mut stats = SearchStats::default();
    let opponent = color.opponent();
    let maximizing_child = color == Color::White;

    let mut best_move = None;
    let mut best_score = if color == Color::White {
        -SCORE_INF
    } else {
        SCORE_INF
    };

    for (from, to) in all_legal_moves(board, color) {
        let Ok((next, mv)) = make_move(board, from, to, None) else {
            continue;
        };

        let score = alphabeta(
            &next,
            depth.saturating_sub(1),
            opponent,
            -SCORE_INF,
            SCORE_INF,
            maximizing_child,
            &mut stats,
        );

        let improves = match color {
            Color::White => score > best_score,
            Color::Black => score < best_score,
        };
        if improves || best_move.is_none() {
            best_score = score;
            best_move = Some(mv);
        }
    }

    SearchOutcome {
        best_move,
        score: if best_move.is_some() { best_score } else { 0 },
        nodes: stats.nodes,
        cutoffs: stats.cutoffs,
    }
}

/// Best move for `color` at `depth` plies, or `None` without legal moves
///
/// The returned move carries `captured` and `promotion` (always Queen for
/// the AI); `is_check` / `is_checkmate` are left for the caller.
pub fn find_best_move(board: &Board, color: Color, depth: u32) -> Option<Move> {
    search_best_move(board, color, depth).best_move
}
