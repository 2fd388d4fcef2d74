//! Minimax search with alpha-beta pruning
//!
//! This module implements the AI move choice using:
//! - Plain minimax with alpha-beta pruning (recursive, depth is at most a few plies)
//! - Material-only evaluation at the leaves
//! - No move ordering and no transposition table: moves are tried in
//!   generation order, which also decides ties
//!
//! The search is pure and runs to completion at a fixed depth. Callers bound
//! latency by choosing the depth.
//!
//! ## Module Organization
//!
//! - `alphabeta` - Core minimax / alpha-beta recursion
//! - `root` - Root move selection (find_best_move)

mod alphabeta;
mod root;

pub use alphabeta::{minimax, SearchStats};
pub use root::{find_best_move, search_best_move, SearchOutcome};
