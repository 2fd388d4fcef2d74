//! Public API for the chess engine
//!
//! The boundary the session layer talks to. All functions are pure: they take
//! a board by reference and return new values.
//!
//! ## Module Organization
//!
//! - `moves` - Move execution and legal move queries (make_move, get_valid_moves)
//! - `state` - Game state predicates (is_king_in_check, is_checkmate, is_draw, game_status)

mod moves;
mod state;

pub use crate::move_gen::is_king_in_check;
pub use moves::{all_legal_moves, get_valid_moves, make_move};
pub use state::{game_status, has_any_legal_move, is_checkmate, is_draw};
