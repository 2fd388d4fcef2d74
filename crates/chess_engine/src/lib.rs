//! # Chess Engine
//!
//! Pure chess rules and move search over immutable board values.
//!
//! Every function in this crate takes a [`Board`] by reference and returns new
//! values; nothing here owns game state. The session layer in the application
//! crate keeps the authoritative board and calls into this API.
//!
//! ## Module Organization
//!
//! - `types` - Colors, pieces, squares and move records
//! - `board` - The 8x8 board value and standard setup
//! - `move_gen` - Pseudo-legal move generation per piece type, plus legality filtering
//! - `api` - Move execution and game state queries
//! - `evaluation` - Material evaluation
//! - `search` - Minimax with alpha-beta pruning
//! - `notation` - Algebraic square and move notation
//!
//! ## Rules coverage
//!
//! Castling, en passant and the repetition / fifty-move / insufficient-material
//! draws are not implemented. Stalemate is the only draw.

pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod evaluation;
pub mod move_gen;
pub mod notation;
pub mod search;
pub mod types;

pub use api::{
    all_legal_moves, game_status, get_valid_moves, has_any_legal_move, is_checkmate, is_draw,
    is_king_in_check, make_move,
};
pub use board::{is_on_board, Board};
pub use error::{ChessEngineError, ChessEngineResult};
pub use evaluation::evaluate_board;
pub use notation::{move_notation, parse_algebraic, square_to_algebraic};
pub use search::{find_best_move, minimax, search_best_move, SearchOutcome};
pub use types::{Color, GameStatus, Move, Piece, PieceKind, Square};
