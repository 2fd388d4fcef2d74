//! Error types for chess engine
//!
//! The engine only has a handful of failure modes. Everything else is a total
//! function over well-formed boards.

use thiserror::Error;

use crate::types::Square;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// No piece at source square
    #[error("No piece at source square {square}")]
    NoPieceAtSquare { square: Square },

    /// Coordinates outside the 8x8 board
    #[error("Invalid square ({row}, {col}) (row and col must be 0-7)")]
    InvalidSquare { row: i32, col: i32 },

    /// Text that is not a square in algebraic notation
    #[error("Invalid algebraic notation: {text:?}")]
    InvalidNotation { text: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
