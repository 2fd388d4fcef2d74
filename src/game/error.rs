//! Error types for game module
//!
//! Provides custom error types for session logic including move validation,
//! turn order, undo and the AI task.

use chess_engine::{ChessEngineError, Color, GameStatus, Square};

/// Errors that can occur in game logic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Malformed request, e.g. an empty source square or a bad promotion piece
    #[error("Invalid move: {message}")]
    InvalidMove { message: String },

    /// Well-formed move that the rules don't allow
    #[error("Illegal move: {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// The game already ended in checkmate or stalemate
    #[error("Game is over ({status:?})")]
    GameOver { status: GameStatus },

    /// Tried to move a piece of the side not on move
    #[error("Not your turn: {expected} to move")]
    NotYourTurn { expected: Color },

    /// Undo with an empty history
    #[error("Nothing to undo")]
    NothingToUndo,

    /// The background search task failed to complete
    #[error("AI task failed: {message}")]
    AiTask { message: String },

    /// Error bubbled up from the rules engine
    #[error(transparent)]
    Engine(#[from] ChessEngineError),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
