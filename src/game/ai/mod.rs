//! Chess AI opponent
//!
//! This module connects the session to the engine's search for the computer
//! opponent.
//!
//! # Architecture
//!
//! - `ChessAIResource`: Game mode and difficulty settings
//! - `AIMove` / `AIStatistics`: The chosen move and its search statistics
//! - `compute_ai_move_task`: Pacing delay followed by a blocking-pool search
//!
//! # Integration Strategy
//!
//! The session board is the source of truth. For an AI turn:
//! 1. Copy the board out of the session
//! 2. Wait the pacing delay, then search on a blocking thread
//! 3. Apply the chosen move through `Session::move_piece`
//!
//! This ensures AI moves follow the same validation rules as human moves.

pub mod resource;
pub mod systems;

// Re-export for convenience
pub use resource::{AIDifficulty, ChessAIResource, GameMode};
pub use systems::{compute_ai_move, compute_ai_move_task, play_ai_turn, AIMove, AIStatistics};
