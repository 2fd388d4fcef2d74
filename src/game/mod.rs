//! Chess game logic module
//!
//! Turn order, selection, history, undo and the AI opponent on top of the
//! pure rules in `chess_engine`.
//!
//! # Module Organization
//!
//! - `session` - The [`Session`] state machine that owns the board
//! - `resources` - Selection and move history containers
//! - `ai` - Game mode, difficulty and AI turn execution
//! - `error` - [`GameError`] and [`GameResult`]

pub mod ai;
pub mod error;
pub mod resources;
pub mod session;

pub use error::{GameError, GameResult};
pub use session::{ClickOutcome, Session};
