//! Terminal chess with a minimax AI opponent
//!
//! - `core` - Settings and their persistence
//! - `game` - The game session state machine and the AI opponent
//! - `networking` - Relay messages for two-player games
//! - `cli` - Command line front end

pub mod cli;
pub mod core;
pub mod game;
pub mod networking;
