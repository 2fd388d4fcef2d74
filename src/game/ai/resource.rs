//! AI resource definitions for game mode and difficulty settings
//!
//! Configures AI opponent behavior, strength, and game mode selection.
//! These values control when the AI moves and how deep it searches.
//!
//! # Game Modes
//!
//! - **VsHuman**: Two human players (local hot-seat)
//! - **VsAI**: One human player vs AI opponent (specify AI color)
//!
//! # Difficulty Levels
//!
//! Difficulty is a fixed search depth. The search always runs to completion,
//! so deeper levels take noticeably longer in open positions:
//!
//! | Difficulty | Depth |
//! |------------|-------|
//! | Easy       | 1 ply |
//! | Medium     | 2 ply |
//! | Hard       | 3 ply |
//! | Expert     | 4 ply |
//!
//! # Integration
//!
//! The command line front end builds a [`ChessAIResource`] from the saved
//! settings and any flags:
//!
//! ```rust,ignore
//! let session = Session::new(ChessAIResource {
//!     mode: GameMode::VsAI { ai_color: Color::Black },
//!     difficulty: AIDifficulty::Medium,
//! });
//! ```

use chess_engine::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// AI configuration for a session
///
/// # Fields
///
/// - `mode`: Current game mode (VsHuman, or VsAI with the AI's color)
/// - `difficulty`: AI strength level, ignored in VsHuman mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChessAIResource {
    /// Current game mode (vs human or vs AI)
    ///
    /// When `VsAI`, the session reports an AI turn whenever `ai_color` is
    /// to move and the game is not over.
    pub mode: GameMode,

    /// AI difficulty setting
    pub difficulty: AIDifficulty,
}

impl Default for ChessAIResource {
    /// AI plays Black at medium difficulty
    fn default() -> Self {
        Self {
            mode: GameMode::VsAI {
                ai_color: Color::Black,
            },
            difficulty: AIDifficulty::Medium,
        }
    }
}

impl ChessAIResource {
    /// Two humans on one terminal
    pub fn vs_human() -> Self {
        Self {
            mode: GameMode::VsHuman,
            difficulty: AIDifficulty::default(),
        }
    }
}

/// Game mode selection
///
/// # Examples
///
/// ```rust,ignore
/// // Human plays White, AI plays Black
/// let mode = GameMode::VsAI { ai_color: Color::Black };
/// assert_eq!(mode.ai_color(), Some(Color::Black));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Both sides are played by humans
    VsHuman,

    /// Human vs AI opponent
    VsAI {
        /// The color the AI plays
        ai_color: Color,
    },
}

impl GameMode {
    /// The color the AI plays, `None` in VsHuman mode
    pub fn ai_color(self) -> Option<Color> {
        match self {
            GameMode::VsHuman => None,
            GameMode::VsAI { ai_color } => Some(ai_color),
        }
    }
}

/// AI difficulty levels, each mapping to a fixed search depth
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum AIDifficulty {
    /// One ply: grabs material, blind to recaptures
    Easy,

    /// Two plies: sees the immediate reply
    #[default]
    Medium,

    /// Three plies
    Hard,

    /// Four plies, slowest
    Expert,
}

impl AIDifficulty {
    /// Search depth in plies
    ///
    /// # Returns
    ///
    /// - Easy: 1
    /// - Medium: 2
    /// - Hard: 3
    /// - Expert: 4
    pub fn depth(self) -> u32 {
        match self {
            AIDifficulty::Easy => 1,
            AIDifficulty::Medium => 2,
            AIDifficulty::Hard => 3,
            AIDifficulty::Expert => 4,
        }
    }

    /// Short human-readable label
    pub fn description(self) -> &'static str {
        match self {
            AIDifficulty::Easy => "Easy (depth 1)",
            AIDifficulty::Medium => "Medium (depth 2)",
            AIDifficulty::Hard => "Hard (depth 3)",
            AIDifficulty::Expert => "Expert (depth 4)",
        }
    }
}

impl fmt::Display for AIDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chess_ai_resource_default() {
        //! Verifies ChessAIResource defaults to VsAI mode with Black AI
        let ai_config = ChessAIResource::default();
        assert_eq!(ai_config.mode.ai_color(), Some(Color::Black));
        assert_eq!(ai_config.difficulty, AIDifficulty::Medium);
    }

    #[test]
    fn test_vs_human_has_no_ai_color() {
        //! Hot-seat games never hand a turn to the AI
        assert_eq!(ChessAIResource::vs_human().mode.ai_color(), None);
    }

    #[test]
    fn test_difficulty_depths() {
        //! Each level searches one ply deeper than the last
        assert_eq!(AIDifficulty::Easy.depth(), 1);
        assert_eq!(AIDifficulty::Medium.depth(), 2);
        assert_eq!(AIDifficulty::Hard.depth(), 3);
        assert_eq!(AIDifficulty::Expert.depth(), 4);
    }

    #[test]
    fn test_difficulty_serializes_lowercase() {
        //! Settings files store difficulty as a plain lowercase word
        let json = serde_json::to_string(&AIDifficulty::Expert).unwrap();
        assert_eq!(json, "\"expert\"");
        let parsed: AIDifficulty = serde_json::from_str("\"easy\"").unwrap();
        assert_eq!(parsed, AIDifficulty::Easy);
    }
}
