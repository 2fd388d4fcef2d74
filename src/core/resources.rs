//! User preferences

use std::time::Duration;

use chess_engine::Color;
use serde::{Deserialize, Serialize};

use crate::game::ai::{AIDifficulty, ChessAIResource, GameMode};

/// Default pause before the AI replies, in milliseconds
pub const DEFAULT_AI_DELAY_MS: u64 = 500;

/// Who plays the second side
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Two humans at one terminal
    Pvp,
    /// Human against the computer
    #[default]
    Ai,
}

/// Persisted user preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Opponent type
    pub mode: PlayMode,

    /// Search depth preset for the AI
    pub difficulty: AIDifficulty,

    /// Color the AI plays in [`PlayMode::Ai`]
    pub ai_color: Color,

    /// Pause before each AI move so replies don't appear instantly
    pub ai_delay_ms: u64,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            mode: PlayMode::Ai,
            difficulty: AIDifficulty::Medium,
            ai_color: Color::Black,
            ai_delay_ms: DEFAULT_AI_DELAY_MS,
        }
    }
}

impl GameSettings {
    /// Session AI configuration for these settings
    pub fn ai_config(&self) -> ChessAIResource {
        let mode = match self.mode {
            PlayMode::Pvp => GameMode::VsHuman,
            PlayMode::Ai => GameMode::VsAI {
                ai_color: self.ai_color,
            },
        };

        ChessAIResource {
            mode,
            difficulty: self.difficulty,
        }
    }

    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        //! Defaults: AI plays Black at medium with a half-second delay
        let settings = GameSettings::default();
        assert_eq!(settings.ai_config(), ChessAIResource::default());
        assert_eq!(settings.ai_delay(), Duration::from_millis(500));
    }

    #[test]
    fn test_pvp_mode_has_no_ai() {
        //! PvP ignores the AI color
        let settings = GameSettings {
            mode: PlayMode::Pvp,
            ..GameSettings::default()
        };
        assert_eq!(settings.ai_config().mode, GameMode::VsHuman);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        //! Older settings files with fewer keys still load
        let settings: GameSettings = serde_json::from_str(r#"{"difficulty":"hard"}"#).unwrap();
        assert_eq!(settings.difficulty, AIDifficulty::Hard);
        assert_eq!(settings.ai_delay_ms, DEFAULT_AI_DELAY_MS);
        assert_eq!(settings.mode, PlayMode::Ai);
    }
}
