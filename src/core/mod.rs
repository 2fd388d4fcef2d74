//! Core module - application infrastructure
//!
//! # Module Organization
//!
//! - `resources` - [`GameSettings`] user preferences
//! - `settings_persistence` - Load/save settings as JSON in the config dir
//! - `error` - [`CoreError`] for settings I/O

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::{GameSettings, PlayMode, DEFAULT_AI_DELAY_MS};
pub use settings_persistence::{get_settings_path, load_settings, save_settings};
