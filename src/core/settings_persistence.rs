//! Settings persistence
//!
//! Saves and loads [`GameSettings`] to/from a JSON file so preferences carry
//! over between runs.
//!
//! # File Location
//!
//! Settings are stored in `settings.json` in the platform configuration
//! directory, falling back to the working directory when none can be found.
//!
//! # Error Handling
//!
//! - [`load_settings`] never fails: a missing or invalid file falls back to
//!   defaults with a warning
//! - [`save_settings`] reports failures to the caller

use crate::core::error::CoreResult;
use crate::core::GameSettings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the settings file path
///
/// E.g. `~/.config/chessmate/settings.json` on Linux.
pub fn get_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chessmate") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Read and parse settings from `path`
pub fn load_settings_from(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&contents)?)
}

/// Write `settings` to `path` as pretty JSON, creating parent directories
pub fn save_settings_to(path: &Path, settings: &GameSettings) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load settings from the default location, or defaults if that fails
pub fn load_settings() -> GameSettings {
    let settings_path = get_settings_path();

    if !settings_path.exists() {
        info!(
            "[SETTINGS] No settings file found at {:?}. Using defaults.",
            settings_path
        );
        return GameSettings::default();
    }

    match load_settings_from(&settings_path) {
        Ok(settings) => {
            info!("[SETTINGS] Loaded settings from {:?}", settings_path);
            settings
        }
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                settings_path, e
            );
            GameSettings::default()
        }
    }
}

/// Save settings to the default location
///
/// # Returns
///
/// The path written.
pub fn save_settings(settings: &GameSettings) -> CoreResult<PathBuf> {
    let settings_path = get_settings_path();
    save_settings_to(&settings_path, settings)?;
    info!("[SETTINGS] Saved settings to {:?}", settings_path);
    Ok(settings_path)
}
