//! Settings persistence
//!
//! Saves and loads [`Settings`] to/from a JSON file.
//!
//! # File Location
//!
//! Settings are stored as `settings.json` in the user's configuration
//! directory (e.g. `~/.config/chess-rules/settings.json` on Linux), falling
//! back to the working directory when no config directory can be resolved.
//!
//! # Error Handling
//!
//! Loading never fails: a missing or unreadable file logs and yields defaults.
//! Saving reports errors to the caller, who decides whether they matter.

use super::error::CoreResult;
use super::resources::Settings;
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Resolve the default settings file path
pub fn get_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "chess-rules") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        // Fallback to current directory
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Load settings from `path`, falling back to defaults
pub fn load_settings_from(path: &Path) -> Settings {
    if !path.exists() {
        info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        return Settings::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str::<Settings>(&contents) {
            Ok(settings) => {
                info!("[SETTINGS] Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!(
                    "[SETTINGS] Failed to parse settings file at {:?}: {}. Using defaults.",
                    path, e
                );
                Settings::default()
            }
        },
        Err(e) => {
            warn!(
                "[SETTINGS] Failed to read settings file at {:?}: {}. Using defaults.",
                path, e
            );
            Settings::default()
        }
    }
}

/// Load settings from the default location
pub fn load_settings() -> Settings {
    load_settings_from(&get_settings_path())
}

/// Write `settings` to `path` as pretty JSON, creating parent directories
pub fn save_settings_to(settings: &Settings, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;
    info!("[SETTINGS] Saved settings to {:?}", path);
    Ok(())
}

/// Write `settings` to the default location
pub fn save_settings(settings: &Settings) -> CoreResult<()> {
    save_settings_to(settings, &get_settings_path())
}
