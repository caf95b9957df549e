//! Settings file location
//!
//! Resolves the per-user settings file and loads it, falling back to
//! defaults when nothing has been saved yet.

use crate::config::FenceSettings;
use crate::error::{SettingsError, SettingsResult};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

const APP_DIR: &str = "paalkraal";
const SETTINGS_FILE: &str = "settings.toml";

/// Locates, loads, and stores [`FenceSettings`].
pub struct SettingsManager;

impl SettingsManager {
    /// Platform config directory for PaalKraalForge.
    pub fn config_dir() -> SettingsResult<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| {
                SettingsError::ConfigDirectory("no config directory on this platform".to_string())
            })
    }

    /// Path of the default settings file.
    pub fn config_file_path() -> SettingsResult<PathBuf> {
        Ok(Self::config_dir()?.join(SETTINGS_FILE))
    }

    /// Create the config directory if it does not exist.
    pub fn ensure_config_dir() -> SettingsResult<PathBuf> {
        let dir = Self::config_dir()?;
        std::fs::create_dir_all(&dir)
            .map_err(|e| SettingsError::ConfigDirectory(format!("{}: {}", dir.display(), e)))?;
        Ok(dir)
    }

    /// Load settings from `path`, or defaults if the file does not exist.
    ///
    /// A file that exists but fails to parse or validate is an error.
    pub fn load_or_default(path: &Path) -> SettingsResult<FenceSettings> {
        if !path.exists() {
            info!(
                "No settings file at {}, using defaults",
                path.display()
            );
            return Ok(FenceSettings::default());
        }
        FenceSettings::load_from_file(path).inspect_err(|e| {
            warn!("Could not load settings from {}: {}", path.display(), e);
        })
    }

    /// Load the settings from the default location.
    ///
    /// Platforms without a config directory get the defaults.
    pub fn load() -> SettingsResult<FenceSettings> {
        Self::load_from_location(Self::config_file_path())
    }

    fn load_from_location(path: SettingsResult<PathBuf>) -> SettingsResult<FenceSettings> {
        match path {
            Ok(path) => Self::load_or_default(&path),
            Err(SettingsError::ConfigDirectory(reason)) => {
                warn!("Using default settings: {}", reason);
                Ok(FenceSettings::default())
            }
            Err(e) => Err(e),
        }
    }

    /// Save settings to the default location.
    pub fn save(settings: &FenceSettings) -> SettingsResult<PathBuf> {
        Self::ensure_config_dir()?;
        let path = Self::config_file_path()?;
        settings.save_to_file(&path)?;
        Ok(path)
    }
}
