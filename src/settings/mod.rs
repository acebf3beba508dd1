//! Persisted settings
//!
//! One toggle: whether explosive apparel is allowed to show up on
//! dynamically generated hostiles. Saved as JSON in the platform data
//! directory; writing the setting immediately re-runs the tag registry so
//! encounter generation sees the change.

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::data::templates::ItemTemplates;
use crate::explosives::registry::DangerousTagRegistry;

/// Errors from settings persistence
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to write settings: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// User-facing configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Allow explosive apparel on dynamically generated hostiles
    #[serde(default)]
    pub spawn_with_raids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            spawn_with_raids: false,
        }
    }
}

impl Settings {
    /// Persist the settings
    pub fn save(&self) -> Result<(), SettingsError> {
        let path = settings_path();
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let data = serde_json::to_string_pretty(self)?;
        fs::write(&path, data)?;
        log::info!("Settings saved to {:?}", path);
        Ok(())
    }

    /// Persist the settings, then immediately react to the change by
    /// re-running the tag registry over the item templates.
    pub fn write_through(
        &self,
        registry: &DangerousTagRegistry,
        templates: &mut ItemTemplates,
    ) -> Result<(), SettingsError> {
        self.save()?;
        registry.apply_setting(self.spawn_with_raids, templates);
        Ok(())
    }
}

/// Get the settings file path
fn settings_path() -> PathBuf {
    use directories::ProjectDirs;

    if let Some(proj_dirs) = ProjectDirs::from("com", "cindervest", "Cindervest") {
        let mut path = proj_dirs.data_local_dir().to_path_buf();
        path.push("settings.json");
        path
    } else {
        PathBuf::from("./settings.json")
    }
}

/// Load the settings (or create defaults)
pub fn load_settings() -> Settings {
    let path = settings_path();

    if path.exists() {
        match fs::read_to_string(&path) {
            Ok(data) => match serde_json::from_str(&data) {
                Ok(settings) => {
                    log::info!("Settings loaded from {:?}", path);
                    return settings;
                }
                Err(e) => {
                    log::warn!("Failed to parse settings: {}, using defaults", e);
                }
            },
            Err(e) => {
                log::warn!("Failed to read settings: {}, using defaults", e);
            }
        }
    }

    Settings::default()
}
