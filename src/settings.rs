//! User settings persistence.
//!
//! Display preferences (last page, time window, phase toggles, axis ranges,
//! timestamp format) are stored as JSON under the platform config directory
//! and restored on the next launch. The dataset itself is never persisted;
//! it is regenerated per session.

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::{DisplaySelection, Page};

/// User settings that persist across sessions
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct UserSettings {
    /// Settings file version for migration support
    #[serde(default = "default_version")]
    pub version: u32,
    /// Last selected page
    #[serde(default)]
    pub page: Page,
    /// Last display selection (window, phases, axes, format)
    #[serde(default)]
    pub selection: DisplaySelection,
}

fn default_version() -> u32 {
    1
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            version: 1,
            page: Page::default(),
            selection: DisplaySelection::default(),
        }
    }
}

impl UserSettings {
    /// Get the config directory path for PowerScope
    pub fn get_config_dir() -> Option<PathBuf> {
        #[cfg(target_os = "macos")]
        {
            dirs::data_dir().map(|p| p.join("PowerScope"))
        }
        #[cfg(target_os = "windows")]
        {
            dirs::config_dir().map(|p| p.join("PowerScope"))
        }
        #[cfg(not(any(target_os = "macos", target_os = "windows")))]
        {
            dirs::config_dir().map(|p| p.join("powerscope"))
        }
    }

    /// Get the path to the settings JSON file
    pub fn get_settings_path() -> Option<PathBuf> {
        Self::get_config_dir().map(|p| p.join("settings.json"))
    }

    /// Load settings from disk, falling back to defaults on any failure
    pub fn load() -> Self {
        let path = match Self::get_settings_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> anyhow::Result<()> {
        let path =
            Self::get_settings_path().context("could not determine config directory")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("failed to create config directory {}", parent.display())
            })?;
        }

        let content =
            serde_json::to_string_pretty(self).context("failed to serialize settings")?;

        std::fs::write(&path, content)
            .with_context(|| format!("failed to write settings file {}", path.display()))?;

        Ok(())
    }
}
