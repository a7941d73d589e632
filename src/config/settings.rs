use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::client::SearchRequest;
use crate::constants::{APP_DIR, DEFAULT_ORDER_CLAUSE, SETTINGS_FILE};
use crate::error::DashboardResult;
use crate::formatting::theme::ThemeMode;

/// User settings persisted between sessions.
///
/// Every field has a default so a stored record from an older build is merged
/// over the current defaults on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub domain: String,
    pub email: String,
    pub token: String,
    pub assignees: String,
    pub jql: String,
    pub bg_image: String,
    pub theme: ThemeMode,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            domain: String::new(),
            email: String::new(),
            token: String::new(),
            assignees: String::new(),
            jql: DEFAULT_ORDER_CLAUSE.to_string(),
            bg_image: String::new(),
            theme: ThemeMode::Dark,
        }
    }
}

impl Settings {
    pub fn has_credentials(&self) -> bool {
        SearchRequest::from_settings(self).has_credentials()
    }

    /// True when the fields that select the data source differ.
    pub fn credentials_differ(&self, other: &Settings) -> bool {
        self.domain != other.domain || self.email != other.email || self.token != other.token
    }
}

/// JSON file backing for [`Settings`].
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<config dir>/ticketscope/settings.json`.
    pub fn default_location() -> Self {
        let base = dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join(APP_DIR).join(SETTINGS_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Settings {
        if !self.path.exists() {
            return Settings::default();
        }

        match fs::read_to_string(&self.path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                tracing::warn!("Ignoring unreadable settings at {}: {}", self.path.display(), e);
                Settings::default()
            }),
            Err(e) => {
                tracing::warn!("Failed to read settings at {}: {}", self.path.display(), e);
                Settings::default()
            }
        }
    }

    pub fn save(&self, settings: &Settings) -> DashboardResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(settings)?;
        fs::write(&self.path, raw)?;
        tracing::debug!("Settings written to {}", self.path.display());
        Ok(())
    }
}
