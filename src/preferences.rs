//! Display Preferences
//!
//! The light/dark theme is read once at startup and handed to the renderer.
//! Changing it goes through an explicit [`PreferenceStore`].

use crate::error::CatalogError;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(CatalogError::PreferenceError(format!(
                "Unknown theme '{}' (expected 'light' or 'dark')",
                other
            ))),
        }
    }
}

/// Persisted display preferences
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayPreferences {
    pub theme: Theme,
}

impl DisplayPreferences {
    /// Resolve the startup value: a stored preference wins over the system theme.
    pub fn read_once(
        store: &dyn PreferenceStore,
        system_theme: Theme,
    ) -> Result<DisplayPreferences, CatalogError> {
        let preferences = store.load()?.unwrap_or(DisplayPreferences {
            theme: system_theme,
        });
        debug!(theme = %preferences.theme, "Resolved display preferences");
        Ok(preferences)
    }

    pub fn toggled(self) -> DisplayPreferences {
        DisplayPreferences {
            theme: self.theme.toggled(),
        }
    }
}

/// Explicit setter for display preferences
pub trait PreferenceStore: Send + Sync {
    /// Stored preferences, or `None` if nothing was ever saved.
    fn load(&self) -> Result<Option<DisplayPreferences>, CatalogError>;

    fn save(&self, preferences: &DisplayPreferences) -> Result<(), CatalogError>;
}

/// TOML file under the platform config directory
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `preferences.toml` in the platform config directory
    pub fn default_location() -> Result<Self, CatalogError> {
        let dirs = directories::ProjectDirs::from("", "", "modifiers").ok_or_else(|| {
            CatalogError::PreferenceError("Could not determine platform config directory".to_string())
        })?;
        Ok(Self::new(dirs.config_dir().join("preferences.toml")))
    }

    /// Configured path if given, else the default location
    pub fn open(configured: Option<&Path>) -> Result<Self, CatalogError> {
        match configured {
            Some(path) => Ok(Self::new(path)),
            None => Self::default_location(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn load(&self) -> Result<Option<DisplayPreferences>, CatalogError> {
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(CatalogError::PreferenceError(format!(
                    "Failed to read {}: {}",
                    self.path.display(),
                    e
                )))
            }
        };
        toml::from_str(&contents).map(Some).map_err(|e| {
            CatalogError::PreferenceError(format!("Failed to parse {}: {}", self.path.display(), e))
        })
    }

    fn save(&self, preferences: &DisplayPreferences) -> Result<(), CatalogError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CatalogError::PreferenceError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        let contents = toml::to_string(preferences)
            .map_err(|e| CatalogError::PreferenceError(format!("Failed to serialize: {}", e)))?;
        std::fs::write(&self.path, contents).map_err(|e| {
            CatalogError::PreferenceError(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        debug!(path = %self.path.display(), theme = %preferences.theme, "Saved display preferences");
        Ok(())
    }
}

/// Process-local store
#[derive(Default)]
pub struct MemoryPreferenceStore {
    stored: Mutex<Option<DisplayPreferences>>,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_theme(theme: Theme) -> Self {
        Self {
            stored: Mutex::new(Some(DisplayPreferences { theme })),
        }
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn load(&self) -> Result<Option<DisplayPreferences>, CatalogError> {
        Ok(*self.stored.lock())
    }

    fn save(&self, preferences: &DisplayPreferences) -> Result<(), CatalogError> {
        *self.stored.lock() = Some(*preferences);
        Ok(())
    }
}
