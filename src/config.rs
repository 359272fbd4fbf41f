//! Configuration System
//!
//! Layered configuration for the catalog browser: built-in defaults, the
//! global user file, catalog-local files and `MODIFIERS__*` environment
//! overrides, merged by the `config` crate and validated after loading.

use crate::error::CatalogError;
use crate::logging::LoggingConfig;
use crate::navigator::NavigatorOptions;
use crate::preferences::Theme;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Where documents come from
    #[serde(default)]
    pub source: SourceConfig,

    /// Root cluster keys, loaded once at startup in this order
    #[serde(default = "default_clusters")]
    pub clusters: Vec<String>,

    #[serde(default)]
    pub navigation: NavigationConfig,

    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Document source: a local directory or a static file server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory holding `data/...`; relative paths resolve against the catalog root
    #[serde(default)]
    pub root: Option<PathBuf>,

    /// Base URL serving `data/...` documents
    #[serde(default)]
    pub base_url: Option<String>,

    /// Per-request timeout for the HTTP source
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationConfig {
    /// Prefetch sibling subcategories for card previews
    #[serde(default = "default_true")]
    pub prefetch_previews: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Theme used when no preference has been saved
    #[serde(default)]
    pub system_theme: Theme,

    /// Override for the preferences file location
    #[serde(default)]
    pub preferences_file: Option<PathBuf>,
}

fn default_clusters() -> Vec<String> {
    ["concept", "context", "komposition"]
        .iter()
        .map(|key| key.to_string())
        .collect()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_true() -> bool {
    true
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            root: None,
            base_url: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            prefetch_previews: default_true(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            system_theme: Theme::Light,
            preferences_file: None,
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            source: SourceConfig::default(),
            clusters: default_clusters(),
            navigation: NavigationConfig::default(),
            display: DisplayConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    Source(String),
    Cluster(String, String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Source(msg) => write!(f, "Source: {}", msg),
            ValidationError::Cluster(key, msg) => write!(f, "Cluster '{}': {}", key, msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl SourceConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.root.is_some() && self.base_url.is_some() {
            return Err("Set either root or base_url, not both".to_string());
        }
        if let Some(url) = &self.base_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(format!("base_url must be an http(s) URL: {}", url));
            }
        }
        if self.timeout_secs == 0 {
            return Err("timeout_secs must be greater than zero".to_string());
        }
        Ok(())
    }
}

impl CatalogConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.source.validate() {
            errors.push(ValidationError::Source(e));
        }

        if self.clusters.is_empty() {
            errors.push(ValidationError::Cluster(
                String::new(),
                "At least one root cluster is required".to_string(),
            ));
        }
        for key in &self.clusters {
            if key.is_empty() || key.contains('/') {
                errors.push(ValidationError::Cluster(
                    key.clone(),
                    "Cluster keys must be a single path segment".to_string(),
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, folding all problems into one error
    pub fn validated(self) -> Result<Self, CatalogError> {
        self.validate().map_err(|errors| {
            let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
            CatalogError::ConfigError(format!(
                "Configuration validation failed:\n{}",
                messages.join("\n")
            ))
        })?;
        Ok(self)
    }

    pub fn navigator_options(&self) -> NavigatorOptions {
        NavigatorOptions {
            prefetch_previews: self.navigation.prefetch_previews,
        }
    }
}
