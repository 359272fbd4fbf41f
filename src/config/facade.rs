//! ConfigLoader facade delegating to the merge service.

use super::merge::service::MergeService;
use super::CatalogConfig;
use config::ConfigError;
use std::path::Path;

/// Configuration loader facade.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration for a catalog directory from all standard sources.
    pub fn load(catalog_root: &Path) -> Result<CatalogConfig, ConfigError> {
        MergeService::load(catalog_root)
    }

    /// Load configuration from a specific file with the environment on top.
    pub fn load_from_file(path: &Path) -> Result<CatalogConfig, ConfigError> {
        MergeService::load_from_file(path)
    }

    pub fn default() -> CatalogConfig {
        CatalogConfig::default()
    }
}
