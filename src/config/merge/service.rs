//! MergeService: orchestrates sources, applies merge policy, deserializes to CatalogConfig.

use crate::config::sources::{catalog_file, environment, global_file};
use crate::config::CatalogConfig;
use config::{ConfigError, File};
use std::path::Path;
use tracing::debug;

use super::merge_policy;

/// Merge service for config composition.
pub struct MergeService;

impl MergeService {
    /// Load config from the catalog directory and standard sources.
    /// Precedence: global file (lowest) -> catalog base -> catalog env -> environment (highest).
    pub fn load(catalog_root: &Path) -> Result<CatalogConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = catalog_file::add_to_builder(builder, catalog_root)?;
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        debug!(catalog_root = %catalog_root.display(), "Loaded layered configuration");
        config.try_deserialize()
    }

    /// Load config from a specific file with environment overlay.
    pub fn load_from_file(path: &Path) -> Result<CatalogConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = builder.add_source(File::from(path));
        let builder = environment::add_to_builder(builder)?;

        let config = builder.build()?;
        debug!(path = %path.display(), "Loaded configuration file");
        config.try_deserialize()
    }
}
