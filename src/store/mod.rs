//! Document Store
//!
//! Read-only access to the static, pre-generated catalog documents. The
//! navigator only ever asks for a document by its [`ResourceKey`].

pub mod fs;
pub mod http;
pub mod memory;

pub use fs::FsDocumentStore;
pub use http::HttpDocumentStore;
pub use memory::MemoryDocumentStore;

use crate::catalog::{Node, ResourceKey};
use crate::config::SourceConfig;
use crate::error::{CatalogError, StorageError};
use async_trait::async_trait;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Document store interface
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Fetch and decode the document stored under `key`
    async fn fetch(&self, key: &ResourceKey) -> Result<Node, StorageError>;

    /// Human-readable description of where documents come from
    fn describe(&self) -> String;
}

/// Build the store selected by configuration.
///
/// A base URL selects HTTP; otherwise documents are read from the configured
/// root, falling back to `catalog_root`.
pub fn open_store(
    source: &SourceConfig,
    catalog_root: &Path,
) -> Result<Arc<dyn DocumentStore>, CatalogError> {
    if let Some(base_url) = &source.base_url {
        let store = HttpDocumentStore::new(base_url, Duration::from_secs(source.timeout_secs))?;
        return Ok(Arc::new(store));
    }

    let root = match &source.root {
        Some(root) if root.is_absolute() => root.clone(),
        Some(root) => catalog_root.join(root),
        None => catalog_root.to_path_buf(),
    };
    Ok(Arc::new(FsDocumentStore::new(&root)?))
}
