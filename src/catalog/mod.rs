//! Modifier Catalog
//!
//! The four-level taxonomy (cluster → category → subcategory → modifier group)
//! as typed nodes, plus the path and resource-key conventions used to locate
//! each level's document.

pub mod key;
pub mod node;
pub mod path;

pub use key::ResourceKey;
pub use node::{Children, Items, LeafContent, Metadata, Node, NodeKind};
pub use path::{normalize_path, path_segments, CatalogPath, Level, MAX_DEPTH};

use crate::error::StorageError;
use indexmap::IndexMap;

/// Decode a fetched document, tagging failures with the resource key.
pub fn decode_document(key: &ResourceKey, bytes: &[u8]) -> Result<Node, StorageError> {
    Node::from_slice(bytes).map_err(|reason| StorageError::Malformed {
        key: key.to_string(),
        reason,
    })
}

/// The root cluster set, loaded once at startup and read-only afterwards
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RootCatalog {
    clusters: IndexMap<String, Node>,
}

impl RootCatalog {
    pub fn new(clusters: IndexMap<String, Node>) -> Self {
        Self { clusters }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Node> {
        self.clusters.get(key)
    }

    /// Display name of a cluster, if loaded
    pub fn label(&self, key: &str) -> Option<&str> {
        self.clusters.get(key).map(|node| node.name.as_str())
    }

    pub fn clusters(&self) -> &IndexMap<String, Node> {
        &self.clusters
    }

    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }
}
