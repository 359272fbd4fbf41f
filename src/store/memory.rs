//! In-memory document store for embedded catalogs and tests

use super::DocumentStore;
use crate::catalog::{Node, ResourceKey};
use crate::error::StorageError;
use async_trait::async_trait;
use parking_lot::RwLock;
use serde_json::Value;
use std::collections::HashMap;

/// Raw JSON documents keyed by resource key.
///
/// Documents are decoded on every fetch, so a malformed document surfaces
/// exactly as it would from disk.
#[derive(Default)]
pub struct MemoryDocumentStore {
    documents: RwLock<HashMap<String, Value>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&self, key: &ResourceKey, document: Value) {
        self.documents.write().insert(key.to_string(), document);
    }

    pub fn with_document(self, key: &ResourceKey, document: Value) -> Self {
        self.insert(key, document);
        self
    }

    pub fn remove(&self, key: &ResourceKey) -> Option<Value> {
        self.documents.write().remove(key.as_str())
    }

    pub fn len(&self) -> usize {
        self.documents.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.read().is_empty()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn fetch(&self, key: &ResourceKey) -> Result<Node, StorageError> {
        let document = self
            .documents
            .read()
            .get(key.as_str())
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))?;

        Node::from_value(document).map_err(|reason| StorageError::Malformed {
            key: key.to_string(),
            reason,
        })
    }

    fn describe(&self) -> String {
        format!("memory ({} documents)", self.len())
    }
}
