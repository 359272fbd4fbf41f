//! Filesystem document store
//!
//! Documents are JSON files laid out by resource key:
//! `{root}/data/{cluster}/{cluster}.json`,
//! `{root}/data/{cluster}/{category}/{category}.json` and so on.

use super::DocumentStore;
use crate::catalog::{decode_document, Node, ResourceKey};
use crate::error::StorageError;
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct FsDocumentStore {
    root: PathBuf,
}

impl FsDocumentStore {
    /// Create a store rooted at an existing directory
    pub fn new<P: AsRef<Path>>(root: P) -> Result<Self, StorageError> {
        let root = dunce::canonicalize(root.as_ref()).map_err(|e| {
            StorageError::IoError(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to open catalog root {:?}: {}",
                    root.as_ref(),
                    e
                ),
            ))
        })?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a resource key
    pub fn document_path(&self, key: &ResourceKey) -> PathBuf {
        let mut path = self.root.clone();
        let mut segments = key.as_str().split('/').peekable();
        while let Some(segment) = segments.next() {
            if segments.peek().is_some() {
                path.push(segment);
            } else {
                path.push(format!("{segment}.json"));
            }
        }
        path
    }
}

#[async_trait]
impl DocumentStore for FsDocumentStore {
    async fn fetch(&self, key: &ResourceKey) -> Result<Node, StorageError> {
        let path = self.document_path(key);
        debug!(key = %key, path = %path.display(), "Reading catalog document");

        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StorageError::NotFound(key.to_string()))
            }
            Err(e) => return Err(StorageError::IoError(e)),
        };

        decode_document(key, &bytes)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.root.display())
    }
}
