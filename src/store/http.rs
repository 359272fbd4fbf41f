//! HTTP document store
//!
//! Fetches `{base_url}/{key}.json` from a static file server, the way the
//! catalog is served next to a web front end.

use super::DocumentStore;
use crate::catalog::{decode_document, Node, ResourceKey};
use crate::error::{CatalogError, StorageError};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

const CATALOG_HTTP_CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct HttpDocumentStore {
    client: Client,
    base_url: String,
}

fn map_http_error(key: &ResourceKey, error: reqwest::Error) -> StorageError {
    let reason = if error.is_timeout() {
        format!("Request timeout: {}", error)
    } else if error.is_connect() {
        format!("Connection error: {}", error)
    } else {
        format!("HTTP error: {}", error)
    };
    StorageError::Transport {
        key: key.to_string(),
        reason,
    }
}

impl HttpDocumentStore {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .connect_timeout(CATALOG_HTTP_CONNECT_TIMEOUT)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::ConfigError(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// URL backing a resource key
    pub fn document_url(&self, key: &ResourceKey) -> String {
        format!("{}/{}.json", self.base_url, key)
    }
}

#[async_trait]
impl DocumentStore for HttpDocumentStore {
    async fn fetch(&self, key: &ResourceKey) -> Result<Node, StorageError> {
        let url = self.document_url(key);
        debug!(key = %key, url = %url, "Requesting catalog document");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| map_http_error(key, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(StorageError::NotFound(key.to_string()));
        }
        if !status.is_success() {
            return Err(StorageError::Transport {
                key: key.to_string(),
                reason: format!("Request failed with status {}", status),
            });
        }

        let body = response.bytes().await.map_err(|e| map_http_error(key, e))?;
        decode_document(key, &body)
    }

    fn describe(&self) -> String {
        format!("server {}", self.base_url)
    }
}
