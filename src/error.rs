//! Error types for the modifier catalog browser.

use thiserror::Error;

/// Document store errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Malformed document {key}: {reason}")]
    Malformed { key: String, reason: String },

    #[error("Document transport failed for {key}: {reason}")]
    Transport { key: String, reason: String },

    #[error("Storage I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl StorageError {
    /// Short tag used in log fields to tell missing documents from broken ones.
    pub fn kind(&self) -> &'static str {
        match self {
            StorageError::NotFound(_) => "not_found",
            StorageError::Malformed { .. } => "malformed",
            StorageError::Transport { .. } => "transport",
            StorageError::IoError(_) => "io",
        }
    }
}

/// Navigation errors surfaced to the user as a single message.
///
/// Each load failure carries the path segment whose document could not be
/// resolved. Missing and malformed documents are not distinguished here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("Failed to load cluster data: {0}")]
    ClusterLoadFailure(String),

    #[error("Failed to load category data: {0}")]
    CategoryLoadFailure(String),

    #[error("Failed to load subcategory data: {0}")]
    SubcategoryLoadFailure(String),

    #[error("Invalid catalog path: {0}")]
    InvalidPath(String),
}

/// Top-level errors for configuration, preferences and the CLI host
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(#[from] StorageError),

    #[error("{0}")]
    NavigationError(#[from] NavigationError),

    #[error("Preference error: {0}")]
    PreferenceError(String),

    #[error("Render error: {0}")]
    RenderError(String),
}

impl From<config::ConfigError> for CatalogError {
    fn from(err: config::ConfigError) -> Self {
        CatalogError::ConfigError(err.to_string())
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        CatalogError::RenderError(err.to_string())
    }
}
