//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CatalogError;

/// Map domain errors to a string for CLI output.
pub fn map_error(e: &CatalogError) -> String {
    match e {
        CatalogError::NavigationError(nav) => nav.to_string(),
        other => format!("Error: {}", other),
    }
}
