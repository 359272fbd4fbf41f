//! Resource key convention.
//!
//! Every level's document lives at a fixed key derived from its path segments:
//! `data/C/C`, `data/C/G/G` and `data/C/G/S/S`. Stores decide the extension
//! and transport.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceKey(String);

impl ResourceKey {
    pub fn cluster(cluster: &str) -> Self {
        Self(format!("data/{cluster}/{cluster}"))
    }

    pub fn category(cluster: &str, category: &str) -> Self {
        Self(format!("data/{cluster}/{category}/{category}"))
    }

    pub fn subcategory(cluster: &str, category: &str, subcategory: &str) -> Self {
        Self(format!(
            "data/{cluster}/{category}/{subcategory}/{subcategory}"
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
