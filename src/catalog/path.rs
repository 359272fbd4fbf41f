//! Catalog path normalization and navigation levels

use std::fmt;
use unicode_normalization::UnicodeNormalization;

/// Deepest navigable level: cluster / category / subcategory
pub const MAX_DEPTH: usize = 3;

/// Normalize a slash path into its canonical form
///
/// This function:
/// 1. Normalizes Unicode to NFC
/// 2. Drops empty segments (repeated, leading and trailing slashes)
/// 3. Rejoins with single slashes, always with a leading and trailing slash
///
/// The root is `/` and a single segment becomes `/a/`.
pub fn normalize_path(path: &str) -> String {
    let segments = path_segments(path);
    if segments.is_empty() {
        return "/".to_string();
    }
    format!("/{}/", segments.join("/"))
}

/// Split a path into its non-empty, NFC-normalized segments
pub fn path_segments(path: &str) -> Vec<String> {
    let normalized: String = path.nfc().collect();
    normalized
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

/// Navigation level implied by a path's segment count
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Root,
    Cluster,
    Category,
    Subcategory,
}

impl Level {
    pub fn from_depth(depth: usize) -> Option<Level> {
        match depth {
            0 => Some(Level::Root),
            1 => Some(Level::Cluster),
            2 => Some(Level::Category),
            3 => Some(Level::Subcategory),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Level::Root => "root",
            Level::Cluster => "cluster",
            Level::Category => "category",
            Level::Subcategory => "subcategory",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A normalized absolute catalog path
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CatalogPath {
    segments: Vec<String>,
}

impl CatalogPath {
    pub fn root() -> Self {
        Self::default()
    }

    /// Parse any slash path; relative and absolute spellings parse identically.
    pub fn parse(path: &str) -> Self {
        Self {
            segments: path_segments(path),
        }
    }

    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            segments: segments
                .into_iter()
                .flat_map(|s| path_segments(s.as_ref()))
                .collect(),
        }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn depth(&self) -> usize {
        self.segments.len()
    }

    pub fn level(&self) -> Option<Level> {
        Level::from_depth(self.depth())
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn cluster(&self) -> Option<&str> {
        self.segments.first().map(String::as_str)
    }

    pub fn category(&self) -> Option<&str> {
        self.segments.get(1).map(String::as_str)
    }

    pub fn subcategory(&self) -> Option<&str> {
        self.segments.get(2).map(String::as_str)
    }

    /// True when any segment is `.` or `..`; such paths never name a document.
    pub fn has_dot_segments(&self) -> bool {
        self.segments.iter().any(|s| s == "." || s == "..")
    }

    /// Append one or more segments taken from `relative`.
    pub fn join(&self, relative: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.extend(path_segments(relative));
        Self { segments }
    }

    pub fn child(&self, key: &str) -> Self {
        self.join(key)
    }

    /// Parent path; the root is its own parent.
    pub fn parent(&self) -> Self {
        let mut segments = self.segments.clone();
        segments.pop();
        Self { segments }
    }

    /// Path of the breadcrumb for segment `index`: `/seg0/.../segN` without
    /// a trailing slash.
    pub fn crumb_path(&self, index: usize) -> String {
        let end = (index + 1).min(self.segments.len());
        format!("/{}", self.segments[..end].join("/"))
    }
}

impl fmt::Display for CatalogPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            write!(f, "/")
        } else {
            write!(f, "/{}/", self.segments.join("/"))
        }
    }
}
