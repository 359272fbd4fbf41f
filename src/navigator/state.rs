//! Navigation state: current path, breadcrumb trail and the data resolved for
//! the visible branch.

use crate::catalog::{CatalogPath, Node, RootCatalog};
use indexmap::IndexMap;
use serde::Serialize;

/// One breadcrumb per path segment
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    pub path: String,
}

/// Mutable navigator state.
///
/// Only data for the currently visible branch is kept; moving to another
/// cluster or category discards what was loaded for the old one.
#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    /// Bumped by every navigation; results from older generations are dropped.
    pub(crate) generation: u64,
    pub current_path: CatalogPath,
    pub breadcrumbs: Vec<Breadcrumb>,
    pub cluster_key: Option<String>,
    pub current_cluster: Option<Node>,
    pub category_key: Option<String>,
    pub current_category: Option<Node>,
    pub selected_leaf: Option<Node>,
    /// Sibling subcategory documents fetched for card previews
    pub previews: IndexMap<String, Node>,
    pub loading: bool,
    pub error: Option<String>,
}

impl NavigationState {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Back to the root view, keeping the generation counter.
    pub(crate) fn reset(&mut self) {
        *self = NavigationState {
            generation: self.generation,
            ..NavigationState::default()
        };
    }

    /// Start navigating to `path`: drop data from other branches, derive
    /// breadcrumbs from what is already resolved and mark loading.
    pub(crate) fn enter(&mut self, path: &CatalogPath, root: &RootCatalog) {
        if self.cluster_key.as_deref() != path.cluster() {
            self.cluster_key = None;
            self.current_cluster = None;
            self.category_key = None;
            self.current_category = None;
        }
        if path.depth() < 2 || self.category_key.as_deref() != path.category() {
            self.category_key = None;
            self.current_category = None;
        }
        self.previews.clear();
        self.current_path = path.clone();
        self.relabel(root);
        self.loading = true;
    }

    pub(crate) fn commit_cluster(&mut self, key: &str, node: Node, root: &RootCatalog) {
        self.cluster_key = Some(key.to_string());
        self.current_cluster = Some(node);
        self.category_key = None;
        self.current_category = None;
        self.relabel(root);
    }

    pub(crate) fn commit_category(&mut self, key: &str, node: Node, root: &RootCatalog) {
        self.category_key = Some(key.to_string());
        self.current_category = Some(node);
        self.relabel(root);
    }

    pub(crate) fn commit_leaf(&mut self, node: Node, root: &RootCatalog) {
        self.selected_leaf = Some(node);
        self.relabel(root);
    }

    /// Rebuild breadcrumb labels from resolved data, falling back to the raw
    /// segment where the parent has not loaded yet.
    pub(crate) fn relabel(&mut self, root: &RootCatalog) {
        let breadcrumbs: Vec<Breadcrumb> = self
            .current_path
            .segments()
            .iter()
            .enumerate()
            .map(|(index, segment)| Breadcrumb {
                label: self.label_for(index, segment, root),
                path: self.current_path.crumb_path(index),
            })
            .collect();
        self.breadcrumbs = breadcrumbs;
    }

    fn label_for(&self, index: usize, segment: &str, root: &RootCatalog) -> String {
        let resolved = match index {
            0 => root.label(segment).or_else(|| {
                self.current_cluster
                    .as_ref()
                    .filter(|_| self.cluster_key.as_deref() == Some(segment))
                    .map(|cluster| cluster.name.as_str())
            }),
            1 => self
                .current_cluster
                .as_ref()
                .and_then(|cluster| cluster.entry_name(segment))
                .or_else(|| {
                    self.current_category
                        .as_ref()
                        .filter(|_| self.category_key.as_deref() == Some(segment))
                        .map(|category| category.name.as_str())
                }),
            2 => self
                .current_category
                .as_ref()
                .and_then(|category| category.entry_name(segment))
                .or_else(|| self.selected_leaf.as_ref().map(|leaf| leaf.name.as_str())),
            _ => None,
        };
        resolved.unwrap_or(segment).to_string()
    }
}
