//! Navigator
//!
//! Path-driven hierarchical loader. Turns a requested path into the ordered
//! chain of document fetches needed to show it (cluster, then category, then
//! subcategory) and keeps breadcrumbs, loading and error state in step with
//! whatever has resolved so far.
//!
//! Every navigation bumps a generation counter. A fetch that completes after a
//! newer navigation has started is dropped instead of overwriting newer state.

mod prefetch;
pub mod state;
pub mod view;

pub use state::{Breadcrumb, NavigationState};
pub use view::{Card, RenderFrame, View};

use crate::catalog::{
    CatalogPath, Children, Level, Node, NodeKind, ResourceKey, RootCatalog, MAX_DEPTH,
};
use crate::error::{NavigationError, StorageError};
use crate::store::DocumentStore;
use indexmap::IndexMap;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Navigator behavior switches
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigatorOptions {
    /// Fetch sibling subcategory documents for card previews once a category
    /// view has resolved.
    pub prefetch_previews: bool,
}

impl Default for NavigatorOptions {
    fn default() -> Self {
        Self {
            prefetch_previews: true,
        }
    }
}

/// Load the root cluster set, one document at a time, all or nothing.
pub async fn load_root(
    store: &dyn DocumentStore,
    cluster_keys: &[String],
) -> Result<RootCatalog, NavigationError> {
    let mut clusters = IndexMap::new();
    for key in cluster_keys {
        let resource = ResourceKey::cluster(key);
        let node = match fetch_level(store, Level::Cluster, &resource).await {
            Ok(node) => node,
            Err(e) => {
                error!(cluster = %key, kind = e.kind(), "Failed to load root cluster: {}", e);
                return Err(NavigationError::ClusterLoadFailure(key.clone()));
            }
        };
        clusters.insert(key.clone(), node);
    }
    info!(clusters = clusters.len(), "Loaded root catalog");
    Ok(RootCatalog::new(clusters))
}

/// Fetch one level's document and check it has the shape that level needs.
async fn fetch_level(
    store: &dyn DocumentStore,
    level: Level,
    key: &ResourceKey,
) -> Result<Node, StorageError> {
    debug!(level = %level, key = %key, "Fetching document");
    let node = store.fetch(key).await?;
    check_shape(level, key, node)
}

fn check_shape(level: Level, key: &ResourceKey, node: Node) -> Result<Node, StorageError> {
    let fits = match (&level, &node.kind) {
        (Level::Cluster, NodeKind::Container(Children::Categories(_))) => true,
        (Level::Category, NodeKind::Container(Children::Subcategories(_))) => true,
        (Level::Category, NodeKind::Leaf(content)) => !content.modifiers.is_empty(),
        (Level::Subcategory, NodeKind::Leaf(_)) => true,
        _ => false,
    };
    if fits {
        return Ok(node);
    }
    Err(StorageError::Malformed {
        key: key.to_string(),
        reason: format!("'{}' is not a {} document", node.name, level),
    })
}

pub struct Navigator {
    store: Arc<dyn DocumentStore>,
    root: Arc<RootCatalog>,
    options: NavigatorOptions,
    state: RwLock<NavigationState>,
}

impl Navigator {
    pub fn new(store: Arc<dyn DocumentStore>, root: RootCatalog, options: NavigatorOptions) -> Self {
        Self {
            store,
            root: Arc::new(root),
            options,
            state: RwLock::new(NavigationState::default()),
        }
    }

    /// Load the root clusters and build a navigator at the root view.
    ///
    /// A root load failure leaves an empty root and the error in state; the
    /// navigator is still returned so the host can show the message.
    pub async fn start(
        store: Arc<dyn DocumentStore>,
        cluster_keys: &[String],
        options: NavigatorOptions,
    ) -> Self {
        match load_root(store.as_ref(), cluster_keys).await {
            Ok(root) => Self::new(store, root, options),
            Err(e) => {
                let navigator = Self::new(store, RootCatalog::empty(), options);
                navigator.state.write().error = Some(e.to_string());
                navigator
            }
        }
    }

    pub fn root(&self) -> &RootCatalog {
        &self.root
    }

    pub fn options(&self) -> NavigatorOptions {
        self.options
    }

    pub fn store(&self) -> &Arc<dyn DocumentStore> {
        &self.store
    }

    /// Snapshot of the full state
    pub fn state(&self) -> NavigationState {
        self.state.read().clone()
    }

    pub fn current_path(&self) -> CatalogPath {
        self.state.read().current_path.clone()
    }

    pub fn breadcrumbs(&self) -> Vec<Breadcrumb> {
        self.state.read().breadcrumbs.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.read().loading
    }

    pub fn error(&self) -> Option<String> {
        self.state.read().error.clone()
    }

    pub fn selected_leaf(&self) -> Option<Node> {
        self.state.read().selected_leaf.clone()
    }

    /// Navigate to `target`.
    ///
    /// A target starting with `/` is absolute; anything else is appended to
    /// the current path. `/` resets to the root view. Levels already resolved
    /// for the same branch are reused; the rest are fetched in order, each
    /// only after its parent has resolved. A subcategory whose content is
    /// already inline in its category is shown without a fetch.
    ///
    /// Paths deeper than three levels or containing `.`/`..` segments are
    /// rejected as invalid.
    ///
    /// Returns the load error for this call, if any. A call overtaken by a
    /// newer navigation returns `Ok` without touching state.
    pub async fn navigate(&self, target: &str) -> Result<(), NavigationError> {
        let (generation, path, cached_cluster, cached_category) = {
            let mut state = self.state.write();
            state.generation += 1;
            state.selected_leaf = None;
            state.error = None;

            let path = if target.starts_with('/') {
                CatalogPath::parse(target)
            } else {
                state.current_path.join(target)
            };

            if path.depth() > MAX_DEPTH || path.has_dot_segments() {
                let error = NavigationError::InvalidPath(path.to_string());
                warn!(requested = target, depth = path.depth(), "Rejected navigation target");
                state.error = Some(error.to_string());
                state.loading = false;
                return Err(error);
            }

            if path.is_root() {
                state.reset();
                debug!(generation = state.generation, "Navigated to root");
                return Ok(());
            }

            state.enter(&path, &self.root);
            (
                state.generation,
                path,
                state.current_cluster.is_some(),
                state.current_category.is_some(),
            )
        };

        info!(generation, path = %path, "Navigating");
        let depth = path.depth();

        let cluster = path.cluster().unwrap_or_default().to_string();
        if !cached_cluster {
            let key = ResourceKey::cluster(&cluster);
            let node = fetch_level(self.store.as_ref(), Level::Cluster, &key)
                .await
                .map_err(|e| {
                    self.fail(generation, NavigationError::ClusterLoadFailure(cluster.clone()), e)
                })?;
            let committed = self.commit(generation, |state, root| {
                state.commit_cluster(&cluster, node, root);
                if depth == 1 {
                    state.loading = false;
                }
            });
            if !committed {
                return Ok(());
            }
        } else if depth == 1 && !self.commit(generation, |state, _| state.loading = false) {
            return Ok(());
        }
        if depth == 1 {
            return Ok(());
        }

        let category = path.category().unwrap_or_default().to_string();
        if !cached_category {
            let key = ResourceKey::category(&cluster, &category);
            let node = fetch_level(self.store.as_ref(), Level::Category, &key)
                .await
                .map_err(|e| {
                    self.fail(
                        generation,
                        NavigationError::CategoryLoadFailure(category.clone()),
                        e,
                    )
                })?;
            let committed = self.commit(generation, |state, root| {
                state.commit_category(&category, node, root);
                if depth == 2 {
                    state.loading = false;
                }
            });
            if !committed {
                return Ok(());
            }
        } else if depth == 2 && !self.commit(generation, |state, _| state.loading = false) {
            return Ok(());
        }
        if depth == 2 {
            if self.options.prefetch_previews {
                self.prefetch_previews(generation, &cluster, &category).await;
            }
            return Ok(());
        }

        let subcategory = path.subcategory().unwrap_or_default().to_string();
        if let Some(leaf) = self.embedded_entry(&subcategory) {
            debug!(generation, key = %subcategory, "Showing embedded subcategory");
            self.commit(generation, |state, root| {
                state.commit_leaf(leaf, root);
                state.loading = false;
            });
            return Ok(());
        }

        let key = ResourceKey::subcategory(&cluster, &category, &subcategory);
        let node = fetch_level(self.store.as_ref(), Level::Subcategory, &key)
            .await
            .map_err(|e| {
                self.fail(
                    generation,
                    NavigationError::SubcategoryLoadFailure(format!("{}/{}", category, subcategory)),
                    e,
                )
            })?;
        self.commit(generation, |state, root| {
            state.commit_leaf(node, root);
            state.loading = false;
        });
        Ok(())
    }

    /// Navigate one level up from the current path.
    pub async fn navigate_up(&self) -> Result<(), NavigationError> {
        let parent = self.current_path().parent();
        self.navigate(&parent.to_string()).await
    }

    /// React to a card being chosen.
    ///
    /// The entry's variant alone decides what happens: pointers navigate to
    /// their path, containers and stubs navigate one level down by key, and
    /// leaves are shown as they are without another fetch.
    pub async fn select_item(&self, item: &Node, key: &str) -> Result<(), NavigationError> {
        match &item.kind {
            NodeKind::Pointer { path } => self.navigate(path).await,
            NodeKind::Container(_) | NodeKind::Stub => self.navigate(key).await,
            NodeKind::Leaf(_) => {
                self.open_embedded(item, key);
                Ok(())
            }
        }
    }

    /// Show embedded leaf content. At category depth the entry also becomes
    /// the next path segment and breadcrumb.
    fn open_embedded(&self, item: &Node, key: &str) {
        let mut state = self.state.write();
        state.generation += 1;
        state.error = None;
        state.loading = false;
        if state.current_path.depth() == 2 {
            let path = state.current_path.child(key);
            state.current_path = path;
            state.previews.clear();
        }
        state.commit_leaf(item.clone(), &self.root);
        debug!(
            generation = state.generation,
            key,
            path = %state.current_path,
            "Opened embedded leaf"
        );
    }

    /// Leaf entry `key` of the resolved category, if its content is inline.
    fn embedded_entry(&self, key: &str) -> Option<Node> {
        let state = self.state.read();
        state
            .current_category
            .as_ref()
            .and_then(Node::entries)
            .and_then(|entries| entries.get(key))
            .filter(|entry| entry.is_leaf())
            .cloned()
    }

    /// Search is not available; always returns no cards.
    pub fn search(&self, query: &str) -> Vec<Card> {
        debug!(query, "Search requested but not implemented");
        Vec::new()
    }

    /// Apply `update` if `generation` is still current. Returns whether it was
    /// applied.
    fn commit<F>(&self, generation: u64, update: F) -> bool
    where
        F: FnOnce(&mut NavigationState, &RootCatalog),
    {
        let mut state = self.state.write();
        if state.generation != generation {
            debug!(
                generation,
                current = state.generation,
                "Dropping stale navigation result"
            );
            return false;
        }
        update(&mut *state, self.root.as_ref());
        true
    }

    /// Record a failed fetch. Shallower levels stay as committed.
    fn fail(&self, generation: u64, error: NavigationError, source: StorageError) -> NavigationError {
        error!(
            generation,
            kind = source.kind(),
            cause = %source,
            "{}",
            error
        );
        self.commit(generation, |state, _| {
            state.error = Some(error.to_string());
            state.loading = false;
        });
        error
    }
}
