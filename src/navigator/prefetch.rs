//! Opportunistic card previews for a resolved category view.

use super::{fetch_level, Navigator};
use crate::catalog::{Level, Node, NodeKind, ResourceKey};
use futures::future::join_all;
use tracing::{debug, warn};

impl Navigator {
    /// Fetch every subcategory of the current category that carries no inline
    /// content, all at once. Failed entries are dropped; the rest are kept as
    /// previews if `generation` is still current.
    pub(super) async fn prefetch_previews(&self, generation: u64, cluster: &str, category: &str) {
        let wanted: Vec<String> = {
            let state = self.state.read();
            match &state.current_category {
                Some(node) => pending_previews(node),
                None => return,
            }
        };
        if wanted.is_empty() {
            return;
        }

        debug!(generation, count = wanted.len(), "Prefetching previews");
        let store = self.store.as_ref();
        let fetches = wanted.iter().map(|key| async move {
            let resource = ResourceKey::subcategory(cluster, category, key);
            match fetch_level(store, Level::Subcategory, &resource).await {
                Ok(node) => Some((key.clone(), node)),
                Err(e) => {
                    warn!(key = %resource, kind = e.kind(), "Preview prefetch failed: {}", e);
                    None
                }
            }
        });
        let fetched: Vec<(String, Node)> = join_all(fetches).await.into_iter().flatten().collect();

        let count = fetched.len();
        let committed = self.commit(generation, |state, _| state.previews.extend(fetched));
        if committed {
            debug!(generation, loaded = count, requested = wanted.len(), "Stored previews");
        }
    }
}

/// Entry keys whose cards have nothing to preview without another fetch
fn pending_previews(category: &Node) -> Vec<String> {
    category
        .entries()
        .map(|entries| {
            entries
                .iter()
                .filter(|(_, node)| matches!(node.kind, NodeKind::Pointer { .. } | NodeKind::Stub))
                .map(|(key, _)| key.clone())
                .collect()
        })
        .unwrap_or_default()
}
