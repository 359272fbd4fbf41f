//! View derivation: what the renderer should draw for the current state.

use super::state::{Breadcrumb, NavigationState};
use super::Navigator;
use crate::catalog::{CatalogPath, Items, Node, RootCatalog};
use indexmap::IndexMap;

/// A grid card for one entry of the visible level
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub key: String,
    pub title: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    /// Phrases shown on the card, inline or from a prefetched document
    pub preview: Option<Items>,
    /// The entry itself, handed back to `select_item` when the card is chosen
    pub node: Node,
}

impl Card {
    fn from_entry(key: &str, node: &Node, previews: &IndexMap<String, Node>) -> Self {
        let preview = node
            .preview_items()
            .or_else(|| previews.get(key).and_then(Node::preview_items))
            .cloned();
        Card {
            key: key.to_string(),
            title: node.name.clone(),
            description: node.description.clone(),
            icon: node.icon.clone(),
            preview,
            node: node.clone(),
        }
    }
}

/// The four view requests, plus nothing-to-show
#[derive(Debug, Clone, PartialEq)]
pub enum View {
    Root(Vec<Card>),
    Cluster(Vec<Card>),
    /// Subcategories or modifier groups of the current category
    Category(Vec<Card>),
    Leaf(Node),
    Empty,
}

impl View {
    pub fn cards(&self) -> &[Card] {
        match self {
            View::Root(cards) | View::Cluster(cards) | View::Category(cards) => cards,
            View::Leaf(_) | View::Empty => &[],
        }
    }

    pub fn card(&self, key: &str) -> Option<&Card> {
        self.cards().iter().find(|card| card.key == key)
    }

    pub fn name(&self) -> &'static str {
        match self {
            View::Root(_) => "root",
            View::Cluster(_) => "cluster",
            View::Category(_) => "category",
            View::Leaf(_) => "leaf",
            View::Empty => "empty",
        }
    }
}

/// Everything a renderer receives for one paint
#[derive(Debug, Clone, PartialEq)]
pub struct RenderFrame {
    pub path: CatalogPath,
    pub view: View,
    pub loading: bool,
    pub error: Option<String>,
    pub breadcrumbs: Vec<Breadcrumb>,
}

fn cards_of(node: &Node, previews: &IndexMap<String, Node>) -> Vec<Card> {
    node.ordered_entries()
        .into_iter()
        .map(|(key, entry)| Card::from_entry(key, entry, previews))
        .collect()
}

impl NavigationState {
    /// Derive the view: a selected leaf wins, then root, then the deepest
    /// resolved level.
    pub fn view(&self, root: &RootCatalog) -> View {
        if let Some(leaf) = &self.selected_leaf {
            return View::Leaf(leaf.clone());
        }

        if self.current_path.is_root() {
            let mut clusters: Vec<(&String, &Node)> = root.clusters().iter().collect();
            clusters.sort_by_key(|(_, node)| match node.order() {
                Some(order) => (0, order),
                None => (1, 0),
            });
            let empty = IndexMap::new();
            return View::Root(
                clusters
                    .into_iter()
                    .map(|(key, node)| Card::from_entry(key, node, &empty))
                    .collect(),
            );
        }

        if let Some(category) = &self.current_category {
            return View::Category(cards_of(category, &self.previews));
        }

        if let Some(cluster) = &self.current_cluster {
            return View::Cluster(cards_of(cluster, &self.previews));
        }

        View::Empty
    }
}

impl Navigator {
    /// Snapshot of the current state as a render request
    pub fn frame(&self) -> RenderFrame {
        let state = self.state.read();
        RenderFrame {
            path: state.current_path.clone(),
            view: state.view(&self.root),
            loading: state.loading,
            error: state.error.clone(),
            breadcrumbs: state.breadcrumbs.clone(),
        }
    }
}
