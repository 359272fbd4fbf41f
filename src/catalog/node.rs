//! Catalog nodes and document decoding.
//!
//! Documents arrive as loosely shaped JSON. Decoding classifies every entity
//! into an explicit [`NodeKind`] once, so callers match on the variant instead
//! of probing for fields.

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value;

/// Terminal phrases: a flat list or lists grouped under sub-labels
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Items {
    Flat(Vec<String>),
    Grouped(IndexMap<String, Vec<String>>),
}

impl Items {
    /// Total number of phrases across all groups
    pub fn len(&self) -> usize {
        match self {
            Items::Flat(items) => items.len(),
            Items::Grouped(groups) => groups.values().map(Vec::len).sum(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// All phrases in document order
    pub fn phrases(&self) -> Vec<&str> {
        match self {
            Items::Flat(items) => items.iter().map(String::as_str).collect(),
            Items::Grouped(groups) => groups
                .values()
                .flat_map(|items| items.iter().map(String::as_str))
                .collect(),
        }
    }

    /// Groups as `(label, phrases)`; a flat list is one unlabeled group.
    pub fn groups(&self) -> Vec<(Option<&str>, &[String])> {
        match self {
            Items::Flat(items) => vec![(None, items.as_slice())],
            Items::Grouped(groups) => groups
                .iter()
                .map(|(label, items)| (Some(label.as_str()), items.as_slice()))
                .collect(),
        }
    }
}

/// Optional authoring metadata
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub default_subcategory: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Structural children of a container
#[derive(Debug, Clone, PartialEq)]
pub enum Children {
    Categories(IndexMap<String, Node>),
    Subcategories(IndexMap<String, Node>),
}

impl Children {
    pub fn entries(&self) -> &IndexMap<String, Node> {
        match self {
            Children::Categories(entries) | Children::Subcategories(entries) => entries,
        }
    }
}

/// Inline terminal content
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LeafContent {
    pub items: Option<Items>,
    pub modifiers: IndexMap<String, Node>,
}

/// What a node is, decided once at decode time
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Content lives in another document; only its path is known.
    Pointer { path: String },
    /// Categories or subcategories to drill into.
    Container(Children),
    /// Items and/or modifier groups, ready to render.
    Leaf(LeafContent),
    /// Card-only entry whose document is located by naming convention.
    Stub,
}

/// A catalog entity at any level of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub metadata: Option<Metadata>,
    pub kind: NodeKind,
}

#[derive(Debug, Deserialize)]
struct RawNode {
    name: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    icon: Option<String>,
    #[serde(default)]
    path: Option<Value>,
    #[serde(default)]
    categories: Option<IndexMap<String, RawNode>>,
    #[serde(default)]
    subcategories: Option<IndexMap<String, RawNode>>,
    #[serde(default)]
    items: Option<Items>,
    #[serde(default)]
    modifiers: Option<IndexMap<String, RawNode>>,
    #[serde(default)]
    metadata: Option<Metadata>,
}

fn convert_entries(raw: IndexMap<String, RawNode>) -> Result<IndexMap<String, Node>, String> {
    raw.into_iter()
        .map(|(key, node)| {
            Node::try_from(node)
                .map(|node| (key.clone(), node))
                .map_err(|reason| format!("{key}: {reason}"))
        })
        .collect()
}

impl TryFrom<RawNode> for Node {
    type Error = String;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        // Only a string-typed `path` marks a pointer.
        let pointer = raw.path.as_ref().and_then(Value::as_str).map(str::to_string);

        let kind = match pointer {
            Some(path) => {
                if raw.items.is_some() {
                    return Err(format!("'{}' declares both path and items", raw.name));
                }
                NodeKind::Pointer { path }
            }
            None if raw.items.is_some() || raw.modifiers.is_some() => NodeKind::Leaf(LeafContent {
                items: raw.items,
                modifiers: match raw.modifiers {
                    Some(modifiers) => convert_entries(modifiers)?,
                    None => IndexMap::new(),
                },
            }),
            None => match (raw.categories, raw.subcategories) {
                (Some(_), Some(_)) => {
                    return Err(format!(
                        "'{}' declares both categories and subcategories",
                        raw.name
                    ))
                }
                (Some(categories), None) => {
                    NodeKind::Container(Children::Categories(convert_entries(categories)?))
                }
                (None, Some(subcategories)) => {
                    NodeKind::Container(Children::Subcategories(convert_entries(subcategories)?))
                }
                (None, None) => NodeKind::Stub,
            },
        };

        Ok(Node {
            name: raw.name,
            description: raw.description.filter(|d| !d.is_empty()),
            icon: raw.icon,
            metadata: raw.metadata,
            kind,
        })
    }
}

impl Node {
    /// Decode a node from a JSON value
    pub fn from_value(value: Value) -> Result<Node, String> {
        let raw: RawNode = serde_json::from_value(value).map_err(|e| e.to_string())?;
        Node::try_from(raw)
    }

    /// Decode a node from raw JSON bytes
    pub fn from_slice(bytes: &[u8]) -> Result<Node, String> {
        let raw: RawNode = serde_json::from_slice(bytes).map_err(|e| e.to_string())?;
        Node::try_from(raw)
    }

    pub fn is_pointer(&self) -> bool {
        matches!(self.kind, NodeKind::Pointer { .. })
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.kind, NodeKind::Leaf(_))
    }

    /// Named entries a grid can show: container children or modifier groups.
    pub fn entries(&self) -> Option<&IndexMap<String, Node>> {
        match &self.kind {
            NodeKind::Container(children) => Some(children.entries()),
            NodeKind::Leaf(content) if !content.modifiers.is_empty() => Some(&content.modifiers),
            _ => None,
        }
    }

    /// Entries sorted by `metadata.order`; unordered entries follow in
    /// document order.
    pub fn ordered_entries(&self) -> Vec<(&String, &Node)> {
        let mut entries: Vec<(&String, &Node)> = match self.entries() {
            Some(entries) => entries.iter().collect(),
            None => return Vec::new(),
        };
        entries.sort_by_key(|(_, node)| match node.order() {
            Some(order) => (0, order),
            None => (1, 0),
        });
        entries
    }

    pub fn order(&self) -> Option<i64> {
        self.metadata.as_ref().and_then(|m| m.order)
    }

    /// Display name for the entry under `key`, if present
    pub fn entry_name(&self, key: &str) -> Option<&str> {
        self.entries()
            .and_then(|entries| entries.get(key))
            .map(|node| node.name.as_str())
    }

    /// Phrases worth showing on a card: own items, else the first modifier group's.
    pub fn preview_items(&self) -> Option<&Items> {
        match &self.kind {
            NodeKind::Leaf(content) => content.items.as_ref().or_else(|| {
                content
                    .modifiers
                    .values()
                    .find_map(|modifier| modifier.preview_items())
            }),
            _ => None,
        }
    }
}
