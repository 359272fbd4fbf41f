//! CLI presentation: text and json formatters.

use crate::catalog::{Items, Node, NodeKind};
use crate::error::CatalogError;
use crate::navigator::{Card, RenderFrame, View};
use crate::preferences::{DisplayPreferences, Theme};
use crate::render::{Renderer, TerminalRenderer};
use serde_json::{json, Value};

/// Render a frame through the terminal renderer into a string.
pub fn format_frame_text(frame: &RenderFrame, theme: Theme, color: bool) -> Result<String, CatalogError> {
    let mut renderer = TerminalRenderer::new(Vec::new(), theme, color);
    renderer.render(frame)?;
    let text = String::from_utf8(renderer.into_inner())
        .map_err(|e| CatalogError::RenderError(e.to_string()))?;
    Ok(text.trim_end().to_string())
}

pub fn format_frame_json(frame: &RenderFrame) -> Result<String, CatalogError> {
    let cards: Vec<Value> = frame.view.cards().iter().map(card_json).collect();
    let leaf = match &frame.view {
        View::Leaf(node) => node_json(node),
        _ => Value::Null,
    };
    let output = json!({
        "path": frame.path.to_string(),
        "view": frame.view.name(),
        "loading": frame.loading,
        "error": frame.error,
        "breadcrumbs": frame.breadcrumbs,
        "cards": cards,
        "leaf": leaf,
    });
    serde_json::to_string_pretty(&output).map_err(|e| CatalogError::RenderError(e.to_string()))
}

pub fn format_theme(preferences: &DisplayPreferences, stored: bool) -> String {
    let source = if stored { "saved preference" } else { "system default" };
    format!("Theme: {} ({})", preferences.theme, source)
}

pub fn format_search_result(query: &str, results: &[Card]) -> String {
    if results.is_empty() {
        return format!("Search is not available yet; no results for '{}'.", query);
    }
    results
        .iter()
        .map(|card| format!("{}  {}", card.key, card.title))
        .collect::<Vec<_>>()
        .join("\n")
}

fn kind_name(kind: &NodeKind) -> &'static str {
    match kind {
        NodeKind::Pointer { .. } => "pointer",
        NodeKind::Container(_) => "container",
        NodeKind::Leaf(_) => "leaf",
        NodeKind::Stub => "stub",
    }
}

fn items_json(items: &Items) -> Value {
    match items {
        Items::Flat(phrases) => json!(phrases),
        Items::Grouped(groups) => {
            let map: serde_json::Map<String, Value> = groups
                .iter()
                .map(|(label, phrases)| (label.clone(), json!(phrases)))
                .collect();
            Value::Object(map)
        }
    }
}

fn card_json(card: &Card) -> Value {
    json!({
        "key": card.key,
        "name": card.title,
        "description": card.description,
        "icon": card.icon,
        "kind": kind_name(&card.node.kind),
        "preview": card.preview.as_ref().map(items_json),
    })
}

fn node_json(node: &Node) -> Value {
    let mut value = json!({
        "name": node.name,
        "description": node.description,
        "kind": kind_name(&node.kind),
    });
    if let NodeKind::Leaf(content) = &node.kind {
        value["items"] = content.items.as_ref().map(items_json).unwrap_or(Value::Null);
        let modifiers: serde_json::Map<String, Value> = content
            .modifiers
            .iter()
            .map(|(key, modifier)| (key.clone(), node_json(modifier)))
            .collect();
        value["modifiers"] = Value::Object(modifiers);
    }
    value
}
