//! Terminal renderer: breadcrumb trail, card grid via comfy-table, leaf detail.

use super::Renderer;
use crate::catalog::{Items, Node, NodeKind};
use crate::error::CatalogError;
use crate::navigator::{Breadcrumb, Card, RenderFrame, View};
use crate::preferences::Theme;
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::{ContentArrangement, Table};
use owo_colors::{OwoColorize, Style};
use std::io::Write;

const PREVIEW_PHRASES: usize = 3;

/// Styles for one theme
struct Palette {
    heading: Style,
    accent: Style,
    muted: Style,
    error: Style,
    enabled: bool,
}

impl Palette {
    fn new(theme: Theme, enabled: bool) -> Self {
        match theme {
            Theme::Light => Palette {
                heading: Style::new().bold().underline(),
                accent: Style::new().blue(),
                muted: Style::new().dimmed(),
                error: Style::new().red().bold(),
                enabled,
            },
            Theme::Dark => Palette {
                heading: Style::new().bold().underline().bright_white(),
                accent: Style::new().bright_cyan(),
                muted: Style::new().bright_black(),
                error: Style::new().bright_red().bold(),
                enabled,
            },
        }
    }

    fn paint(&self, text: &str, style: Style) -> String {
        if self.enabled {
            text.style(style).to_string()
        } else {
            text.to_string()
        }
    }
}

/// Draws frames as text onto any writer
pub struct TerminalRenderer<W: Write> {
    out: W,
    theme: Theme,
    color: bool,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(out: W, theme: Theme, color: bool) -> Self {
        Self { out, theme, color }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer for TerminalRenderer<W> {
    fn render(&mut self, frame: &RenderFrame) -> Result<(), CatalogError> {
        let text = format_frame(frame, self.theme, self.color);
        self.out.write_all(text.as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

/// Format one frame. Loading and error states replace the body entirely.
pub fn format_frame(frame: &RenderFrame, theme: Theme, color: bool) -> String {
    let palette = Palette::new(theme, color);
    let mut out = String::new();

    out.push_str(&format!("{}\n", palette.paint("Design Modifiers", palette.heading)));
    out.push_str(&format!("{}\n\n", format_trail(&frame.breadcrumbs, &palette)));

    if frame.loading {
        out.push_str(&format!("{}\n", palette.paint("Loading…", palette.muted)));
        return out;
    }
    if let Some(error) = &frame.error {
        out.push_str(&format!("{}\n", palette.paint(error, palette.error)));
        return out;
    }

    match &frame.view {
        View::Root(cards) | View::Cluster(cards) | View::Category(cards) => {
            out.push_str(&format_cards(cards));
        }
        View::Leaf(node) => out.push_str(&format_leaf(node, &palette)),
        View::Empty => out.push_str(&format!("{}\n", palette.paint("Nothing here.", palette.muted))),
    }
    out
}

fn format_trail(breadcrumbs: &[Breadcrumb], palette: &Palette) -> String {
    let mut parts = vec![palette.paint("Home", palette.accent)];
    parts.extend(breadcrumbs.iter().map(|crumb| crumb.label.clone()));
    parts.join(" › ")
}

fn format_cards(cards: &[Card]) -> String {
    if cards.is_empty() {
        return "No entries.\n".to_string();
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_BORDERS_ONLY)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Key", "Name", "Description", "Preview"]);
    for card in cards {
        let name = match &card.icon {
            Some(icon) => format!("{} {}", icon, card.title),
            None => card.title.clone(),
        };
        table.add_row(vec![
            card.key.clone(),
            name,
            card.description.clone().unwrap_or_default(),
            card.preview.as_ref().map(preview_text).unwrap_or_default(),
        ]);
    }
    format!("{}\n", table)
}

fn preview_text(items: &Items) -> String {
    let phrases = items.phrases();
    let mut text = phrases
        .iter()
        .take(PREVIEW_PHRASES)
        .copied()
        .collect::<Vec<_>>()
        .join(", ");
    if phrases.len() > PREVIEW_PHRASES {
        text.push_str(&format!(" (+{})", phrases.len() - PREVIEW_PHRASES));
    }
    text
}

fn format_leaf(node: &Node, palette: &Palette) -> String {
    let mut out = format!("{}\n", palette.paint(&node.name, palette.heading));
    if let Some(description) = &node.description {
        out.push_str(&format!("{}\n", palette.paint(description, palette.muted)));
    }
    out.push('\n');

    let NodeKind::Leaf(content) = &node.kind else {
        return out;
    };
    if let Some(items) = &content.items {
        out.push_str(&format_items(items, palette, ""));
    }
    for modifier in content.modifiers.values() {
        out.push_str(&format!("\n{}\n", palette.paint(&modifier.name, palette.accent)));
        if let Some(description) = &modifier.description {
            out.push_str(&format!("{}\n", palette.paint(description, palette.muted)));
        }
        if let NodeKind::Leaf(inner) = &modifier.kind {
            if let Some(items) = &inner.items {
                out.push_str(&format_items(items, palette, "  "));
            }
        }
    }
    out
}

fn format_items(items: &Items, palette: &Palette, indent: &str) -> String {
    let mut out = String::new();
    for (label, phrases) in items.groups() {
        let chip_indent = match label {
            Some(label) => {
                out.push_str(&format!("{}{}\n", indent, palette.paint(label, palette.muted)));
                format!("{}  ", indent)
            }
            None => indent.to_string(),
        };
        for phrase in phrases {
            out.push_str(&format!("{}[{}]\n", chip_indent, phrase));
        }
    }
    out
}
