//! Interactive browser: render, pick a card, repeat.

use crate::catalog::MAX_DEPTH;
use crate::error::CatalogError;
use crate::navigator::{Navigator, View};
use crate::render::Renderer;
use dialoguer::Select;
use tokio::runtime::Runtime;
use tracing::debug;

/// What a menu selection means
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrowseAction {
    Open(usize),
    Up,
    Home,
    Quit,
}

/// Map a menu index to an action. Cards come first, then Up, Home and Quit.
pub fn browse_action(index: usize, card_count: usize) -> BrowseAction {
    match index.checked_sub(card_count) {
        None => BrowseAction::Open(index),
        Some(0) => BrowseAction::Up,
        Some(1) => BrowseAction::Home,
        Some(_) => BrowseAction::Quit,
    }
}

/// Run the browse loop until the user quits or closes the prompt.
pub fn browse<R: Renderer>(
    runtime: &Runtime,
    navigator: &Navigator,
    renderer: &mut R,
) -> Result<(), CatalogError> {
    loop {
        let frame = navigator.frame();
        renderer.render(&frame)?;

        let cards = frame.view.cards();
        let mut labels: Vec<String> = cards
            .iter()
            .map(|card| format!("{}  ({})", card.title, card.key))
            .collect();
        labels.extend(["↑ Up", "⌂ Home", "✕ Quit"].iter().map(|s| s.to_string()));

        let selection = Select::new()
            .with_prompt("Open")
            .items(&labels)
            .default(0)
            .interact_opt()
            .map_err(|e| CatalogError::RenderError(format!("Failed to get user input: {}", e)))?;
        let Some(index) = selection else {
            return Ok(());
        };

        // Navigation failures stay in state and show on the next frame.
        let result = match browse_action(index, cards.len()) {
            BrowseAction::Open(i) => {
                let card = &cards[i];
                runtime.block_on(navigator.select_item(&card.node, &card.key))
            }
            BrowseAction::Up => {
                let closing_leaf = matches!(frame.view, View::Leaf(_)) && frame.path.depth() < MAX_DEPTH;
                if closing_leaf {
                    runtime.block_on(navigator.navigate(&frame.path.to_string()))
                } else {
                    runtime.block_on(navigator.navigate_up())
                }
            }
            BrowseAction::Home => runtime.block_on(navigator.navigate("/")),
            BrowseAction::Quit => return Ok(()),
        };
        if let Err(e) = result {
            debug!(error = %e, "Navigation failed during browse");
        }
    }
}
