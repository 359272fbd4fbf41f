//! CLI domain: parse, route, help, output, presentation and the interactive browser.
//! No navigation logic lives here; the route table drives the navigator and renderer.

mod help;
mod interactive;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use interactive::{browse_action, BrowseAction};
pub use output::map_error;
pub use parse::{Cli, Commands, OutputFormat, ThemeCommands};
pub use presentation::{format_frame_json, format_frame_text, format_search_result, format_theme};
pub use route::RunContext;
