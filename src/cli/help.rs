//! CLI command-name contract for logging.

use crate::cli::parse::{Commands, ThemeCommands};

/// Command name string for log fields (e.g. "show", "theme.set").
pub fn command_name(command: &Commands) -> String {
    match command {
        Commands::Show { .. } => "show".to_string(),
        Commands::Open { .. } => "open".to_string(),
        Commands::Browse { .. } => "browse".to_string(),
        Commands::Theme { command } => format!("theme.{}", theme_command_name(command)),
        Commands::Search { .. } => "search".to_string(),
    }
}

pub fn theme_command_name(command: &ThemeCommands) -> &'static str {
    match command {
        ThemeCommands::Show => "show",
        ThemeCommands::Set { .. } => "set",
        ThemeCommands::Toggle => "toggle",
    }
}
