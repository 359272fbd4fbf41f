//! CLI parse: clap types for the modifiers browser. No behavior; definitions only.

use crate::preferences::Theme;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Modifiers CLI - browse a catalog of prompt modifiers
#[derive(Parser)]
#[command(name = "modifiers")]
#[command(about = "Browse a hierarchical catalog of prompt modifiers")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Catalog directory (holds data/ and config/)
    #[arg(long, default_value = ".")]
    pub catalog: PathBuf,

    /// Fetch documents from a static file server instead of the catalog directory
    #[arg(long)]
    pub base_url: Option<String>,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the view at a catalog path
    Show {
        /// Catalog path, e.g. /concept/medium
        #[arg(default_value = "/")]
        path: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Navigate to a path, then open one of its entries
    Open {
        /// Catalog path holding the entry
        path: String,
        /// Entry key as listed by `show`
        key: String,
        /// Output format
        #[arg(long, value_enum, default_value = "text")]
        format: OutputFormat,
    },
    /// Browse the catalog interactively
    Browse {
        /// Starting path
        #[arg(default_value = "/")]
        path: String,
    },
    /// Show or change the display theme
    Theme {
        #[command(subcommand)]
        command: ThemeCommands,
    },
    /// Search modifiers (not available yet)
    Search {
        /// Search text
        query: String,
    },
}

#[derive(Subcommand)]
pub enum ThemeCommands {
    /// Print the active theme
    Show,
    /// Save a theme preference
    Set {
        #[arg(value_parser = parse_theme)]
        theme: Theme,
    },
    /// Switch between light and dark
    Toggle,
}

fn parse_theme(value: &str) -> Result<Theme, String> {
    value.parse::<Theme>().map_err(|e| e.to_string())
}
