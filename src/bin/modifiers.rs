//! Modifiers CLI Binary
//!
//! Command-line host for the modifier catalog browser.

use clap::Parser;
use design_modifiers::cli::{Cli, RunContext};
use design_modifiers::config::ConfigLoader;
use design_modifiers::logging::{init_logging, LoggingConfig};
use std::io::IsTerminal;
use std::process;
use tracing::{error, info};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Modifiers CLI starting");

    let color = !cli.no_color && std::io::stdout().is_terminal();
    let context = match RunContext::new(cli.catalog.clone(), cli.config.clone())
        .and_then(|ctx| ctx.with_base_url(cli.base_url.clone()))
    {
        Ok(ctx) => ctx.with_color(color),
        Err(e) => {
            error!("Error initializing catalog: {}", e);
            eprintln!("{}", design_modifiers::cli::map_error(&e));
            process::exit(1);
        }
    };

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            if !output.is_empty() {
                println!("{}", output);
            }
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", design_modifiers::cli::map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and config file.
/// Logging stays off unless --verbose is given.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    if !cli.verbose {
        return LoggingConfig {
            level: "off".to_string(),
            ..LoggingConfig::default()
        };
    }

    let mut config = if let Some(ref config_path) = cli.config {
        ConfigLoader::load_from_file(config_path)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    } else {
        ConfigLoader::load(&cli.catalog)
            .ok()
            .map(|c| c.logging)
            .unwrap_or_default()
    };

    if config.level == "info" {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
    }
    if cli.no_color {
        config.color = false;
    }

    config
}
