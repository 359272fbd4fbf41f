//! CLI route: single route table and run context. Drives the navigator and presentation.

use crate::catalog::RootCatalog;
use crate::cli::command_name;
use crate::cli::interactive;
use crate::cli::parse::{Commands, OutputFormat, ThemeCommands};
use crate::cli::presentation::{
    format_frame_json, format_frame_text, format_search_result, format_theme,
};
use crate::config::{CatalogConfig, ConfigLoader};
use crate::error::{CatalogError, NavigationError};
use crate::navigator::{load_root, Navigator, RenderFrame};
use crate::preferences::{DisplayPreferences, FilePreferenceStore, PreferenceStore};
use crate::render::TerminalRenderer;
use crate::store::{open_store, DocumentStore};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::info;

/// Runtime context for CLI execution: catalog root, merged config, display
/// preferences and the async runtime used to drive navigation.
pub struct RunContext {
    catalog_root: PathBuf,
    config: CatalogConfig,
    preferences: Box<dyn PreferenceStore>,
    display: DisplayPreferences,
    color: bool,
    runtime: Runtime,
}

impl RunContext {
    /// Create run context from catalog root and optional config path. Uses ConfigLoader only.
    pub fn new(catalog_root: PathBuf, config_path: Option<PathBuf>) -> Result<Self, CatalogError> {
        let config = if let Some(ref cfg_path) = config_path {
            ConfigLoader::load_from_file(cfg_path)?
        } else {
            ConfigLoader::load(&catalog_root)?
        };
        let config = config.validated()?;

        let preferences: Box<dyn PreferenceStore> = Box::new(FilePreferenceStore::open(
            config.display.preferences_file.as_deref(),
        )?);
        let display = DisplayPreferences::read_once(preferences.as_ref(), config.display.system_theme)?;

        let runtime = Runtime::new().map_err(|e| {
            CatalogError::ConfigError(format!("Failed to start async runtime: {}", e))
        })?;

        Ok(Self {
            catalog_root,
            config,
            preferences,
            display,
            color: true,
            runtime,
        })
    }

    /// Point the document source at a server, replacing any configured root.
    pub fn with_base_url(mut self, base_url: Option<String>) -> Result<Self, CatalogError> {
        if let Some(url) = base_url {
            self.config.source.root = None;
            self.config.source.base_url = Some(url);
            self.config = self.config.validated()?;
        }
        Ok(self)
    }

    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    pub fn with_preference_store(mut self, store: Box<dyn PreferenceStore>) -> Result<Self, CatalogError> {
        self.display = DisplayPreferences::read_once(store.as_ref(), self.config.display.system_theme)?;
        self.preferences = store;
        Ok(self)
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn display(&self) -> DisplayPreferences {
        self.display
    }

    pub fn execute(&self, command: &Commands) -> Result<String, CatalogError> {
        info!(command = %command_name(command), "Executing command");
        match command {
            Commands::Show { path, format } => self.handle_show(path, *format),
            Commands::Open { path, key, format } => self.handle_open(path, key, *format),
            Commands::Browse { path } => self.handle_browse(path),
            Commands::Theme { command } => self.handle_theme_command(command),
            Commands::Search { query } => self.handle_search(query),
        }
    }

    fn open_store(&self) -> Result<Arc<dyn DocumentStore>, CatalogError> {
        let store = open_store(&self.config.source, &self.catalog_root)?;
        info!(source = %store.describe(), "Opened document store");
        Ok(store)
    }

    /// Navigator over a fully loaded root; a root load failure is an error here.
    fn loaded_navigator(&self) -> Result<Navigator, CatalogError> {
        let store = self.open_store()?;
        let root = self
            .runtime
            .block_on(load_root(store.as_ref(), &self.config.clusters))?;
        Ok(Navigator::new(store, root, self.config.navigator_options()))
    }

    fn format_frame(&self, frame: &RenderFrame, format: OutputFormat) -> Result<String, CatalogError> {
        match format {
            OutputFormat::Json => format_frame_json(frame),
            OutputFormat::Text => format_frame_text(frame, self.display.theme, self.color),
        }
    }

    fn handle_show(&self, path: &str, format: OutputFormat) -> Result<String, CatalogError> {
        let navigator = self.loaded_navigator()?;
        self.runtime.block_on(navigator.navigate(&absolute(path)))?;
        self.format_frame(&navigator.frame(), format)
    }

    fn handle_open(&self, path: &str, key: &str, format: OutputFormat) -> Result<String, CatalogError> {
        let navigator = self.loaded_navigator()?;
        self.runtime.block_on(navigator.navigate(&absolute(path)))?;

        let frame = navigator.frame();
        let card = frame.view.card(key).ok_or_else(|| {
            NavigationError::InvalidPath(format!("{}{} (no such entry)", frame.path, key))
        })?;
        self.runtime.block_on(navigator.select_item(&card.node, &card.key))?;
        self.format_frame(&navigator.frame(), format)
    }

    fn handle_browse(&self, path: &str) -> Result<String, CatalogError> {
        let store = self.open_store()?;
        let navigator = self.runtime.block_on(Navigator::start(
            store,
            &self.config.clusters,
            self.config.navigator_options(),
        ));
        if navigator.error().is_none() {
            // Failures are shown inside the browser.
            let _ = self.runtime.block_on(navigator.navigate(&absolute(path)));
        }

        let mut renderer = TerminalRenderer::new(std::io::stdout(), self.display.theme, self.color);
        interactive::browse(&self.runtime, &navigator, &mut renderer)?;
        Ok(String::new())
    }

    fn handle_theme_command(&self, command: &ThemeCommands) -> Result<String, CatalogError> {
        match command {
            ThemeCommands::Show => {
                let stored = self.preferences.load()?.is_some();
                Ok(format_theme(&self.display, stored))
            }
            ThemeCommands::Set { theme } => {
                let updated = DisplayPreferences { theme: *theme };
                self.preferences.save(&updated)?;
                Ok(format_theme(&updated, true))
            }
            ThemeCommands::Toggle => {
                let updated = self.display.toggled();
                self.preferences.save(&updated)?;
                Ok(format_theme(&updated, true))
            }
        }
    }

    fn handle_search(&self, query: &str) -> Result<String, CatalogError> {
        let navigator = Navigator::new(
            self.open_store()?,
            RootCatalog::empty(),
            self.config.navigator_options(),
        );
        let results = navigator.search(query);
        Ok(format_search_result(query, &results))
    }
}

/// CLI paths are always absolute, whether or not the user typed the slash.
fn absolute(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{}", path)
    }
}
