//! Merge rules: defaults applied beneath every source.

use config::Config;
use config::ConfigBuilder;
use config::ConfigError;

/// Create a Config builder with merge policy defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError>
{
    Config::builder()
        .set_default("clusters", vec!["concept", "context", "komposition"])?
        .set_default("source.timeout_secs", 30)?
        .set_default("navigation.prefetch_previews", true)?
        .set_default("display.system_theme", "light")?
        .set_default("logging.output", "stderr")
}
