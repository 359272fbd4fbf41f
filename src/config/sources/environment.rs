//! Environment variable source: MODIFIERS__* with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// `MODIFIERS__SOURCE__BASE_URL` sets `source.base_url`; `MODIFIERS__CLUSTERS`
/// takes a comma-separated list.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("MODIFIERS")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("clusters"),
    );
    Ok(builder)
}
