//! Environment variable source: HWGRADE_* prefix with __ separator

use config::builder::DefaultState;
use config::ConfigBuilder;
use config::ConfigError;
use config::Environment;

/// Add environment variable overlay to builder.
/// Uses HWGRADE prefix and __ as separator, e.g. `HWGRADE__GRADING__ENDPOINT`.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let builder = builder.add_source(
        Environment::with_prefix("HWGRADE")
            .separator("__")
            .try_parsing(true),
    );
    Ok(builder)
}
