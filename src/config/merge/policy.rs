//! Base layer for config composition: built-in defaults.

use crate::config::GraderConfig;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Start a builder whose lowest layer is `GraderConfig::default()`.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    let defaults = Config::try_from(&GraderConfig::default())?;
    Ok(Config::builder().add_source(defaults))
}
