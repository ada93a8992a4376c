//! Configuration for the grader.
//!
//! Layered with the `config` crate: built-in defaults, then the global file
//! (`$XDG_CONFIG_HOME/hwgrade/config.toml`), then `<workspace>/hwgrade.toml`,
//! then `HWGRADE__SECTION__KEY` environment variables.

pub mod facade;
pub mod merge;
pub mod paths;
pub mod sources;

pub use facade::ConfigLoader;

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};

/// Effective grader configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraderConfig {
    #[serde(default)]
    pub grading: GradingConfig,
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl GraderConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        self.grading.validate()
    }
}

/// What to do when the grading backend cannot produce a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FallbackMode {
    /// Report the failure.
    #[default]
    None,
    /// Substitute the built-in demo result.
    Demo,
}

/// Grading backend settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradingConfig {
    /// URL receiving the multipart submission.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default)]
    pub fallback: FallbackMode,

    /// Simulated latency of the demo grader.
    #[serde(default = "default_demo_delay_ms")]
    pub demo_delay_ms: u64,
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_demo_delay_ms() -> u64 {
    3000
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: default_timeout_secs(),
            fallback: FallbackMode::None,
            demo_delay_ms: default_demo_delay_ms(),
        }
    }
}

impl GradingConfig {
    pub fn validate(&self) -> Result<(), ApiError> {
        if let Some(endpoint) = &self.endpoint {
            if !endpoint_url_is_valid(endpoint) {
                return Err(ApiError::ConfigError(format!(
                    "Invalid grading endpoint URL: {}",
                    endpoint
                )));
            }
        }
        if self.timeout_secs == 0 {
            return Err(ApiError::ConfigError(
                "grading.timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// True when `endpoint` has an http(s) scheme and a non-empty host.
pub fn endpoint_url_is_valid(endpoint: &str) -> bool {
    let endpoint = endpoint.trim();
    let Some(rest) = endpoint
        .strip_prefix("http://")
        .or_else(|| endpoint.strip_prefix("https://"))
    else {
        return false;
    };

    if rest.is_empty() || rest.chars().any(char::is_whitespace) {
        return false;
    }

    let authority = rest.split('/').next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or(authority);
    let host = if host_port.starts_with('[') {
        let Some(end_bracket) = host_port.find(']') else {
            return false;
        };
        &host_port[1..end_bracket]
    } else {
        host_port.split(':').next().unwrap_or_default()
    };

    !host.is_empty()
}

/// How directories are walked when selecting files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Include entries whose name starts with `.`.
    #[serde(default)]
    pub include_hidden: bool,

    #[serde(default)]
    pub follow_symlinks: bool,

    /// Maximum walk depth below each selected directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_depth: Option<usize>,
}

/// Terminal rendering settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Folders shallower than this are shown expanded.
    #[serde(default = "default_expand_depth")]
    pub expand_depth: usize,

    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_expand_depth() -> usize {
    2
}

fn default_true() -> bool {
    true
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            expand_depth: default_expand_depth(),
            color: default_true(),
        }
    }
}
