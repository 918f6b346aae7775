//! Logging setup.
//!
//! Structured logging via the `tracing` crate. The configured level can be
//! overridden per run with the `SWARMCTL_LOG` environment variable, which
//! accepts a full `EnvFilter` directive.

use crate::error::SwarmError;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Enable colored output (text format only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            color: default_true(),
        }
    }
}

/// Build the subscriber filter from the environment or the config level.
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, SwarmError> {
    let directive = std::env::var("SWARMCTL_LOG").unwrap_or_else(|_| config.level.clone());
    EnvFilter::try_new(&directive)
        .map_err(|e| SwarmError::ConfigError(format!("Invalid log filter '{directive}': {e}")))
}

/// Initialize the logging system. Logs go to stderr so backend stdout can
/// be piped cleanly.
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), SwarmError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);

    let filter = build_env_filter(config)?;
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.color);

    let result = if config.format == "json" {
        Registry::default()
            .with(filter)
            .with(layer.json())
            .try_init()
    } else {
        Registry::default().with(filter).with(layer).try_init()
    };

    result.map_err(|e| SwarmError::ConfigError(format!("Failed to initialize logging: {e}")))
}
