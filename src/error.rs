//! Error types for the swarm command-translation layer.

use thiserror::Error;

/// Errors surfaced by command translation and backend invocation.
///
/// Validation failures (`InvalidParameter`) are fatal to the current
/// command and carry a user-facing, command-specific message. Backend
/// execution failures are owned by the invoker and propagated upward
/// unmodified; the translation core never re-interprets them.
#[derive(Debug, Error)]
pub enum SwarmError {
    #[error("{0}")]
    InvalidParameter(String),

    #[error("Backend command exited with status {status}: {stderr}")]
    BackendFailed { status: i32, stderr: String },

    #[error("Failed to run backend '{program}': {source}")]
    BackendUnavailable {
        program: String,
        source: std::io::Error,
    },

    #[error("Failed to render command descriptor: {0}")]
    Render(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<toml::de::Error> for SwarmError {
    fn from(err: toml::de::Error) -> Self {
        SwarmError::ConfigError(err.to_string())
    }
}
