//! Configuration System
//!
//! TOML-backed configuration for the backend program and logging. Lookup
//! precedence: explicit file > workspace file > XDG config file > defaults.

use crate::error::SwarmError;
use crate::logging::LoggingConfig;
use directories::BaseDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Workspace-level configuration file name.
pub const WORKSPACE_CONFIG_FILE: &str = "swarmctl.toml";

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SwarmctlConfig {
    /// Backend invocation settings
    #[serde(default)]
    pub backend: BackendConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend invocation settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Backend program to invoke (e.g. "docker", "podman")
    #[serde(default = "default_program")]
    pub program: String,
}

fn default_program() -> String {
    "docker".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            program: default_program(),
        }
    }
}

impl SwarmctlConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SwarmError> {
        if self.backend.program.trim().is_empty() {
            return Err(SwarmError::ConfigError(
                "Backend program cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}

/// Loads configuration with the documented precedence.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from an explicit TOML file.
    pub fn load_from_file(path: &Path) -> Result<SwarmctlConfig, SwarmError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SwarmError::ConfigError(format!("Failed to read {}: {}", path.display(), e))
        })?;
        let config: SwarmctlConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration for a workspace: the workspace file wins over the
    /// XDG file; defaults apply when neither exists.
    pub fn load(workspace_root: &Path) -> Result<SwarmctlConfig, SwarmError> {
        let workspace_file = workspace_root.join(WORKSPACE_CONFIG_FILE);
        if workspace_file.exists() {
            return Self::load_from_file(&workspace_file);
        }

        if let Some(xdg_file) = Self::xdg_config_path() {
            if xdg_file.exists() {
                return Self::load_from_file(&xdg_file);
            }
            tracing::debug!(path = %xdg_file.display(), "no XDG config file, using defaults");
        }

        Ok(SwarmctlConfig::default())
    }

    /// Path of the XDG-level config file, if a home directory is known.
    pub fn xdg_config_path() -> Option<PathBuf> {
        BaseDirs::new().map(|dirs| dirs.config_dir().join("swarmctl").join("config.toml"))
    }
}
