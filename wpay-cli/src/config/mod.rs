//! Configuration module for the `wpay` CLI.
//!
//! Handles loading configuration from the TOML file, CLI arguments,
//! and environment variables.

pub mod file;

use crate::config::file::FileConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use url::Url;
use wpay_sdk::config::ClientConfig;

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Values given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    overrides: Overrides,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, overrides: Overrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file, if it exists
    /// 2. Apply CLI and environment overrides
    /// 3. Validate the configuration
    /// 4. Build the SDK client configuration
    pub fn load(&self) -> Result<ClientConfig, ConfigError> {
        let mut file_config = if self.config_path.exists() {
            let content = std::fs::read_to_string(&self.config_path)?;
            toml::from_str(&content)?
        } else {
            tracing::debug!(path = ?self.config_path, "Config file not found, using defaults");
            FileConfig::default()
        };

        if let Some(api_key) = &self.overrides.api_key {
            file_config.client.api_key = api_key.clone();
        }
        if let Some(base_url) = &self.overrides.base_url {
            file_config.client.base_url = base_url.clone();
        }

        Self::build(file_config)
    }

    fn build(file_config: FileConfig) -> Result<ClientConfig, ConfigError> {
        let section = file_config.client;
        let base_url = Url::parse(&section.base_url)?;
        if base_url.cannot_be_a_base() {
            return Err(ConfigError::ValidationError(format!(
                "base url {base_url} cannot be used as a base"
            )));
        }

        // An empty key is passed through; the SDK reports it per operation.
        let mut config = ClientConfig::new(section.api_key).with_base_url(base_url);
        if let Some(seconds) = section.default_timeout_seconds {
            config = config.with_default_timeout(seconds);
        }
        Ok(config)
    }
}
