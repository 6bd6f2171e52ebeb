//! Startup configuration.
//!
//! Values are read once when the application starts and handed to the
//! service; nothing here is consulted per request.

use crate::sampler::Distribution;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;

/// Default upper bound on samples per request.
pub const DEFAULT_MAX_COUNT: u64 = 2_000_000;

/// Configuration for the sequence service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Maximum number of samples one request may ask for.
    pub max_count: u64,
    /// Distribution families the registry accepts.
    pub distributions: Vec<Distribution>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_count: DEFAULT_MAX_COUNT,
            distributions: Distribution::ALL.to_vec(),
        }
    }
}

impl ServiceConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_count == 0 || self.max_count > i64::MAX as u64 {
            return Err(ConfigError::InvalidMaxCount(self.max_count));
        }
        if self.distributions.is_empty() {
            return Err(ConfigError::NoDistributions);
        }
        Ok(())
    }
}

/// HTTP transport configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_addr: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: ([0, 0, 0, 0], 8080).into(),
        }
    }
}

impl ServerConfig {
    /// Creates a config with a custom port.
    pub fn with_port(port: u16) -> Self {
        Self {
            bind_addr: ([0, 0, 0, 0], port).into(),
        }
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// `max_count` is zero or does not fit a signed count.
    #[error("invalid max_count {0} (must be at least 1)")]
    InvalidMaxCount(u64),
    /// No distribution family is enabled.
    #[error("at least one distribution must be enabled")]
    NoDistributions,
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The file is not valid TOML for [`FileConfig`].
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FileConfig {
    /// Service section.
    #[serde(default)]
    pub service: ServiceConfig,
    /// Server section.
    #[serde(default)]
    pub server: ServerConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.service.validate()?;
        Ok(config)
    }
}
