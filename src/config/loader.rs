//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! host configuration from a YAML file.

use std::fs;
use std::net::SocketAddr;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{EngineConfig, LoggingConfig};

/// Loads and provides access to the engine configuration.
///
/// # File Format
///
/// ```text
/// server:
///   bind_address: "127.0.0.1:8080"
/// payroll:
///   timezone: "America/Chicago"
/// logging:          # optional
///   filter: "info"
///   json: false
/// ```
///
/// # Example
///
/// ```no_run
/// use shift_rate_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/engine.yaml")?;
/// println!("Listening on {}", loader.bind_address());
/// # Ok::<(), shift_rate_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: EngineConfig,
    bind_address: SocketAddr,
}

impl ConfigLoader {
    /// Loads configuration from the specified file.
    ///
    /// Returns an error if the file is missing (`ConfigNotFound`), is not
    /// valid YAML or lacks a required key (`ConfigParseError`), or holds a
    /// value that cannot be used (`ConfigInvalid`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml(&content, &path_str)
    }

    /// Parses configuration from YAML text. `source` names the text in errors.
    pub fn from_yaml(content: &str, source: &str) -> EngineResult<Self> {
        let config: EngineConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Validates an already-built configuration.
    pub fn from_config(config: EngineConfig) -> EngineResult<Self> {
        let bind_address: SocketAddr =
            config
                .server
                .bind_address
                .parse()
                .map_err(|e: std::net::AddrParseError| EngineError::ConfigInvalid {
                    field: "server.bind_address".to_string(),
                    message: format!("'{}': {}", config.server.bind_address, e),
                })?;

        if config.payroll.timezone.trim().is_empty() {
            return Err(EngineError::ConfigInvalid {
                field: "payroll.timezone".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        Ok(Self {
            config,
            bind_address,
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The address the HTTP server binds to.
    pub fn bind_address(&self) -> SocketAddr {
        self.bind_address
    }

    /// Timezone label for runs that do not specify one.
    pub fn default_timezone(&self) -> &str {
        &self.config.payroll.timezone
    }

    /// Logging settings.
    pub fn logging(&self) -> &LoggingConfig {
        &self.config.logging
    }
}
