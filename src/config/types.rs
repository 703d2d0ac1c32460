//! Configuration types for the engine host.
//!
//! These structures are deserialized from the YAML configuration file.
//! Multipliers have no section here: payroll multipliers are compile-time
//! constants and billing multipliers arrive with each request.

use serde::Deserialize;

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Socket address to listen on (e.g., "127.0.0.1:8080").
    pub bind_address: String,
}

/// Payroll run settings.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Timezone label stamped on runs that do not supply one.
    pub timezone: String,
}

/// Logging settings.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            json: false,
        }
    }
}

fn default_filter() -> String {
    "info".to_string()
}

/// The complete engine configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Server settings.
    pub server: ServerConfig,
    /// Payroll run settings.
    pub payroll: PayrollConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}
