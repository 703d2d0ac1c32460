//! Configuration loading for the engine host.
//!
//! This module loads server, payroll run and logging settings from a YAML
//! file. The rate computation itself takes no configuration.
//!
//! # Example
//!
//! ```no_run
//! use shift_rate_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/engine.yaml").unwrap();
//! println!("Default timezone: {}", config.default_timezone());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{EngineConfig, LoggingConfig, PayrollConfig, ServerConfig};
