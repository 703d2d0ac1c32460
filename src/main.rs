//! HTTP server entry point for the shift rate engine.

use std::env;

use shift_rate_engine::api::{AppState, create_router};
use shift_rate_engine::config::{ConfigLoader, LoggingConfig};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const CONFIG_ENV: &str = "SHIFT_RATE_ENGINE_CONFIG";
const DEFAULT_CONFIG_PATH: &str = "./config/engine.yaml";

/// `RUST_LOG` wins over the configured filter.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));
    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(error = %err, "failed to listen for shutdown signal");
    }
}

#[tokio::main]
async fn main() -> Result<(), String> {
    let config_path = env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_string());
    let config = ConfigLoader::load(&config_path).map_err(|e| e.to_string())?;

    init_tracing(config.logging());

    let bind_address = config.bind_address();
    info!(
        config_path = %config_path,
        bind_address = %bind_address,
        default_timezone = %config.default_timezone(),
        version = env!("CARGO_PKG_VERSION"),
        "starting shift rate engine"
    );

    let app = create_router(AppState::new(config));
    let listener = tokio::net::TcpListener::bind(bind_address)
        .await
        .map_err(|e| format!("bind {bind_address} failed: {e}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| format!("server failed: {e}"))?;

    info!("shift rate engine stopped");
    Ok(())
}
