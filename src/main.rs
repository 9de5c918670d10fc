//! Student registry binary entry point.
//!
//! Serves the HTTP API until Ctrl-C. Logs go to stderr.
//!
//! Coverage is excluded because the main function binds a real socket
//! and waits for a process signal.

// Enable the coverage attribute when running with nightly for llvm-cov exclusions
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use student_registry::config::{Config, DEFAULT_LOG_LEVEL};
use student_registry::error::{AppError, ConfigError};
use student_registry::server::{AppState, HttpServer};
use tracing_subscriber::EnvFilter;

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() {
    // Loads .env first so LOG_LEVEL from the file reaches the filter
    let config = Config::from_env();

    tracing_subscriber::fmt()
        .with_env_filter(
            config
                .as_ref()
                .map_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL), Config::log_filter),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    tracing::info!("student-registry starting...");

    if let Err(e) = run(config).await {
        tracing::error!("{e}");
        std::process::exit(1);
    }

    tracing::info!("student-registry shutdown complete");
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn run(config: Result<Config, ConfigError>) -> Result<(), AppError> {
    let config = config?;

    tracing::info!(
        addr = %config.socket_addr(),
        ollama_url = %config.ollama_url,
        model = %config.ollama_model,
        timeout_ms = config.request_timeout_ms,
        log_level = %config.log_level,
        "Configuration loaded"
    );

    let state = AppState::from_config(config)?;
    HttpServer::new(state).start().await
}
