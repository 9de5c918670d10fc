//! Configuration management.
//!
//! This module handles:
//! - Environment variable loading (with optional `.env` file)
//! - Configuration validation
//! - Default value handling
//!
//! # Example
//!
//! ```
//! use student_registry::config::{Config, DEFAULT_OLLAMA_MODEL};
//!
//! // Create a config directly (use Config::from_env() in production)
//! let config = Config {
//!     host: "127.0.0.1".to_string(),
//!     port: 8000,
//!     ollama_url: "http://localhost:11434/api/chat".to_string(),
//!     ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
//!     request_timeout_ms: 120_000,
//!     log_level: "info".to_string(),
//!     cors_origins: Vec::new(),
//! };
//!
//! assert_eq!(config.socket_addr(), "127.0.0.1:8000");
//! ```

mod validation;

pub use validation::{validate_config, MAX_TIMEOUT_MS, MIN_TIMEOUT_MS};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;

/// Default bind host.
pub const DEFAULT_HOST: &str = "127.0.0.1";

/// Default bind port.
pub const DEFAULT_PORT: u16 = 8000;

/// Default Ollama chat endpoint.
pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434/api/chat";

/// Default Ollama model.
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3.2";

/// Default summary request timeout in milliseconds.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 120_000;

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Application configuration.
///
/// Use [`Config::from_env`] to load configuration from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Host the HTTP server binds to.
    pub host: String,
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Ollama chat endpoint URL.
    pub ollama_url: String,
    /// Ollama model used for summaries.
    pub ollama_model: String,
    /// Summary request timeout in milliseconds.
    pub request_timeout_ms: u64,
    /// Log level (error, warn, info, debug, trace) or an `EnvFilter` directive.
    pub log_level: String,
    /// Allowed CORS origins. Empty means any origin.
    pub cors_origins: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables (with defaults):
    /// - `HOST`: Bind host (default: `127.0.0.1`)
    /// - `PORT`: Bind port (default: `8000`)
    /// - `OLLAMA_API_URL`: Chat endpoint (default: `http://localhost:11434/api/chat`)
    /// - `OLLAMA_MODEL`: Model name (default: `llama3.2`)
    /// - `REQUEST_TIMEOUT_MS`: Summary request timeout (default: `120000`)
    /// - `LOG_LEVEL`: Logging level (default: `info`)
    /// - `CORS_ORIGINS`: Comma separated origin list (default: any origin)
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a numeric variable does not parse or any
    /// value fails validation (see [`validate_config`]).
    #[must_use = "configuration should be used"]
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors)
        let _ = dotenvy::dotenv();

        let host = std::env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.into());
        let port = parse_env_u16("PORT", DEFAULT_PORT)?;
        let ollama_url =
            std::env::var("OLLAMA_API_URL").unwrap_or_else(|_| DEFAULT_OLLAMA_URL.into());
        let ollama_model =
            std::env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_OLLAMA_MODEL.into());
        let request_timeout_ms = parse_env_u64("REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS)?;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| DEFAULT_LOG_LEVEL.into());
        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|raw| parse_origins(&raw))
            .unwrap_or_default();

        let config = Self {
            host,
            port,
            ollama_url,
            ollama_model,
            request_timeout_ms,
            log_level,
            cors_origins,
        };

        validate_config(&config)?;
        Ok(config)
    }

    /// The `host:port` string the server binds to.
    #[must_use]
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Build the tracing filter from `log_level`.
    ///
    /// An unparseable directive falls back to [`DEFAULT_LOG_LEVEL`].
    #[must_use]
    pub fn log_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.log_level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            ollama_url: DEFAULT_OLLAMA_URL.to_string(),
            ollama_model: DEFAULT_OLLAMA_MODEL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            cors_origins: Vec::new(),
        }
    }
}

/// Split a comma separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}

/// Parse an environment variable as u64, using a default if not set.
fn parse_env_u64(name: &str, default: u64) -> Result<u64, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a positive integer".into(),
        })
    })
}

/// Parse an environment variable as u16, using a default if not set.
fn parse_env_u16(name: &str, default: u16) -> Result<u16, ConfigError> {
    std::env::var(name).map_or(Ok(default), |val| {
        val.parse().map_err(|_| ConfigError::InvalidValue {
            var: name.into(),
            reason: "must be a port number".into(),
        })
    })
}
