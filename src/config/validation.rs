//! Configuration validation.
//!
//! Range and format checks applied after the environment has been read.

use super::Config;
use crate::error::ConfigError;

/// Minimum allowed timeout in milliseconds (1 second).
pub const MIN_TIMEOUT_MS: u64 = 1000;

/// Maximum allowed timeout in milliseconds (10 minutes).
pub const MAX_TIMEOUT_MS: u64 = 600_000;

/// Validate configuration values.
///
/// # Errors
///
/// Returns [`ConfigError::InvalidValue`] if:
/// - `HOST` or `OLLAMA_MODEL` is empty
/// - `PORT` is zero
/// - `OLLAMA_API_URL` is not an `http://` or `https://` URL
/// - `REQUEST_TIMEOUT_MS` is outside 1000..=600000
#[must_use = "validation result should be checked"]
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    if config.host.trim().is_empty() {
        return Err(invalid("HOST", "must not be empty"));
    }

    if config.port == 0 {
        return Err(invalid("PORT", "must not be zero"));
    }

    if !(config.ollama_url.starts_with("http://") || config.ollama_url.starts_with("https://")) {
        return Err(invalid("OLLAMA_API_URL", "must be an http(s) URL"));
    }

    if config.ollama_model.trim().is_empty() {
        return Err(invalid("OLLAMA_MODEL", "must not be empty"));
    }

    if !(MIN_TIMEOUT_MS..=MAX_TIMEOUT_MS).contains(&config.request_timeout_ms) {
        return Err(ConfigError::InvalidValue {
            var: "REQUEST_TIMEOUT_MS".into(),
            reason: format!("must be between {MIN_TIMEOUT_MS} and {MAX_TIMEOUT_MS} ms"),
        });
    }

    Ok(())
}

fn invalid(var: &str, reason: &str) -> ConfigError {
    ConfigError::InvalidValue {
        var: var.into(),
        reason: reason.into(),
    }
}
