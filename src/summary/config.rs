//! Ollama client configuration.

#![allow(clippy::missing_const_for_fn)]

use crate::config::{Config, DEFAULT_OLLAMA_MODEL, DEFAULT_OLLAMA_URL, DEFAULT_REQUEST_TIMEOUT_MS};

/// Channel capacity between the stream reader task and its consumer.
pub const STREAM_CHANNEL_CAPACITY: usize = 32;

/// Client configuration for the Ollama chat API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Full URL of the chat endpoint.
    pub url: String,
    /// Model identifier sent with every request.
    pub model: String,
    /// Request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl ClientConfig {
    /// Create a new client configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a client configuration from application config.
    #[must_use]
    pub fn from_app_config(config: &Config) -> Self {
        Self {
            url: config.ollama_url.clone(),
            model: config.ollama_model.clone(),
            timeout_ms: config.request_timeout_ms,
        }
    }

    /// Set endpoint URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Set model.
    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set timeout in milliseconds.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
            timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}
