//! Server types and shared state.
//!
//! This module defines the application state shared by every route handler
//! and the small JSON bodies the API returns.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::error::AppError;
use crate::registry::StudentRegistry;
use crate::summary::{ClientConfig, OllamaClient, OllamaSummarizer};
use crate::traits::SummaryProvider;

/// Message returned after a successful delete.
pub const DELETED_DETAIL: &str = "Student deleted successfully";

/// Shared application state for all route handlers.
#[derive(Clone)]
pub struct AppState {
    /// The student registry.
    pub registry: Arc<StudentRegistry>,
    /// Summary generator.
    pub summarizer: Arc<dyn SummaryProvider>,
    /// Server configuration.
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new application state.
    #[must_use]
    pub fn new(
        registry: StudentRegistry,
        summarizer: impl SummaryProvider + 'static,
        config: Config,
    ) -> Self {
        Self {
            registry: Arc::new(registry),
            summarizer: Arc::new(summarizer),
            config: Arc::new(config),
        }
    }

    /// Creates an empty registry with an Ollama-backed summarizer.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Summary`] if the HTTP client cannot be built.
    pub fn from_config(config: Config) -> Result<Self, AppError> {
        let client = OllamaClient::new(ClientConfig::from_app_config(&config))?;
        Ok(Self::new(
            StudentRegistry::new(),
            OllamaSummarizer::new(client),
            config,
        ))
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Body carrying a human-readable message, used for errors and deletes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailResponse {
    /// The message.
    pub detail: String,
}

impl DetailResponse {
    /// Create a detail body.
    #[must_use]
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
        }
    }
}

/// Body of the summary endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResponse {
    /// Generated summary or placeholder text.
    pub summary: String,
}

/// Body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always "ok" while the server is serving.
    pub status: String,
}
