//! Error types for the student registry service.
//!
//! This module defines a hierarchical error system:
//! - [`AppError`]: Top-level application errors
//! - [`RegistryError`]: Caller-input errors raised by the registry
//! - [`SummaryError`]: Failures talking to the summary endpoint
//! - [`ConfigError`]: Configuration errors
//!
//! All errors implement `Send + Sync` for async compatibility.

use thiserror::Error;

/// Placeholder returned when the summary endpoint cannot be reached.
pub const SUMMARY_UNAVAILABLE: &str = "Error generating summary";

/// Placeholder returned when the summary stream cannot be decoded.
pub const SUMMARY_UNPARSEABLE: &str = "Error parsing response";

/// Placeholder returned when the summary stream ends before completion.
pub const SUMMARY_INCOMPLETE: &str = "Response still being processed.";

/// Top-level application error.
///
/// This is the error returned by process-level entry points
/// (configuration loading, server startup).
#[derive(Debug, Error)]
pub enum AppError {
    /// The summary client could not be built.
    #[error("Summary error: {0}")]
    Summary(#[from] SummaryError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// HTTP server failed to bind or serve.
    #[error("Server error: {message}")]
    Server {
        /// Description of the server failure.
        message: String,
    },
}

/// Registry errors.
///
/// Every variant describes a caller-input condition. A failing registry
/// operation leaves the registry unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// A record with this id already exists.
    #[error("Student with this ID already exists.")]
    DuplicateId {
        /// The conflicting id.
        id: i64,
    },

    /// A record with this email already exists.
    #[error("Student with this email already exists.")]
    DuplicateEmail {
        /// The conflicting email.
        email: String,
    },

    /// No record has this id.
    #[error("Student not found.")]
    NotFound {
        /// The id that was looked up.
        id: i64,
    },

    /// The replacement email belongs to another record.
    #[error("Email already in use.")]
    EmailInUse {
        /// The conflicting email.
        email: String,
    },

    /// A field failed validation.
    #[error("Invalid value for {field}: {reason}")]
    InvalidRecord {
        /// The offending field.
        field: String,
        /// Why the value is invalid.
        reason: String,
    },
}

impl RegistryError {
    /// Returns true if the error means the target record does not exist.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Summary endpoint errors.
///
/// These never reach API callers directly; see [`SummaryError::placeholder`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SummaryError {
    /// Network communication error or non-success HTTP status.
    #[error("Network error: {message}")]
    Network {
        /// Description of the network error.
        message: String,
    },

    /// Request timed out.
    #[error("Request timeout after {timeout_ms}ms")]
    Timeout {
        /// Timeout duration in milliseconds.
        timeout_ms: u64,
    },

    /// The endpoint reported an error inside the stream.
    #[error("Upstream error: {message}")]
    Upstream {
        /// Error text reported by the endpoint.
        message: String,
    },

    /// A streamed line could not be decoded.
    #[error("Malformed response: {message}")]
    MalformedResponse {
        /// Description of the decoding failure.
        message: String,
    },

    /// The stream closed without a completion chunk.
    #[error("Stream ended before completion")]
    Incomplete,
}

impl SummaryError {
    /// The text returned to callers in place of a summary.
    #[must_use]
    pub const fn placeholder(&self) -> &'static str {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::Upstream { .. } => {
                SUMMARY_UNAVAILABLE
            }
            Self::MalformedResponse { .. } => SUMMARY_UNPARSEABLE,
            Self::Incomplete => SUMMARY_INCOMPLETE,
        }
    }
}

/// Configuration errors.
///
/// These errors represent failures in configuration loading and validation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Configuration value is invalid.
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue {
        /// The variable name.
        var: String,
        /// Why the value is invalid.
        reason: String,
    },
}
