//! Trait definitions for mockable dependencies.
//!
//! This module defines traits for:
//! - [`ChatClient`]: chat completion endpoint abstraction
//! - [`SummaryProvider`]: student summary generation
//!
//! # Mocking
//!
//! All traits are annotated with `#[cfg_attr(test, mockall::automock)]`
//! which generates mock implementations automatically for testing.

use async_trait::async_trait;

use crate::error::SummaryError;
use crate::registry::StudentRecord;
use crate::summary::ChatMessage;

/// Chat completion client trait for mocking.
///
/// Abstracts the language-model endpoint so summary generation can be tested
/// without a running model.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatClient: Send + Sync {
    /// Send the conversation and return the assembled reply text.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError`] if the endpoint cannot be reached, reports an
    /// error, or streams an undecodable or unterminated reply.
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, SummaryError>;
}

/// Summary provider trait.
///
/// Produces a natural-language description of a student. This call never
/// fails: failures resolve to one of the placeholder strings in
/// [`crate::error`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SummaryProvider: Send + Sync {
    /// Describe the given student.
    async fn summarize(&self, record: &StudentRecord) -> String;
}
