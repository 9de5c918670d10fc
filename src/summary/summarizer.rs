//! Student summary generation.

use std::time::Instant;

use async_trait::async_trait;

use super::client::OllamaClient;
use super::elapsed_ms;
use super::prompts::student_summary_prompt;
use super::types::ChatMessage;
use crate::registry::StudentRecord;
use crate::traits::{ChatClient, SummaryProvider};

/// Summary provider backed by a chat model.
///
/// Failures never reach the caller. Each one is logged and replaced by the
/// matching placeholder from [`crate::error::SummaryError::placeholder`].
#[derive(Debug, Clone)]
pub struct OllamaSummarizer<C: ChatClient = OllamaClient> {
    client: C,
}

impl<C: ChatClient> OllamaSummarizer<C> {
    /// Create a summarizer over the given chat client.
    #[must_use]
    pub const fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: ChatClient> SummaryProvider for OllamaSummarizer<C> {
    async fn summarize(&self, record: &StudentRecord) -> String {
        let start = Instant::now();
        let messages = vec![ChatMessage::user(student_summary_prompt(record))];

        match self.client.complete(messages).await {
            Ok(summary) => {
                tracing::info!(
                    id = record.id,
                    chars = summary.len(),
                    elapsed_ms = elapsed_ms(start),
                    "Summary generated"
                );
                summary
            }
            Err(e) => {
                tracing::warn!(
                    id = record.id,
                    error = %e,
                    elapsed_ms = elapsed_ms(start),
                    "Summary generation failed"
                );
                e.placeholder().to_string()
            }
        }
    }
}
