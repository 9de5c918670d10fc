//! Streaming support for the Ollama chat API.
//!
//! This module provides:
//! - Newline-delimited JSON line parsing
//! - Accumulator for assembling the complete reply

use serde::Deserialize;

use super::types::{ChatUsage, StreamEvent};
use crate::error::SummaryError;

/// Parse one line of a streamed chat response into a `StreamEvent`.
///
/// Blank lines yield `None`.
#[must_use]
pub fn parse_ndjson_line(line: &str) -> Option<Result<StreamEvent, SummaryError>> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    Some(parse_chunk(line))
}

fn parse_chunk(data: &str) -> Result<StreamEvent, SummaryError> {
    let chunk: RawChunk =
        serde_json::from_str(data).map_err(|e| SummaryError::MalformedResponse {
            message: format!("Failed to parse stream chunk: {e}"),
        })?;

    if let Some(error) = chunk.error {
        return Ok(StreamEvent::Error { error });
    }

    if chunk.done {
        return Ok(StreamEvent::Done {
            done_reason: chunk.done_reason,
            usage: ChatUsage::new(
                chunk.prompt_eval_count.unwrap_or(0),
                chunk.eval_count.unwrap_or(0),
            ),
        });
    }

    let text = chunk
        .message
        .and_then(|m| m.content)
        .unwrap_or_default();
    Ok(StreamEvent::Fragment { text })
}

/// Raw chunk as sent by the endpoint.
#[derive(Debug, Deserialize)]
struct RawChunk {
    #[serde(default)]
    message: Option<RawMessage>,
    #[serde(default)]
    done: bool,
    #[serde(default)]
    done_reason: Option<String>,
    #[serde(default)]
    prompt_eval_count: Option<u32>,
    #[serde(default)]
    eval_count: Option<u32>,
    #[serde(default)]
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Accumulator for building a complete reply from stream events.
///
/// Fragments after the completion signal are ignored.
#[derive(Debug, Default)]
pub struct SummaryAccumulator {
    text: String,
    fragments: usize,
    done_reason: Option<String>,
    usage: ChatUsage,
    complete: bool,
}

impl SummaryAccumulator {
    /// Create a new accumulator.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Process a stream event.
    pub fn process(&mut self, event: StreamEvent) {
        if self.complete {
            return;
        }
        match event {
            StreamEvent::Fragment { text } => {
                self.text.push_str(&text);
                self.fragments += 1;
            }
            StreamEvent::Done { done_reason, usage } => {
                self.done_reason = done_reason;
                self.usage = usage;
                self.complete = true;
            }
            StreamEvent::Error { .. } => {
                // Caller handles errors
            }
        }
    }

    /// Get the accumulated text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Consume the accumulator, returning the text if the stream completed.
    ///
    /// # Errors
    ///
    /// Returns [`SummaryError::Incomplete`] if no completion signal was seen.
    pub fn finish(self) -> Result<String, SummaryError> {
        if self.complete {
            Ok(self.text)
        } else {
            Err(SummaryError::Incomplete)
        }
    }

    /// Number of fragments received.
    #[must_use]
    pub const fn fragments(&self) -> usize {
        self.fragments
    }

    /// Get the done reason.
    #[must_use]
    pub fn done_reason(&self) -> Option<&str> {
        self.done_reason.as_deref()
    }

    /// Get the usage.
    #[must_use]
    pub const fn usage(&self) -> &ChatUsage {
        &self.usage
    }

    /// Check if the stream is complete.
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.complete
    }
}
