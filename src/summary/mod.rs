//! Student summaries generated by a local chat model.
//!
//! This module provides:
//! - [`OllamaClient`]: streaming client for the Ollama `/api/chat` endpoint
//! - [`OllamaSummarizer`]: [`SummaryProvider`](crate::traits::SummaryProvider)
//!   that turns a record into a prompt and the reply into a summary
//! - Line parsing and reply accumulation for streamed responses
//!
//! # Example
//!
//! ```no_run
//! use student_registry::registry::StudentRecord;
//! use student_registry::summary::{ClientConfig, OllamaClient, OllamaSummarizer};
//! use student_registry::traits::SummaryProvider;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = OllamaClient::new(ClientConfig::default())?;
//! let summarizer = OllamaSummarizer::new(client);
//!
//! let record = StudentRecord::new(1, "Ada", 20, "ada@x.com");
//! let summary = summarizer.summarize(&record).await;
//! println!("{summary}");
//! # Ok(())
//! # }
//! ```

use std::time::Instant;

mod client;
mod config;
mod prompts;
mod streaming;
mod summarizer;
mod types;

pub use client::OllamaClient;
pub use config::{ClientConfig, STREAM_CHANNEL_CAPACITY};
pub use prompts::student_summary_prompt;
pub use streaming::{parse_ndjson_line, SummaryAccumulator};
pub use summarizer::OllamaSummarizer;
pub use types::{ChatMessage, ChatRequest, ChatUsage, StreamEvent};

/// Milliseconds since `start`, saturating at `u64::MAX`.
fn elapsed_ms(start: Instant) -> u64 {
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}
