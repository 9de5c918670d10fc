//! Ollama chat API client.
//!
//! This module provides:
//! - HTTP client for the `/api/chat` endpoint
//! - A streamed reader that yields decoded chunks over a channel
//! - Error classification for transport and stream failures

#![allow(clippy::missing_errors_doc)]

use std::time::{Duration, Instant};

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::Client;
use tokio::sync::mpsc;

use super::config::{ClientConfig, STREAM_CHANNEL_CAPACITY};
use super::elapsed_ms;
use super::streaming::{parse_ndjson_line, SummaryAccumulator};
use super::types::{ChatMessage, ChatRequest, StreamEvent};
use crate::error::SummaryError;
use crate::traits::ChatClient;

type EventSender = mpsc::Sender<Result<StreamEvent, SummaryError>>;

/// Ollama chat API client.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: Client,
    config: ClientConfig,
}

impl OllamaClient {
    /// Create a new Ollama client.
    pub fn new(config: ClientConfig) -> Result<Self, SummaryError> {
        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| SummaryError::Network {
                message: format!("Failed to create HTTP client: {e}"),
            })?;

        Ok(Self { client, config })
    }

    /// Get the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a streaming chat request.
    ///
    /// Returns a channel receiver that yields `StreamEvent`s as lines arrive.
    /// The sequence ends after the first `StreamEvent::Done`, after the first
    /// error, or when the response body ends. Endpoint-reported errors are
    /// delivered as [`SummaryError::Upstream`].
    ///
    /// # Errors
    ///
    /// Returns `SummaryError` if the connection cannot be established or the
    /// endpoint answers with a non-success status.
    pub async fn chat_stream(
        &self,
        request: ChatRequest,
    ) -> Result<mpsc::Receiver<Result<StreamEvent, SummaryError>>, SummaryError> {
        let request = request.with_streaming(true);
        let url = &self.config.url;
        let start = Instant::now();

        tracing::debug!(
            url = %url,
            model = %request.model,
            timeout_ms = self.config.timeout_ms,
            "Starting streaming chat request"
        );

        let response = self
            .client
            .post(url)
            .header("content-type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(&e))?;

        let status = response.status();
        tracing::debug!(
            url = %url,
            status = %status,
            elapsed_ms = elapsed_ms(start),
            "Chat response headers received"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SummaryError::Network {
                message: format!("Status {status}: {body}"),
            });
        }

        let (tx, rx) = mpsc::channel(STREAM_CHANNEL_CAPACITY);
        let timeout_ms = self.config.timeout_ms;
        let mut stream = response.bytes_stream();

        tokio::spawn(async move {
            let mut buffer: Vec<u8> = Vec::new();

            while let Some(chunk_result) = stream.next().await {
                let bytes = match chunk_result {
                    Ok(bytes) => bytes,
                    Err(e) => {
                        let err = if e.is_timeout() {
                            SummaryError::Timeout { timeout_ms }
                        } else {
                            SummaryError::Network {
                                message: e.to_string(),
                            }
                        };
                        let _ = tx.send(Err(err)).await;
                        return;
                    }
                };

                buffer.extend_from_slice(&bytes);

                // Process complete lines
                while let Some(newline_pos) = buffer.iter().position(|b| *b == b'\n') {
                    let line: Vec<u8> = buffer.drain(..=newline_pos).collect();
                    if !forward_line(&tx, &line).await {
                        return;
                    }
                }
            }

            // Trailing line without a newline terminator
            if !buffer.is_empty() {
                forward_line(&tx, &buffer).await;
            }
        });

        Ok(rx)
    }

    /// Send a chat request and assemble the streamed reply.
    ///
    /// # Errors
    ///
    /// Returns the first stream error, or [`SummaryError::Incomplete`] if the
    /// stream ends without a completion chunk.
    pub async fn chat(&self, request: ChatRequest) -> Result<String, SummaryError> {
        let start = Instant::now();
        let mut rx = self.chat_stream(request).await?;
        let mut accumulator = SummaryAccumulator::new();

        while let Some(event) = rx.recv().await {
            let event = event?;
            let done = event.is_done();
            accumulator.process(event);
            if done {
                break;
            }
        }

        tracing::debug!(
            fragments = accumulator.fragments(),
            complete = accumulator.is_complete(),
            tokens = accumulator.usage().total(),
            elapsed_ms = elapsed_ms(start),
            "Chat stream drained"
        );

        accumulator.finish()
    }

    fn classify(&self, e: &reqwest::Error) -> SummaryError {
        if e.is_timeout() {
            tracing::error!(url = %self.config.url, timeout_ms = self.config.timeout_ms, "Chat request timed out");
            SummaryError::Timeout {
                timeout_ms: self.config.timeout_ms,
            }
        } else {
            tracing::error!(url = %self.config.url, error = %e, "Chat request failed");
            SummaryError::Network {
                message: e.to_string(),
            }
        }
    }
}

/// Decode one raw line and forward it.
///
/// Returns false when the reader should stop: the receiver is gone, or the
/// line was terminal (completion, endpoint error, decoding failure).
async fn forward_line(tx: &EventSender, raw: &[u8]) -> bool {
    let line = match std::str::from_utf8(raw) {
        Ok(line) => line,
        Err(e) => {
            let _ = tx
                .send(Err(SummaryError::MalformedResponse {
                    message: format!("Invalid UTF-8 in stream: {e}"),
                }))
                .await;
            return false;
        }
    };

    let Some(event_result) = parse_ndjson_line(line) else {
        return true;
    };

    match event_result {
        Ok(StreamEvent::Error { error }) => {
            let _ = tx.send(Err(SummaryError::Upstream { message: error })).await;
            false
        }
        Ok(event) => {
            let done = event.is_done();
            tx.send(Ok(event)).await.is_ok() && !done
        }
        Err(e) => {
            let _ = tx.send(Err(e)).await;
            false
        }
    }
}

#[async_trait]
impl ChatClient for OllamaClient {
    async fn complete(&self, messages: Vec<ChatMessage>) -> Result<String, SummaryError> {
        let request = ChatRequest::new(&self.config.model, messages);
        self.chat(request).await
    }
}
