//! Ollama chat API request and stream types.

#![allow(clippy::missing_const_for_fn)]

use serde::{Deserialize, Serialize};

/// Request to the Ollama `/api/chat` endpoint.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatRequest {
    /// Model identifier (e.g., "llama3.2").
    pub model: String,
    /// Conversation messages.
    pub messages: Vec<ChatMessage>,
    /// Ask the endpoint to stream newline-delimited chunks.
    pub stream: bool,
}

impl ChatRequest {
    /// Create a streaming chat request.
    #[must_use]
    pub fn new(model: impl Into<String>, messages: Vec<ChatMessage>) -> Self {
        Self {
            model: model.into(),
            messages,
            stream: true,
        }
    }

    /// Enable or disable streaming.
    #[must_use]
    pub fn with_streaming(mut self, stream: bool) -> Self {
        self.stream = stream;
        self
    }
}

/// A message in the conversation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChatMessage {
    /// Role: "system", "user" or "assistant".
    pub role: String,
    /// Message text.
    pub content: String,
}

impl ChatMessage {
    /// Create a message.
    #[must_use]
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }
}

/// Token counts reported on the final chunk.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ChatUsage {
    /// Tokens in the prompt.
    pub prompt_tokens: u32,
    /// Tokens generated.
    pub completion_tokens: u32,
}

impl ChatUsage {
    /// Create usage info.
    #[must_use]
    pub const fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
        }
    }

    /// Total tokens.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.prompt_tokens + self.completion_tokens
    }
}

/// One decoded line of a streamed chat response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// A text fragment of the reply.
    Fragment {
        /// Text content.
        text: String,
    },
    /// The reply is complete.
    Done {
        /// Why generation stopped, when reported.
        done_reason: Option<String>,
        /// Token usage, when reported.
        usage: ChatUsage,
    },
    /// The endpoint reported an error.
    Error {
        /// Error text.
        error: String,
    },
}

impl StreamEvent {
    /// Returns true for the completion signal.
    #[must_use]
    pub const fn is_done(&self) -> bool {
        matches!(self, Self::Done { .. })
    }
}
