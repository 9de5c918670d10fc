//! Test utilities and mock factories.
//!
//! This module provides shared testing infrastructure:
//! - Mock implementations for traits
//! - Record fixtures
//!
//! Only compiled for tests (`#[cfg(test)]`).

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::error::SummaryError;
use crate::registry::StudentRecord;
use crate::traits::{MockChatClient, MockSummaryProvider};

/// Create a valid record whose name and email derive from `id`.
///
/// # Example
///
/// ```ignore
/// let record = sample_record(7);
/// assert_eq!(record.email, "student7@school.edu");
/// ```
#[must_use]
pub fn sample_record(id: i64) -> StudentRecord {
    StudentRecord::new(id, format!("Student {id}"), 20, format!("student{id}@school.edu"))
}

/// Create a mock summary provider that always returns `summary`.
#[must_use]
pub fn mock_summary_provider(summary: impl Into<String>) -> MockSummaryProvider {
    let summary = summary.into();
    let mut mock = MockSummaryProvider::new();
    mock.expect_summarize()
        .returning(move |_record| summary.clone());
    mock
}

/// Create a mock chat client that returns a fixed reply.
///
/// # Example
///
/// ```ignore
/// let mock = mock_chat_success("Hello!");
/// let result = mock.complete(messages).await;
/// assert_eq!(result.unwrap(), "Hello!");
/// ```
#[must_use]
pub fn mock_chat_success(reply: impl Into<String>) -> MockChatClient {
    let reply = reply.into();
    let mut mock = MockChatClient::new();
    mock.expect_complete()
        .returning(move |_messages| Ok(reply.clone()));
    mock
}

/// Create a mock chat client that returns an error.
#[must_use]
pub fn mock_chat_error(error: SummaryError) -> MockChatClient {
    let mut mock = MockChatClient::new();
    mock.expect_complete()
        .returning(move |_messages| Err(error.clone()));
    mock
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::{ChatClient, SummaryProvider};

    #[test]
    fn test_sample_record_is_valid() {
        let record = sample_record(3);
        assert!(record.validate().is_ok());
        assert_eq!(record.email, "student3@school.edu");
    }

    #[tokio::test]
    async fn test_mock_summary_provider() {
        let mock = mock_summary_provider("Fixed");
        assert_eq!(mock.summarize(&sample_record(1)).await, "Fixed");
    }

    #[tokio::test]
    async fn test_mock_chat_factories() {
        assert_eq!(mock_chat_success("hi").complete(vec![]).await.unwrap(), "hi");
        assert_eq!(
            mock_chat_error(SummaryError::Incomplete)
                .complete(vec![])
                .await
                .unwrap_err(),
            SummaryError::Incomplete
        );
    }
}
