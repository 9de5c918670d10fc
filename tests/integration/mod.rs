//! Integration tests for the student registry HTTP API.
//!
//! These tests drive the full axum router in-process with
//! `tower::ServiceExt::oneshot`. The summary workflows run the real Ollama
//! client against a `wiremock` server.

mod common;
mod error_recovery;
mod summary_workflow;
