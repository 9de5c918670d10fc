//! Summary workflow tests.
//!
//! The real Ollama client talks to a `wiremock` server that streams
//! newline-delimited JSON, so these cover request shape, reply assembly and
//! every placeholder path end to end.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use student_registry::error::{SUMMARY_INCOMPLETE, SUMMARY_UNAVAILABLE, SUMMARY_UNPARSEABLE};
use student_registry::summary::{ClientConfig, OllamaClient, OllamaSummarizer};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::common::{app, call, student};

fn summarizer_for(server: &MockServer) -> OllamaSummarizer {
    let config = ClientConfig::default()
        .with_url(format!("{}/api/chat", server.uri()))
        .with_timeout_ms(5_000);
    OllamaSummarizer::new(OllamaClient::new(config).unwrap())
}

fn chunk(text: &str, done: bool) -> String {
    let line = json!({
        "model": "llama3.2",
        "message": {"role": "assistant", "content": text},
        "done": done
    });
    format!("{line}\n")
}

async fn summary_for_body(body: String) -> String {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let (router, _) = app(summarizer_for(&server));
    call(&router, "POST", "/students", Some(student(1, "Ada", 20, "ada@x.com"))).await;

    let response = call(&router, "GET", "/students/1/summary", None).await;
    assert_eq!(response.status, StatusCode::OK);
    response.body["summary"].as_str().unwrap().to_string()
}

#[tokio::test]
async fn test_summary_assembles_streamed_reply() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .and(body_partial_json(json!({
            "model": "llama3.2",
            "stream": true,
            "messages": [{
                "role": "user",
                "content": "Generate a summary for a student. Name: Ada, Age: 20, Email: ada@x.com. \
                            Provide a description of the student and any interesting traits."
            }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string(format!(
            "{}{}{}",
            chunk("Ada is ", false),
            chunk("a gifted mathematician.", false),
            chunk("", true)
        )))
        .expect(1)
        .mount(&server)
        .await;

    let (router, _) = app(summarizer_for(&server));
    call(&router, "POST", "/students", Some(student(1, "Ada", 20, "ada@x.com"))).await;

    let response = call(&router, "GET", "/students/1/summary", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        response.body,
        json!({"summary": "Ada is a gifted mathematician."})
    );
}

#[tokio::test]
async fn test_summary_malformed_stream_placeholder() {
    let body = format!("{}{{not json\n", chunk("Ada", false));
    assert_eq!(summary_for_body(body).await, SUMMARY_UNPARSEABLE);
}

#[tokio::test]
async fn test_summary_unterminated_stream_placeholder() {
    let body = chunk("Ada is still thinking", false);
    assert_eq!(summary_for_body(body).await, SUMMARY_INCOMPLETE);
}

#[tokio::test]
async fn test_summary_upstream_error_placeholder() {
    let body = format!("{}\n", json!({"error": "model not found"}));
    assert_eq!(summary_for_body(body).await, SUMMARY_UNAVAILABLE);
}

#[tokio::test]
async fn test_summary_error_status_placeholder() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (router, _) = app(summarizer_for(&server));
    call(&router, "POST", "/students", Some(student(1, "Ada", 20, "ada@x.com"))).await;

    let response = call(&router, "GET", "/students/1/summary", None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["summary"], SUMMARY_UNAVAILABLE);
}

#[tokio::test]
async fn test_summary_missing_student_skips_model() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/chat"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let (router, _) = app(summarizer_for(&server));
    let response = call(&router, "GET", "/students/1/summary", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Student not found.");
}
