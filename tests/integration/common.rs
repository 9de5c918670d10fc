//! Shared helpers for HTTP workflow tests.

#![allow(clippy::unwrap_used, clippy::expect_used, dead_code)]

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde::de::DeserializeOwned;
use serde_json::Value;
use student_registry::config::Config;
use student_registry::registry::{StudentRecord, StudentRegistry};
use student_registry::server::{AppState, HttpServer};
use student_registry::traits::SummaryProvider;
use tower::ServiceExt;

/// Summary provider that echoes the student's name.
#[derive(Debug, Default)]
pub struct EchoSummary;

#[async_trait]
impl SummaryProvider for EchoSummary {
    async fn summarize(&self, record: &StudentRecord) -> String {
        format!("{} is a student.", record.name)
    }
}

/// Build a router and keep a handle to its state.
pub fn app(summarizer: impl SummaryProvider + 'static) -> (Router, AppState) {
    let state = AppState::new(StudentRegistry::new(), summarizer, Config::default());
    (HttpServer::new(state.clone()).router(), state)
}

/// Response status and decoded JSON body.
pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestResponse {
    pub fn json<T: DeserializeOwned>(&self) -> T {
        serde_json::from_value(self.body.clone()).unwrap()
    }

    pub fn detail(&self) -> &str {
        self.body["detail"].as_str().unwrap()
    }
}

/// Send a request with an optional JSON body.
pub async fn call(router: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(value) => {
            builder = builder.header("content-type", "application/json");
            Body::from(serde_json::to_vec(&value).unwrap())
        }
        None => Body::empty(),
    };

    let response = router
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

    TestResponse { status, body }
}

/// JSON body for a student.
pub fn student(id: i64, name: &str, age: i64, email: &str) -> Value {
    serde_json::json!({"id": id, "name": name, "age": age, "email": email})
}
