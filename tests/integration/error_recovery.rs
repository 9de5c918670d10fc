//! Error recovery and edge case tests.
//!
//! Rejected requests answer with a `detail` body and leave the registry
//! exactly as it was.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use axum::http::StatusCode;
use pretty_assertions::assert_eq;

use super::common::{app, call, student, EchoSummary};

#[tokio::test]
async fn test_duplicate_id_rejected() {
    let (router, state) = app(EchoSummary);
    call(&router, "POST", "/students", Some(student(1, "A", 20, "a@x.com"))).await;
    let before = state.registry.list();

    let response = call(&router, "POST", "/students", Some(student(1, "B", 21, "b@x.com"))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.detail(), "Student with this ID already exists.");
    assert_eq!(state.registry.list(), before);
    assert!(!state.registry.email_taken("b@x.com"));
}

#[tokio::test]
async fn test_duplicate_email_rejected() {
    let (router, state) = app(EchoSummary);
    call(&router, "POST", "/students", Some(student(1, "A", 20, "a@x.com"))).await;

    let response = call(&router, "POST", "/students", Some(student(2, "C", 22, "a@x.com"))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.detail(), "Student with this email already exists.");
    assert_eq!(state.registry.len(), 1);
}

#[tokio::test]
async fn test_duplicate_email_with_different_domain_case_rejected() {
    let (router, state) = app(EchoSummary);
    let first = call(&router, "POST", "/students", Some(student(1, "A", 20, "Ada@School.EDU"))).await;
    assert_eq!(first.body["email"], "Ada@school.edu");

    let response = call(&router, "POST", "/students", Some(student(2, "B", 21, "Ada@SCHOOL.edu"))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.detail(), "Student with this email already exists.");
    assert_eq!(state.registry.len(), 1);
}

#[tokio::test]
async fn test_malformed_local_part_rejected() {
    let (router, state) = app(EchoSummary);
    for email in [".a@x.com", "a.@x.com", "a..b@x.com"] {
        let response = call(&router, "POST", "/students", Some(student(1, "A", 20, email))).await;
        assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY, "{email}");
    }
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_update_email_in_use_rejected() {
    let (router, state) = app(EchoSummary);
    call(&router, "POST", "/students", Some(student(1, "A", 20, "a@x.com"))).await;
    call(&router, "POST", "/students", Some(student(2, "B", 21, "b@x.com"))).await;
    let before = state.registry.list();

    let response = call(&router, "PUT", "/students/1", Some(student(1, "A", 20, "b@x.com"))).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.detail(), "Email already in use.");
    assert_eq!(state.registry.list(), before);
}

#[tokio::test]
async fn test_update_missing_not_found() {
    let (router, state) = app(EchoSummary);
    let response = call(&router, "PUT", "/students/9", Some(student(9, "A", 20, "a@x.com"))).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert!(state.registry.is_empty());
    assert!(!state.registry.email_taken("a@x.com"));
}

#[tokio::test]
async fn test_delete_missing_not_found() {
    let (router, state) = app(EchoSummary);
    call(&router, "POST", "/students", Some(student(1, "A", 20, "a@x.com"))).await;

    let response = call(&router, "DELETE", "/students/2", None).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.detail(), "Student not found.");
    assert_eq!(state.registry.len(), 1);
}

#[tokio::test]
async fn test_invalid_fields_rejected() {
    let (router, state) = app(EchoSummary);

    let blank_name = call(&router, "POST", "/students", Some(student(1, "  ", 20, "a@x.com"))).await;
    assert_eq!(blank_name.status, StatusCode::UNPROCESSABLE_ENTITY);

    let bad_email = call(&router, "POST", "/students", Some(student(1, "A", 20, "a-at-x"))).await;
    assert_eq!(bad_email.status, StatusCode::UNPROCESSABLE_ENTITY);

    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_missing_field_rejected_by_extractor() {
    let (router, state) = app(EchoSummary);
    let response = call(
        &router,
        "POST",
        "/students",
        Some(serde_json::json!({"id": 1, "name": "A", "email": "a@x.com"})),
    )
    .await;

    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(state.registry.is_empty());
}

#[tokio::test]
async fn test_non_integer_path_rejected() {
    let (router, _) = app(EchoSummary);
    let response = call(&router, "GET", "/students/one", None).await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(response.detail(), "Student ID must be an integer.");
}
