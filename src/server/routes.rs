//! Student HTTP routes.
//!
//! Handlers translate requests into registry calls and registry errors into
//! [`ApiError`] responses. Summary generation never fails at this layer.

use axum::{
    extract::{FromRequestParts, Path, State},
    http::request::Parts,
    routing::get,
    Json, Router,
};

use super::errors::ApiError;
use super::types::{AppState, DetailResponse, HealthResponse, SummaryResponse, DELETED_DETAIL};
use crate::registry::StudentRecord;

/// Student routes with shared state.
pub fn student_routes(state: AppState) -> Router {
    Router::new()
        .route("/students", get(list_students).post(create_student))
        .route(
            "/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/students/{id}/summary", get(student_summary))
        .with_state(state)
}

/// Health check route.
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health))
}

/// The `{id}` path segment. A non-integer id is answered with 422.
struct StudentId(i64);

impl<S: Send + Sync> FromRequestParts<S> for StudentId {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i64>::from_request_parts(parts, state).await?;
        Ok(Self(id))
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

async fn create_student(
    State(state): State<AppState>,
    Json(record): Json<StudentRecord>,
) -> Result<Json<StudentRecord>, ApiError> {
    Ok(Json(state.registry.create(record)?))
}

async fn list_students(State(state): State<AppState>) -> Json<Vec<StudentRecord>> {
    Json(state.registry.list())
}

async fn get_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<Json<StudentRecord>, ApiError> {
    Ok(Json(state.registry.get(id)?))
}

async fn update_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
    Json(record): Json<StudentRecord>,
) -> Result<Json<StudentRecord>, ApiError> {
    Ok(Json(state.registry.update(id, record)?))
}

async fn delete_student(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<Json<DetailResponse>, ApiError> {
    state.registry.delete(id)?;
    Ok(Json(DetailResponse::new(DELETED_DETAIL)))
}

async fn student_summary(
    State(state): State<AppState>,
    StudentId(id): StudentId,
) -> Result<Json<SummaryResponse>, ApiError> {
    // Snapshot first; the registry lock is not held while the model runs.
    let record = state.registry.get(id)?;
    let summary = state.summarizer.summarize(&record).await;
    Ok(Json(SummaryResponse { summary }))
}
