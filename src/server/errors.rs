//! HTTP error responses.

use axum::{
    extract::rejection::PathRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use super::types::DetailResponse;
use crate::error::RegistryError;

/// Error returned by route handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// A registry operation was rejected.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// The `{id}` path segment is not an integer.
    #[error("Student ID must be an integer.")]
    InvalidId {
        /// Text of the underlying path rejection.
        reason: String,
    },
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidId {
            reason: rejection.body_text(),
        }
    }
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Registry(err) => match err {
                RegistryError::NotFound { .. } => StatusCode::NOT_FOUND,
                RegistryError::DuplicateId { .. }
                | RegistryError::DuplicateEmail { .. }
                | RegistryError::EmailInUse { .. } => StatusCode::BAD_REQUEST,
                RegistryError::InvalidRecord { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            },
            Self::InvalidId { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if let Self::InvalidId { reason } = &self {
            tracing::debug!(reason = %reason, "Rejected student id");
        }
        let body = Json(DetailResponse::new(self.to_string()));
        (status, body).into_response()
    }
}
