//! HTTP API server.
//!
//! This module provides:
//! - Route handlers for student CRUD and summaries
//! - Mapping of registry errors to HTTP responses
//! - Server startup with CORS, request tracing and graceful shutdown
//!
//! # Example
//!
//! ```no_run
//! use student_registry::config::Config;
//! use student_registry::server::{AppState, HttpServer};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let state = AppState::from_config(Config::default())?;
//! HttpServer::new(state).start().await?;
//! # Ok(())
//! # }
//! ```

mod errors;
mod http;
mod routes;
mod types;

pub use errors::ApiError;
pub use http::HttpServer;
pub use routes::{health_routes, student_routes};
pub use types::{
    AppState, DetailResponse, HealthResponse, SummaryResponse, DELETED_DETAIL,
};
