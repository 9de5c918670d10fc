//! HTTP server orchestration.
//!
//! Combines the student and health routers, applies CORS and request
//! tracing, and serves until Ctrl-C.

use std::net::SocketAddr;

use axum::http::HeaderValue;
use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::routes::{health_routes, student_routes};
use super::types::AppState;
use crate::error::AppError;

/// HTTP server for the student registry API.
#[derive(Debug)]
pub struct HttpServer {
    addr: String,
    router: Router,
}

impl HttpServer {
    /// Create a server over the given state.
    #[must_use]
    pub fn new(state: AppState) -> Self {
        let addr = state.config.socket_addr();
        let router = Self::build_router(state);
        Self { addr, router }
    }

    /// Build the combined router with all endpoints.
    fn build_router(state: AppState) -> Router {
        let cors = build_cors(&state.config.cors_origins);

        Router::new()
            .merge(health_routes())
            .merge(student_routes(state))
            .layer(cors)
            .layer(TraceLayer::new_for_http())
    }

    /// Get the socket address.
    #[must_use]
    pub fn socket_addr(&self) -> &str {
        &self.addr
    }

    /// Get the router (for testing).
    #[must_use]
    pub fn router(self) -> Router {
        self.router
    }

    /// Bind and serve until Ctrl-C.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Server`] if the address is invalid, the port
    /// cannot be bound, or serving fails.
    #[cfg_attr(coverage_nightly, coverage(off))]
    pub async fn start(self) -> Result<(), AppError> {
        let addr: SocketAddr = self.addr.parse().map_err(|e| AppError::Server {
            message: format!("Invalid socket address {}: {e}", self.addr),
        })?;

        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Server {
                message: format!("Failed to bind {addr}: {e}"),
            })?;

        tracing::info!(addr = %addr, "Student registry listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::Server {
                message: e.to_string(),
            })?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Any origin when none are configured, otherwise the listed origins.
fn build_cors(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let parsed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    layer.allow_origin(AllowOrigin::list(parsed))
}

#[cfg_attr(coverage_nightly, coverage(off))]
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
