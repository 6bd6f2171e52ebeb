//! HTTP transport for sequence generation.
//!
//! Routes:
//! - `GET /sequence?count=&type=&distribution=&param1=&param2=`
//! - `GET /metrics` (Prometheus text)
//! - `GET /health`

use crate::config::ServerConfig;
use crate::error::{ErrorClass, SamplingError};
use crate::metrics::MetricsRegistry;
use crate::service::{SampleRequest, SequenceService};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use thiserror::Error;
use tower_http::cors::CorsLayer;

/// Errors that can occur during server operations.
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listener could not bind.
    #[error("failed to bind to address: {0}")]
    Bind(#[from] std::io::Error),

    /// The server stopped with an error.
    #[error("server error: {0}")]
    Server(String),
}

/// Shared, read-only state for request handlers.
pub struct AppState {
    service: SequenceService,
    metrics: MetricsRegistry,
}

impl AppState {
    /// Creates handler state.
    pub fn new(service: SequenceService, metrics: MetricsRegistry) -> Self {
        Self { service, metrics }
    }
}

/// HTTP server exposing the sequence service.
pub struct SequenceServer {
    config: ServerConfig,
    state: Arc<AppState>,
}

impl SequenceServer {
    /// Creates a new server.
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        Self {
            config,
            state: Arc::new(state),
        }
    }

    /// Starts the HTTP server.
    ///
    /// This method runs the server until it is shut down.
    pub async fn run(self) -> Result<(), ServerError> {
        let app = router(self.state);
        let listener = tokio::net::TcpListener::bind(self.config.bind_addr).await?;

        tracing::info!(
            addr = %self.config.bind_addr,
            "Sequence server listening"
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| ServerError::Server(e.to_string()))?;

        Ok(())
    }
}

/// Builds the application router.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/sequence", get(sequence_handler))
        .route("/metrics", get(metrics_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    class: ErrorClass,
}

fn error_response(error: &SamplingError) -> Response {
    let status = match error.class() {
        ErrorClass::ClientError => StatusCode::BAD_REQUEST,
        ErrorClass::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
    };
    let body = ErrorBody {
        error: error.public_message(),
        class: error.class(),
    };
    (status, Json(body)).into_response()
}

/// Handler for the /sequence endpoint.
async fn sequence_handler(
    State(state): State<Arc<AppState>>,
    query: Result<Query<SampleRequest>, QueryRejection>,
) -> Response {
    let request = match query {
        Ok(Query(request)) => request,
        Err(rejection) => {
            let error = SamplingError::MalformedRequest(rejection.body_text());
            state.metrics.record_failure(&error);
            return error_response(&error);
        }
    };

    let worker = Arc::clone(&state);
    // Sampling is CPU-bound; a panic in the task surfaces as a JoinError.
    let outcome = tokio::task::spawn_blocking(move || worker.service.generate(&request))
        .await
        .unwrap_or_else(|e| Err(SamplingError::Internal(format!("sampling task failed: {e}"))));

    match outcome {
        Ok(response) => {
            state.metrics.record_success(response.count);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(error) => {
            state.metrics.record_failure(&error);
            error_response(&error)
        }
    }
}

/// Handler for the /metrics endpoint.
async fn metrics_handler(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.metrics.encode() {
        Ok(output) => (
            StatusCode::OK,
            [("content-type", "text/plain; version=0.0.4; charset=utf-8")],
            output,
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            [("content-type", "text/plain; charset=utf-8")],
            format!("Failed to encode metrics: {}", e),
        ),
    }
}

/// Handler for the /health endpoint.
async fn health_handler() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}
