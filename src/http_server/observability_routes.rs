//! Observability HTTP Routes
//!
//! Health check reporting whether the database answers a ping.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tracing::warn;

use super::api_routes::ApiState;
use crate::observability::Event;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub database: &'static str,
}

/// Health check route
pub fn health_routes(state: Arc<ApiState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(state)
}

/// 200 when the store answers, 503 otherwise
async fn health_handler(State(state): State<Arc<ApiState>>) -> impl IntoResponse {
    let version = env!("CARGO_PKG_VERSION");

    match state.store.ping().await {
        Ok(()) => (
            StatusCode::OK,
            Json(HealthResponse {
                status: "ok",
                version,
                database: "up",
            }),
        ),
        Err(e) => {
            warn!(event = %Event::QueryFailed, error = %e, "health check ping failed");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(HealthResponse {
                    status: "degraded",
                    version,
                    database: "down",
                }),
            )
        }
    }
}
