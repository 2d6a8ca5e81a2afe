//! API connectivity check endpoint.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::routes::method_not_allowed;
use crate::state::AppState;

/// Connectivity check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Fixed connectivity message.
    pub message: String,
}

/// GET /api - Connectivity check endpoint.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: "Connected to the API".to_string(),
    })
}

/// Build the connectivity check routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/api", get(health_check).fallback(method_not_allowed))
}
