use axum::{
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

/// Health check endpoint
/// Returns 200 OK if the service is running
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "healthy",
        "service": "cost-compare",
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Readiness check endpoint
/// The calculator has no dependencies, so ready means running
pub async fn readiness_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({
        "status": "ready",
        "service": "cost-compare",
    })))
}
