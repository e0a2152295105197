use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;
use videowall_directory::CameraSource;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Overall service status.
    pub status: &'static str,
    /// Crate version from Cargo.toml.
    pub version: &'static str,
    /// Whether the camera list is live directory data or the fallback list.
    pub camera_source: CameraSource,
}

/// GET /health -- returns service status and camera list origin.
///
/// A fallback camera list reports `degraded`; the wall itself keeps working.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let camera_source = state.catalog.snapshot().await.source;

    let status = match camera_source {
        CameraSource::Live => "ok",
        CameraSource::Fallback => "degraded",
    };

    Json(HealthResponse {
        status,
        version: env!("CARGO_PKG_VERSION"),
        camera_source,
    })
}

/// Mount health check routes (intended for root-level, NOT under `/api/v1`).
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
