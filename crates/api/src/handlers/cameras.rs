//! Handlers for the camera picker.
//!
//! The list comes from the [`CameraCatalog`](videowall_directory::CameraCatalog):
//! live directory data when the last refresh succeeded, the static fallback
//! list otherwise.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;
use videowall_core::camera::CameraRecord;
use videowall_core::types::Timestamp;
use videowall_directory::{CameraFilter, CameraSource};

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Camera list plus where it came from.
#[derive(Debug, Serialize)]
pub struct CameraListResponse {
    pub cameras: Vec<CameraRecord>,
    pub source: CameraSource,
    pub refreshed_at: Option<Timestamp>,
}

/// GET /api/v1/cameras?jurisdiction=&sector=&q=
///
/// List cameras from the current catalog, optionally filtered.
pub async fn list_cameras(
    State(state): State<AppState>,
    Query(filter): Query<CameraFilter>,
) -> AppResult<impl IntoResponse> {
    let snapshot = state.catalog.snapshot().await;
    let cameras = snapshot
        .cameras
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();

    Ok(Json(DataResponse {
        data: CameraListResponse {
            cameras,
            source: snapshot.source,
            refreshed_at: snapshot.refreshed_at,
        },
    }))
}

/// POST /api/v1/cameras/refresh
///
/// Re-fetch the camera directory. Never fails: an unreachable directory
/// yields the fallback list with `source: "fallback"`.
pub async fn refresh_cameras(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let snapshot = state.catalog.refresh().await;

    tracing::info!(
        count = snapshot.cameras.len(),
        source = ?snapshot.source,
        "Camera catalog refreshed on request",
    );

    Ok(Json(DataResponse {
        data: CameraListResponse {
            cameras: snapshot.cameras.clone(),
            source: snapshot.source,
            refreshed_at: snapshot.refreshed_at,
        },
    }))
}
