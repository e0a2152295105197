//! Handlers for the video wall: layout selection, slot assignment and
//! drag-and-drop reordering.
//!
//! Every mutating handler takes the wall write lock for the whole operation
//! and answers with the updated [`WallView`].

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::Deserialize;
use videowall_core::controller::VideoWallController;
use videowall_core::drag::DropOutcome;
use videowall_core::error::CoreError;
use videowall_core::layout::Layout;
use videowall_core::types::SlotPosition;
use videowall_core::view::WallView;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `PUT /wall/layout`.
#[derive(Debug, Deserialize)]
pub struct SelectLayoutRequest {
    /// Layout identifier, e.g. `"3x3"`.
    pub layout: String,
}

/// Request body for `PUT /wall/slots/{position}`.
#[derive(Debug, Deserialize)]
pub struct AssignCameraRequest {
    pub camera_id: String,
}

/// Request body for the drag start and drop endpoints.
#[derive(Debug, Deserialize)]
pub struct DragRequest {
    pub position: SlotPosition,
}

fn render(state: &AppState, wall: &VideoWallController) -> Json<DataResponse<WallView>> {
    Json(DataResponse {
        data: wall.view(&state.config.resolver),
    })
}

// ---------------------------------------------------------------------------
// Wall state
// ---------------------------------------------------------------------------

/// GET /api/v1/wall
///
/// Current layout, slots and resolved stream URLs.
pub async fn get_wall(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let wall = state.wall.read().await;
    Ok(render(&state, &wall))
}

/// PUT /api/v1/wall/layout
///
/// Switch the grid density. Assignments are kept by position; any that no
/// longer fit are dropped.
pub async fn select_layout(
    State(state): State<AppState>,
    AppJson(input): AppJson<SelectLayoutRequest>,
) -> AppResult<impl IntoResponse> {
    let layout: Layout = input.layout.trim().parse()?;

    let mut wall = state.wall.write().await;
    let previous = wall.layout();
    let discarded = wall.select_layout(layout);

    if discarded.is_empty() {
        tracing::info!(from = %previous, to = %layout, "Wall layout changed");
    } else {
        let dropped: Vec<&str> = discarded
            .iter()
            .filter_map(|slot| slot.assignment.as_ref())
            .map(|a| a.camera_id.as_str())
            .collect();
        tracing::warn!(
            from = %previous,
            to = %layout,
            discarded = ?dropped,
            "Wall layout shrunk, assignments outside the new grid were dropped",
        );
    }

    Ok(render(&state, &wall))
}

/// DELETE /api/v1/wall/slots
///
/// Empty every slot.
pub async fn clear_all(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut wall = state.wall.write().await;
    let cleared = wall.clear_all();

    tracing::info!(cleared, "Wall cleared");

    Ok(render(&state, &wall))
}

// ---------------------------------------------------------------------------
// Slot assignment
// ---------------------------------------------------------------------------

/// PUT /api/v1/wall/slots/{position}
///
/// Put a camera from the catalog into the slot, replacing any current one.
pub async fn assign_camera(
    State(state): State<AppState>,
    AppPath(position): AppPath<SlotPosition>,
    AppJson(input): AppJson<AssignCameraRequest>,
) -> AppResult<impl IntoResponse> {
    let camera_id = input.camera_id.trim();
    if camera_id.is_empty() {
        return Err(AppError::BadRequest("camera_id must not be empty".into()));
    }

    let camera = state
        .catalog
        .find(camera_id)
        .await
        .ok_or_else(|| CoreError::NotFound {
            entity: "Camera",
            id: camera_id.to_string(),
        })?;

    let mut wall = state.wall.write().await;
    wall.grid().check_position(position)?;
    let replaced = wall.assign(position, &camera);

    tracing::info!(
        position,
        camera_id = %camera.id,
        replaced = ?replaced.as_ref().map(|a| a.camera_id.as_str()),
        "Camera assigned to slot",
    );

    Ok(render(&state, &wall))
}

/// DELETE /api/v1/wall/slots/{position}
///
/// Empty one slot. Removing from an empty slot succeeds and changes nothing.
pub async fn remove_camera(
    State(state): State<AppState>,
    AppPath(position): AppPath<SlotPosition>,
) -> AppResult<impl IntoResponse> {
    let mut wall = state.wall.write().await;
    wall.grid().check_position(position)?;

    if let Some(removed) = wall.remove(position) {
        tracing::info!(position, camera_id = %removed.camera_id, "Camera removed from slot");
    }

    Ok(render(&state, &wall))
}

// ---------------------------------------------------------------------------
// Drag and drop
// ---------------------------------------------------------------------------

/// POST /api/v1/wall/drag/start
///
/// Begin dragging the camera in `position`. Empty slots are not draggable;
/// the response's `drag` field shows whether a drag started.
pub async fn begin_drag(
    State(state): State<AppState>,
    AppJson(input): AppJson<DragRequest>,
) -> AppResult<impl IntoResponse> {
    let mut wall = state.wall.write().await;
    wall.grid().check_position(input.position)?;

    let started = wall.begin_drag(input.position);
    tracing::debug!(position = input.position, started, "Drag start");

    Ok(render(&state, &wall))
}

/// POST /api/v1/wall/drag/drop
///
/// Drop the dragged camera on `position`, swapping the two slots.
pub async fn drop_camera(
    State(state): State<AppState>,
    AppJson(input): AppJson<DragRequest>,
) -> AppResult<impl IntoResponse> {
    let mut wall = state.wall.write().await;
    if let Err(e) = wall.grid().check_position(input.position) {
        // A drop always ends the drag, even when the target is rejected.
        if let Some(source) = wall.cancel_drag() {
            tracing::debug!(source, target = input.position, "Drag ended on invalid target");
        }
        return Err(e.into());
    }

    match wall.drop_on(input.position) {
        DropOutcome::Swap { source, target } => {
            tracing::info!(source, target, "Slots swapped");
        }
        DropOutcome::Unchanged { position } => {
            tracing::debug!(position, "Dropped on source slot");
        }
        DropOutcome::NotDragging => {
            tracing::debug!(position = input.position, "Drop without an active drag");
        }
    }

    Ok(render(&state, &wall))
}

/// POST /api/v1/wall/drag/cancel
///
/// Abandon the current drag without moving anything.
pub async fn cancel_drag(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let mut wall = state.wall.write().await;

    if let Some(source) = wall.cancel_drag() {
        tracing::debug!(source, "Drag cancelled");
    }

    Ok(render(&state, &wall))
}
