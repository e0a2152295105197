//! Route definitions for the video wall.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::wall;
use crate::state::AppState;

/// Wall routes mounted at `/wall`.
///
/// ```text
/// GET    /                   -> get_wall
/// PUT    /layout             -> select_layout
/// DELETE /slots              -> clear_all
/// PUT    /slots/{position}   -> assign_camera
/// DELETE /slots/{position}   -> remove_camera
/// POST   /drag/start         -> begin_drag
/// POST   /drag/drop          -> drop_camera
/// POST   /drag/cancel        -> cancel_drag
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(wall::get_wall))
        .route("/layout", put(wall::select_layout))
        .route("/slots", delete(wall::clear_all))
        .route(
            "/slots/{position}",
            put(wall::assign_camera).delete(wall::remove_camera),
        )
        .route("/drag/start", post(wall::begin_drag))
        .route("/drag/drop", post(wall::drop_camera))
        .route("/drag/cancel", post(wall::cancel_drag))
}
