use axum::routing::{get, post};
use axum::Router;

use crate::handlers::cameras;
use crate::state::AppState;

/// Camera picker routes mounted at `/cameras`.
///
/// ```text
/// GET    /          -> list_cameras (?jurisdiction=&sector=&q=)
/// POST   /refresh   -> refresh_cameras
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(cameras::list_cameras))
        .route("/refresh", post(cameras::refresh_cameras))
}
