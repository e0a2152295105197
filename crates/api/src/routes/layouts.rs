use axum::routing::get;
use axum::Router;

use crate::handlers::layouts;
use crate::state::AppState;

/// Layout routes mounted at `/layouts`.
///
/// ```text
/// GET    /      -> list_layouts
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(layouts::list_layouts))
}
