pub mod cameras;
pub mod health;
pub mod layouts;
pub mod wall;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /layouts                                         list layouts (GET)
///
/// /cameras                                         list, filter (GET)
/// /cameras/refresh                                 re-fetch directory (POST)
///
/// /wall                                            current wall view (GET)
/// /wall/layout                                     select layout (PUT)
/// /wall/slots                                      clear all (DELETE)
/// /wall/slots/{position}                           assign (PUT), remove (DELETE)
/// /wall/drag/start                                 begin drag (POST)
/// /wall/drag/drop                                  drop on slot (POST)
/// /wall/drag/cancel                                cancel drag (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/layouts", layouts::router())
        .nest("/cameras", cameras::router())
        .nest("/wall", wall::router())
}
