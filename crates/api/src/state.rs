use std::sync::Arc;

use tokio::sync::RwLock;
use videowall_core::controller::VideoWallController;
use videowall_directory::CameraCatalog;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable: everything is behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (resolver addresses, timeouts).
    pub config: Arc<ServerConfig>,
    /// The one wall controller. Write operations hold the lock for the whole
    /// operation, so each runs to completion before the next.
    pub wall: Arc<RwLock<VideoWallController>>,
    /// Camera list served to the picker, refreshed from the directory.
    pub catalog: Arc<CameraCatalog>,
}

impl AppState {
    pub fn new(config: ServerConfig, catalog: Arc<CameraCatalog>) -> Self {
        Self {
            config: Arc::new(config),
            wall: Arc::new(RwLock::new(VideoWallController::default())),
            catalog,
        }
    }
}
