//! The camera list the operator picks from.
//!
//! [`CameraCatalog`] keeps the most recently resolved camera list and swaps in
//! a new one whenever a refresh completes. A failed fetch never surfaces as an
//! error: it is logged and the static fallback list is stored instead.
//!
//! Refreshes are not cancelled or sequenced. If two overlap, whichever
//! finishes last wins, even if it was started first.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use videowall_core::camera::CameraRecord;
use videowall_core::types::Timestamp;

use crate::client::CameraDirectory;
use crate::fallback::fallback_cameras;

/// Where the current camera list came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CameraSource {
    Live,
    Fallback,
}

/// Immutable view of the catalog at one point in time.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogSnapshot {
    pub cameras: Vec<CameraRecord>,
    pub source: CameraSource,
    /// When the last refresh completed; `None` before the first one.
    pub refreshed_at: Option<Timestamp>,
}

/// Query filter for the camera picker. All criteria are optional and combine
/// with AND.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CameraFilter {
    pub jurisdiction: Option<String>,
    pub sector: Option<String>,
    /// Case-insensitive substring of the camera name or id.
    pub q: Option<String>,
}

impl CameraFilter {
    pub fn matches(&self, camera: &CameraRecord) -> bool {
        if let Some(jurisdiction) = non_blank(&self.jurisdiction) {
            if camera.jurisdiction.as_deref() != Some(jurisdiction) {
                return false;
            }
        }
        if let Some(sector) = non_blank(&self.sector) {
            if camera.sector.as_deref() != Some(sector) {
                return false;
            }
        }
        if let Some(q) = non_blank(&self.q) {
            let q = q.to_lowercase();
            if !camera.name.to_lowercase().contains(&q) && !camera.id.to_lowercase().contains(&q) {
                return false;
            }
        }
        true
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

pub struct CameraCatalog {
    directory: Arc<dyn CameraDirectory>,
    snapshot: RwLock<Arc<CatalogSnapshot>>,
}

impl CameraCatalog {
    /// Create a catalog that serves the fallback list until the first
    /// refresh completes.
    pub fn new(directory: Arc<dyn CameraDirectory>) -> Self {
        let initial = CatalogSnapshot {
            cameras: fallback_cameras(),
            source: CameraSource::Fallback,
            refreshed_at: None,
        };
        Self {
            directory,
            snapshot: RwLock::new(Arc::new(initial)),
        }
    }

    /// Fetch from the directory and replace the current list.
    ///
    /// The lock is only held to swap the result in, so readers keep seeing
    /// the previous list while the fetch is outstanding.
    pub async fn refresh(&self) -> Arc<CatalogSnapshot> {
        let (cameras, source) = match self.directory.fetch_cameras().await {
            Ok(cameras) => {
                tracing::info!(count = cameras.len(), "Camera directory refreshed");
                (cameras, CameraSource::Live)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Camera directory unavailable, using fallback list");
                (fallback_cameras(), CameraSource::Fallback)
            }
        };

        let next = Arc::new(CatalogSnapshot {
            cameras,
            source,
            refreshed_at: Some(chrono::Utc::now()),
        });
        *self.snapshot.write().await = Arc::clone(&next);
        next
    }

    pub async fn snapshot(&self) -> Arc<CatalogSnapshot> {
        Arc::clone(&*self.snapshot.read().await)
    }

    /// Look up a camera by id in the current list.
    pub async fn find(&self, camera_id: &str) -> Option<CameraRecord> {
        self.snapshot
            .read()
            .await
            .cameras
            .iter()
            .find(|c| c.id == camera_id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::sync::{mpsc, oneshot};

    use super::*;
    use crate::client::DirectoryError;

    struct StaticDirectory(Vec<CameraRecord>);

    #[async_trait]
    impl CameraDirectory for StaticDirectory {
        async fn fetch_cameras(&self) -> Result<Vec<CameraRecord>, DirectoryError> {
            Ok(self.0.clone())
        }
    }

    struct FailingDirectory;

    #[async_trait]
    impl CameraDirectory for FailingDirectory {
        async fn fetch_cameras(&self) -> Result<Vec<CameraRecord>, DirectoryError> {
            Err(DirectoryError::Status {
                status: 503,
                body: "maintenance".to_string(),
            })
        }
    }

    /// Directory whose fetches each wait for the test to hand them a list,
    /// released in whatever order the test chooses.
    struct GatedDirectory {
        gates: Mutex<VecDeque<oneshot::Receiver<Vec<CameraRecord>>>>,
        started: mpsc::UnboundedSender<()>,
    }

    impl GatedDirectory {
        fn new(
            gates: Vec<oneshot::Receiver<Vec<CameraRecord>>>,
        ) -> (Self, mpsc::UnboundedReceiver<()>) {
            let (started, started_rx) = mpsc::unbounded_channel();
            let directory = Self {
                gates: Mutex::new(gates.into()),
                started,
            };
            (directory, started_rx)
        }
    }

    #[async_trait]
    impl CameraDirectory for GatedDirectory {
        async fn fetch_cameras(&self) -> Result<Vec<CameraRecord>, DirectoryError> {
            let gate = self
                .gates
                .lock()
                .unwrap()
                .pop_front()
                .expect("more fetches than gates");
            self.started.send(()).unwrap();
            Ok(gate.await.unwrap_or_default())
        }
    }

    fn record(id: &str, name: &str, jurisdiction: &str, sector: &str) -> CameraRecord {
        CameraRecord {
            id: id.to_string(),
            name: name.to_string(),
            stream_url: format!("/s/{id}"),
            camera_type: None,
            jurisdiction: Some(jurisdiction.to_string()),
            sector: Some(sector.to_string()),
            status: None,
            fdot_id: None,
            supports_mjpeg: None,
            snapshot_url: None,
        }
    }

    fn live_catalog() -> CameraCatalog {
        CameraCatalog::new(Arc::new(StaticDirectory(vec![
            record("a1", "Alpha Bridge", "City", "north"),
            record("b2", "Beta Tunnel", "FDOT", "north"),
            record("c3", "Gamma Pier", "City", "south"),
        ])))
    }

    // -- Refresh --

    #[tokio::test]
    async fn starts_with_fallback_before_refresh() {
        let catalog = live_catalog();
        let snapshot = catalog.snapshot().await;
        assert_eq!(snapshot.source, CameraSource::Fallback);
        assert!(snapshot.refreshed_at.is_none());
        assert_eq!(snapshot.cameras, fallback_cameras());
    }

    #[tokio::test]
    async fn successful_refresh_stores_live_list() {
        let catalog = live_catalog();
        let snapshot = catalog.refresh().await;

        assert_eq!(snapshot.source, CameraSource::Live);
        assert_eq!(snapshot.cameras.len(), 3);
        assert!(snapshot.refreshed_at.is_some());
        assert_eq!(catalog.snapshot().await.source, CameraSource::Live);
    }

    #[tokio::test]
    async fn failed_refresh_substitutes_fallback() {
        let catalog = CameraCatalog::new(Arc::new(FailingDirectory));
        let snapshot = catalog.refresh().await;

        assert_eq!(snapshot.source, CameraSource::Fallback);
        assert_eq!(snapshot.cameras, fallback_cameras());
        assert!(snapshot.refreshed_at.is_some());
    }

    #[tokio::test]
    async fn readers_see_previous_list_while_refresh_is_outstanding() {
        let (release, gate) = oneshot::channel();
        let (directory, mut started) = GatedDirectory::new(vec![gate]);
        let catalog = Arc::new(CameraCatalog::new(Arc::new(directory)));

        let pending = tokio::spawn({
            let catalog = Arc::clone(&catalog);
            async move { catalog.refresh().await }
        });
        started.recv().await.unwrap();

        let during = catalog.snapshot().await;
        assert_eq!(during.source, CameraSource::Fallback);
        assert!(during.refreshed_at.is_none());
        assert_eq!(during.cameras, fallback_cameras());
        assert!(catalog.find("live-1").await.is_none());

        release
            .send(vec![record("live-1", "Live One", "City", "north")])
            .unwrap();
        let refreshed = pending.await.unwrap();

        assert_eq!(refreshed.source, CameraSource::Live);
        let after = catalog.snapshot().await;
        assert_eq!(after.source, CameraSource::Live);
        assert_eq!(after.cameras.len(), 1);
        assert!(catalog.find("live-1").await.is_some());
    }

    #[tokio::test]
    async fn overlapping_refreshes_keep_the_last_to_finish() {
        let (release_first, first_gate) = oneshot::channel();
        let (release_second, second_gate) = oneshot::channel();
        let (directory, mut started) = GatedDirectory::new(vec![first_gate, second_gate]);
        let catalog = Arc::new(CameraCatalog::new(Arc::new(directory)));

        let spawn_refresh = |catalog: &Arc<CameraCatalog>| {
            let catalog = Arc::clone(catalog);
            tokio::spawn(async move { catalog.refresh().await })
        };

        let first = spawn_refresh(&catalog);
        started.recv().await.unwrap();
        let second = spawn_refresh(&catalog);
        started.recv().await.unwrap();

        // The later request resolves first.
        release_second
            .send(vec![record("newer", "Newer", "City", "north")])
            .unwrap();
        second.await.unwrap();
        assert_eq!(catalog.snapshot().await.cameras[0].id, "newer");

        // The earlier request resolves last and overwrites it.
        release_first
            .send(vec![record("older", "Older", "City", "north")])
            .unwrap();
        first.await.unwrap();

        let snapshot = catalog.snapshot().await;
        assert_eq!(snapshot.cameras.len(), 1);
        assert_eq!(snapshot.cameras[0].id, "older");
        assert_eq!(snapshot.source, CameraSource::Live);
    }

    // -- Lookup --

    #[tokio::test]
    async fn find_by_id() {
        let catalog = live_catalog();
        catalog.refresh().await;
        assert_eq!(catalog.find("b2").await.unwrap().name, "Beta Tunnel");
        assert!(catalog.find("zz").await.is_none());
    }

    #[tokio::test]
    async fn filter_combines_criteria() {
        let catalog = live_catalog();
        let snapshot = catalog.refresh().await;
        let matching = |filter: &CameraFilter| -> Vec<String> {
            snapshot
                .cameras
                .iter()
                .filter(|c| filter.matches(c))
                .map(|c| c.id.clone())
                .collect()
        };

        let city = CameraFilter {
            jurisdiction: Some("City".to_string()),
            ..Default::default()
        };
        assert_eq!(matching(&city), vec!["a1", "c3"]);

        let city_north = CameraFilter {
            jurisdiction: Some("City".to_string()),
            sector: Some("north".to_string()),
            q: None,
        };
        assert_eq!(matching(&city_north), vec!["a1"]);
    }

    #[test]
    fn text_query_is_case_insensitive_over_name_and_id() {
        let camera = record("fdot-77", "Causeway East", "FDOT", "east");
        let by_name = CameraFilter {
            q: Some("causeway".to_string()),
            ..Default::default()
        };
        let by_id = CameraFilter {
            q: Some("FDOT-7".to_string()),
            ..Default::default()
        };
        let miss = CameraFilter {
            q: Some("west".to_string()),
            ..Default::default()
        };
        assert!(by_name.matches(&camera));
        assert!(by_id.matches(&camera));
        assert!(!miss.matches(&camera));
    }

    #[test]
    fn blank_criteria_match_everything() {
        let camera = record("x", "X", "City", "north");
        let blank = CameraFilter {
            jurisdiction: Some("  ".to_string()),
            sector: Some(String::new()),
            q: Some(String::new()),
        };
        assert!(blank.matches(&camera));
        assert!(CameraFilter::default().matches(&camera));
    }
}
