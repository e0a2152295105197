#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use videowall_api::config::ServerConfig;
use videowall_api::router::build_app_router;
use videowall_api::state::AppState;
use videowall_core::camera::CameraRecord;
use videowall_core::stream_url::ResolverConfig;
use videowall_directory::{CameraCatalog, CameraDirectory, DirectoryError};

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default),
/// a 30-second request timeout and a media proxy at `http://proxy.test`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        camera_directory_url: "http://directory.test/api/cameras".to_string(),
        directory_timeout_secs: 1,
        resolver: ResolverConfig {
            media_proxy_base: "http://proxy.test".to_string(),
            ..ResolverConfig::default()
        },
    }
}

// ---------------------------------------------------------------------------
// Directory stubs
// ---------------------------------------------------------------------------

/// Directory that always answers with the same list.
pub struct StaticDirectory(pub Vec<CameraRecord>);

#[async_trait]
impl CameraDirectory for StaticDirectory {
    async fn fetch_cameras(&self) -> Result<Vec<CameraRecord>, DirectoryError> {
        Ok(self.0.clone())
    }
}

/// Directory that is always down.
pub struct UnavailableDirectory;

#[async_trait]
impl CameraDirectory for UnavailableDirectory {
    async fn fetch_cameras(&self) -> Result<Vec<CameraRecord>, DirectoryError> {
        Err(DirectoryError::Status {
            status: 503,
            body: "down".to_string(),
        })
    }
}

fn camera(id: &str, name: &str) -> CameraRecord {
    CameraRecord {
        id: id.to_string(),
        name: name.to_string(),
        stream_url: String::new(),
        camera_type: None,
        jurisdiction: None,
        sector: None,
        status: None,
        fdot_id: None,
        supports_mjpeg: None,
        snapshot_url: None,
    }
}

/// Live camera list used by most tests, one camera per resolution rule.
///
/// | id    | resolves to                               |
/// |-------|-------------------------------------------|
/// | `c1`  | direct stream `rtsp://cam/c1`             |
/// | `c2`  | media proxy `http://proxy.test/mjpeg/c2`  |
/// | `c3`  | FDOT proxy for fdot id `412`              |
/// | `c4`  | snapshot `http://snap.test/c4.jpg`        |
/// | `c5`  | placeholder                               |
pub fn test_cameras() -> Vec<CameraRecord> {
    vec![
        CameraRecord {
            stream_url: "rtsp://cam/c1".to_string(),
            jurisdiction: Some("City".to_string()),
            sector: Some("downtown".to_string()),
            ..camera("c1", "Main & 1st")
        },
        CameraRecord {
            stream_url: "/mjpeg/c2".to_string(),
            supports_mjpeg: Some(true),
            jurisdiction: Some("City".to_string()),
            sector: Some("harbor".to_string()),
            ..camera("c2", "Harbor Bridge")
        },
        CameraRecord {
            jurisdiction: Some("FDOT".to_string()),
            sector: Some("north".to_string()),
            fdot_id: Some("412".to_string()),
            ..camera("c3", "I-4 Exit 12")
        },
        CameraRecord {
            jurisdiction: Some("County".to_string()),
            snapshot_url: Some("http://snap.test/c4.jpg".to_string()),
            ..camera("c4", "County Lot")
        },
        camera("c5", "Dark Camera"),
    ]
}

// ---------------------------------------------------------------------------
// App builders
// ---------------------------------------------------------------------------

/// Build the full application router over `directory`, after one catalog
/// refresh, using the same middleware stack as `main.rs`.
pub async fn build_app_with(directory: Arc<dyn CameraDirectory>) -> Router {
    let catalog = Arc::new(CameraCatalog::new(directory));
    catalog.refresh().await;

    let config = test_config();
    let state = AppState::new(config.clone(), catalog);
    build_app_router(state, &config)
}

/// Application backed by a live directory serving [`test_cameras`].
pub async fn build_test_app() -> Router {
    build_app_with(Arc::new(StaticDirectory(test_cameras()))).await
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a request through a clone of `app` so the same app (and therefore
/// the same wall) can serve several requests in one test.
pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

async fn send_json(
    app: &Router,
    method: Method,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Wall shortcuts
// ---------------------------------------------------------------------------

pub async fn select_layout(app: &Router, layout: &str) -> serde_json::Value {
    let response = put_json(app, "/api/v1/wall/layout", serde_json::json!({ "layout": layout })).await;
    assert_eq!(response.status(), 200, "selecting layout {layout} failed");
    body_json(response).await["data"].clone()
}

pub async fn assign(app: &Router, position: usize, camera_id: &str) -> serde_json::Value {
    let response = put_json(
        app,
        &format!("/api/v1/wall/slots/{position}"),
        serde_json::json!({ "camera_id": camera_id }),
    )
    .await;
    assert_eq!(response.status(), 200, "assigning {camera_id} to {position} failed");
    body_json(response).await["data"].clone()
}

/// Camera ids per slot, `None` for empty slots.
pub fn slot_ids(wall: &serde_json::Value) -> Vec<Option<String>> {
    wall["slots"]
        .as_array()
        .unwrap()
        .iter()
        .map(|slot| slot["camera"]["camera_id"].as_str().map(str::to_string))
        .collect()
}
