//! HTTP client for the camera directory service.
//!
//! The directory answers `GET <url>` with `{ "cameras": [CameraRecord, ...] }`.
//! [`CameraDirectory`] is the seam the catalog depends on, so tests and
//! alternative sources can stand in for the HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use serde::Deserialize;
use videowall_core::camera::CameraRecord;

/// Body returned by the directory endpoint.
#[derive(Debug, Deserialize)]
pub struct DirectoryResponse {
    #[serde(default)]
    pub cameras: Vec<CameraRecord>,
}

/// Errors from the camera directory layer.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// The HTTP request failed (network, DNS, TLS, timeout, or body decode).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The directory returned a non-2xx status code.
    #[error("Camera directory error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

/// A source of camera records.
#[async_trait]
pub trait CameraDirectory: Send + Sync {
    async fn fetch_cameras(&self) -> Result<Vec<CameraRecord>, DirectoryError>;
}

/// [`CameraDirectory`] backed by the HTTP directory service.
pub struct HttpCameraDirectory {
    client: reqwest::Client,
    url: String,
}

impl HttpCameraDirectory {
    /// Create a client for the directory at `url` with the given timeout.
    pub fn new(url: String, timeout: Duration) -> Result<Self, DirectoryError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { client, url })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CameraDirectory for HttpCameraDirectory {
    async fn fetch_cameras(&self) -> Result<Vec<CameraRecord>, DirectoryError> {
        let response = self.client.get(&self.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(DirectoryError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let body: DirectoryResponse = response.json().await?;
        tracing::debug!(url = %self.url, count = body.cameras.len(), "Fetched camera directory");
        Ok(body.cameras)
    }
}
