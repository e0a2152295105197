//! Camera records as served by the directory, and the snapshot stored in a
//! slot when a camera is assigned.

use serde::{Deserialize, Serialize};

/// Jurisdiction whose cameras are served through the dedicated FDOT proxy.
pub const JURISDICTION_FDOT: &str = "FDOT";

/// The directory's view of a camera. Read-only to the wall.
///
/// Only `id` and `name` are required; everything else is optional so partial
/// records from the directory still deserialize.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CameraRecord {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub stream_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub camera_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jurisdiction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sector: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fdot_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub supports_mjpeg: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub snapshot_url: Option<String>,
}

/// Snapshot of a camera record taken at assignment time.
///
/// This is a copy: later directory refreshes never touch assignments that
/// already sit in a slot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CameraAssignment {
    pub camera_id: String,
    pub name: String,
    pub stream_url: Option<String>,
    pub jurisdiction: Option<String>,
    pub fdot_id: Option<String>,
    pub supports_mjpeg: bool,
    pub snapshot_url: Option<String>,
}

impl CameraAssignment {
    /// Whether the camera belongs to the FDOT jurisdiction.
    pub fn is_fdot(&self) -> bool {
        self.jurisdiction.as_deref() == Some(JURISDICTION_FDOT)
    }

    /// Explicit MJPEG capability, or implied by the FDOT jurisdiction.
    pub fn mjpeg_capable(&self) -> bool {
        self.supports_mjpeg || self.is_fdot()
    }
}

impl From<&CameraRecord> for CameraAssignment {
    fn from(record: &CameraRecord) -> Self {
        Self {
            camera_id: record.id.clone(),
            name: record.name.clone(),
            stream_url: non_empty(Some(&record.stream_url)),
            jurisdiction: non_empty(record.jurisdiction.as_ref()),
            fdot_id: non_empty(record.fdot_id.as_ref()),
            supports_mjpeg: record.supports_mjpeg.unwrap_or(false),
            snapshot_url: non_empty(record.snapshot_url.as_ref()),
        }
    }
}

/// Blank strings from the directory count as absent.
fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
