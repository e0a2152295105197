//! Stream URL resolution.
//!
//! Turns a slot's [`CameraAssignment`] into the single URL the render surface
//! should load. Rules are checked in a fixed order and the first match wins:
//!
//! 1. MJPEG-capable (explicit flag or FDOT jurisdiction) with a stream URL:
//!    the stream URL behind the media proxy.
//! 2. FDOT jurisdiction with an FDOT id: the FDOT proxy path for that id.
//! 3. A snapshot URL, verbatim.
//! 4. A raw stream URL, verbatim.
//! 5. The placeholder image.

use serde::Serialize;

use crate::camera::CameraAssignment;

/* --------------------------------------------------------------------------
Configuration
-------------------------------------------------------------------------- */

/// Default media proxy base address.
pub const DEFAULT_MEDIA_PROXY_BASE: &str = "http://localhost:8000";

/// Default FDOT proxy path; `{fdot_id}` is replaced with the camera's id.
pub const DEFAULT_FDOT_PROXY_PATH: &str = "/api/fdot/{fdot_id}/stream";

/// Default image shown when an assignment carries no usable URL.
pub const DEFAULT_PLACEHOLDER_URL: &str = "/images/camera-placeholder.svg";

/// Token substituted in [`ResolverConfig::fdot_proxy_path`].
const FDOT_ID_TOKEN: &str = "{fdot_id}";

/// Addresses the resolver combines with assignment fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverConfig {
    pub media_proxy_base: String,
    pub fdot_proxy_path: String,
    pub placeholder_url: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            media_proxy_base: DEFAULT_MEDIA_PROXY_BASE.to_string(),
            fdot_proxy_path: DEFAULT_FDOT_PROXY_PATH.to_string(),
            placeholder_url: DEFAULT_PLACEHOLDER_URL.to_string(),
        }
    }
}

/* --------------------------------------------------------------------------
Resolution
-------------------------------------------------------------------------- */

/// Which rule produced a resolved URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamSource {
    MjpegProxy,
    FdotProxy,
    Snapshot,
    DirectStream,
    Placeholder,
}

/// A resolved URL together with the rule that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedStream {
    pub url: String,
    pub source: StreamSource,
}

/// Resolve the URL to render for `assignment`.
pub fn resolve(assignment: &CameraAssignment, config: &ResolverConfig) -> ResolvedStream {
    if assignment.mjpeg_capable() {
        if let Some(stream_url) = assignment.stream_url.as_deref() {
            return ResolvedStream {
                url: join_url(&config.media_proxy_base, stream_url),
                source: StreamSource::MjpegProxy,
            };
        }
    }

    if assignment.is_fdot() {
        if let Some(fdot_id) = assignment.fdot_id.as_deref() {
            let path = config.fdot_proxy_path.replace(FDOT_ID_TOKEN, fdot_id);
            return ResolvedStream {
                url: join_url(&config.media_proxy_base, &path),
                source: StreamSource::FdotProxy,
            };
        }
    }

    if let Some(snapshot_url) = assignment.snapshot_url.as_deref() {
        return ResolvedStream {
            url: snapshot_url.to_string(),
            source: StreamSource::Snapshot,
        };
    }

    if let Some(stream_url) = assignment.stream_url.as_deref() {
        return ResolvedStream {
            url: stream_url.to_string(),
            source: StreamSource::DirectStream,
        };
    }

    ResolvedStream {
        url: config.placeholder_url.clone(),
        source: StreamSource::Placeholder,
    }
}

/// Shorthand for [`resolve`] when only the URL is needed.
pub fn resolve_url(assignment: &CameraAssignment, config: &ResolverConfig) -> String {
    resolve(assignment, config).url
}

/// Join a base address and a path with exactly one `/` between them.
fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    if base.is_empty() {
        format!("/{path}")
    } else {
        format!("{base}/{path}")
    }
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
