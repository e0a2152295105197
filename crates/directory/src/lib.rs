//! Camera directory access for the video wall.
//!
//! Fetches camera records from the external directory service, substitutes a
//! static list when the service is unreachable, and serves the result to the
//! camera picker.

pub mod catalog;
pub mod client;
pub mod fallback;

pub use catalog::{CameraCatalog, CameraFilter, CameraSource, CatalogSnapshot};
pub use client::{CameraDirectory, DirectoryError, HttpCameraDirectory};
pub use fallback::fallback_cameras;
