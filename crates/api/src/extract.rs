//! Extractors whose rejections go through [`AppError`].
//!
//! axum's own `Json` and `Path` reject with plain-text bodies. These wrappers
//! keep malformed bodies and unparsable path parameters in the same
//! `{ "error", "code" }` shape as every other failure.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
