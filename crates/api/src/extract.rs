//! Request extractors whose rejections render as [`AppError`] bodies.
//!
//! axum's own `Json` and `Path` reject with plain-text responses. These
//! wrappers run the same extraction and convert the rejection, so a malformed
//! body or a non-numeric id still answers with `{ "error", "code" }`.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!(error = %rejection.body_text(), "Rejected request body");
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        // A route/extractor mismatch is a server bug, not a client error.
        if rejection.status().is_server_error() {
            return AppError::InternalError(rejection.body_text());
        }
        AppError::BadRequest(rejection.body_text())
    }
}
