//! Error types for the web UI.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::render;

/// Errors that can occur in the web UI.
#[derive(Debug, Error)]
pub enum WebError {
    /// Backend request failed.
    #[error("{0}")]
    Api(#[from] jobdesk_api::ApiError),

    /// Unknown job or page.
    #[error("not found: {0}")]
    NotFound(String),

    /// Malformed request (unknown filter field, ...).
    #[error("bad request: {0}")]
    BadRequest(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            WebError::Api(e) if e.status() == Some(404) => StatusCode::NOT_FOUND,
            WebError::Api(_) => StatusCode::BAD_GATEWAY,
            WebError::NotFound(_) => StatusCode::NOT_FOUND,
            WebError::BadRequest(_) => StatusCode::BAD_REQUEST,
        };
        (status, Html(render::error_page(&self.to_string()))).into_response()
    }
}
