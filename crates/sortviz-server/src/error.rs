//! Request failures of the sort API.
//!
//! Every failure is a 400, in one of two shapes. A body that cannot be
//! decoded gets no body at all. A decoded request that cannot be sorted gets
//! `{"success": false, "error": {"code", "message"}}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use sortviz_core::CoreError;

/// The `error` object of a JSON failure body.
#[derive(Debug, Clone, Serialize)]
pub struct ApiErrorDetail {
    /// `UNKNOWN_ALGORITHM` or `TOO_MANY_ELEMENTS`.
    pub code: String,
    pub message: String,
}

/// Why a sort request was refused.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body was not a valid sort request (400, empty body).
    #[error("unable to decode input: {0}")]
    Decode(String),

    /// The algorithm identifier is not registered (400).
    #[error("unknown algorithm: '{0}'")]
    UnknownAlgorithm(String),

    /// The input exceeds the configured element limit (400).
    #[error("too many elements: {len} (limit {max})")]
    TooManyElements { len: usize, max: usize },
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::Decode(_) => return StatusCode::BAD_REQUEST.into_response(),
            ApiError::UnknownAlgorithm(_) => ApiErrorDetail {
                code: "UNKNOWN_ALGORITHM".to_string(),
                message: self.to_string(),
            },
            ApiError::TooManyElements { .. } => ApiErrorDetail {
                code: "TOO_MANY_ELEMENTS".to_string(),
                message: self.to_string(),
            },
        };

        let body = serde_json::json!({
            "success": false,
            "error": detail,
        });

        (StatusCode::BAD_REQUEST, axum::Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::UnknownAlgorithm { name } => ApiError::UnknownAlgorithm(name),
        }
    }
}
