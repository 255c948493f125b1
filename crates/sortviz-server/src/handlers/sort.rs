//! Sort handler.

use axum::body::Bytes;
use axum::extract::State;
use axum::Json;

use crate::error::ApiError;
use crate::schema::sort::{SortRequest, SortResponse};
use crate::state::AppState;

/// Runs the requested algorithm and returns every recorded step.
///
/// `POST /sort`
///
/// The body is decoded by hand rather than through the `Json` extractor so
/// that a missing content type is accepted and every decode failure maps to
/// a bare 400.
pub async fn sort(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<SortResponse>, ApiError> {
    let req: SortRequest = serde_json::from_slice(&body).map_err(|err| {
        tracing::warn!("unable to decode input: {}", err);
        ApiError::Decode(err.to_string())
    })?;

    if let Some(max) = state.config.max_elements {
        if req.elements.len() > max {
            tracing::warn!(len = req.elements.len(), max, "rejecting oversized input");
            return Err(ApiError::TooManyElements {
                len: req.elements.len(),
                max,
            });
        }
    }

    let algorithm = req.algorithm.clone();
    let len = req.elements.len();
    let steps = sortviz_core::sort(req).inspect_err(|err| {
        tracing::warn!("{}", err);
    })?;

    tracing::debug!(%algorithm, len, steps = steps.len(), "sorted");
    Ok(Json(steps))
}
