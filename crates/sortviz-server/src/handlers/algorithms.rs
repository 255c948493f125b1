//! Algorithm discovery handler.

use axum::Json;

use crate::schema::algorithms::AlgorithmListResponse;

/// Lists the registered algorithm identifiers.
///
/// `GET /algorithms`
pub async fn list_algorithms() -> Json<AlgorithmListResponse> {
    Json(AlgorithmListResponse::registered())
}
