//! Router assembly for the sortviz HTTP API.
//!
//! [`build_router`] wires the handlers to their routes with CORS and tracing
//! middleware layers.

use axum::http::header::{
    ACCEPT, ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, AUTHORIZATION,
    CONTENT_LENGTH, CONTENT_TYPE,
};
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub const ALLOWED_METHODS: [Method; 5] = [
    Method::POST,
    Method::GET,
    Method::OPTIONS,
    Method::PUT,
    Method::DELETE,
];

/// Builds the complete axum router with all API routes.
///
/// Any origin may call the API. The CORS layer answers every `OPTIONS`
/// request itself with headers only; the allowed methods and headers are
/// also stamped on every other response.
pub fn build_router(state: AppState) -> Router {
    let allowed_headers = [ACCEPT, CONTENT_TYPE, CONTENT_LENGTH, AUTHORIZATION];

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(allowed_headers);

    Router::new()
        .route("/sort", post(handlers::sort::sort))
        .route("/algorithms", get(handlers::algorithms::list_algorithms))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("POST, GET, OPTIONS, PUT, DELETE"),
        ))
        .layer(SetResponseHeaderLayer::if_not_present(
            ACCESS_CONTROL_ALLOW_HEADERS,
            HeaderValue::from_static("Accept, Content-Type, Content-Length, Authorization"),
        ))
        .with_state(state)
}
