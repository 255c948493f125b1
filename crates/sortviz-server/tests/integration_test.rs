//! End-to-end tests for the sortviz HTTP API.
//!
//! Tests exercise the full stack: HTTP request -> axum router -> handler ->
//! sortviz-core -> HTTP response. Requests go through
//! `tower::ServiceExt::oneshot` without starting a network server.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::json;
use tower::ServiceExt;

use sortviz_server::config::ServerConfig;
use sortviz_server::router::build_router;
use sortviz_server::state::AppState;

// ---------------------------------------------------------------------------
// Test helpers
// ---------------------------------------------------------------------------

fn test_app() -> Router {
    build_router(AppState::new(ServerConfig::default()))
}

/// Sends a request and returns (status, headers, raw body).
async fn send(
    app: &Router,
    request: Request<Body>,
) -> (StatusCode, axum::http::HeaderMap, Vec<u8>) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, headers, body.to_vec())
}

/// POSTs a raw body to `/sort` and returns (status, raw body).
async fn post_sort_raw(app: &Router, body: impl Into<Body>) -> (StatusCode, Vec<u8>) {
    let (status, _, body) = send(
        app,
        Request::builder()
            .method("POST")
            .uri("/sort")
            .header("content-type", "application/json")
            .body(body.into())
            .unwrap(),
    )
    .await;
    (status, body)
}

/// POSTs a JSON body to `/sort` and returns (status, json).
async fn post_sort(app: &Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let (status, body) = post_sort_raw(app, serde_json::to_vec(&body).unwrap()).await;
    let json = serde_json::from_slice(&body).unwrap_or(json!(null));
    (status, json)
}

fn lists(body: &serde_json::Value) -> Vec<Vec<i64>> {
    body["steps"]
        .as_array()
        .unwrap()
        .iter()
        .map(|step| {
            step["list"]
                .as_array()
                .unwrap()
                .iter()
                .map(|v| v.as_i64().unwrap())
                .collect()
        })
        .collect()
}

// ---------------------------------------------------------------------------
// POST /sort
// ---------------------------------------------------------------------------

#[tokio::test]
async fn bubble_sort_returns_wrapped_steps() {
    let app = test_app();
    let (status, body) = post_sort(&app, json!({ "elements": [3, 1, 2], "algorithm": "bubble" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "steps": [
                { "id": 1, "list": [1, 3, 2] },
                { "id": 2, "list": [1, 2, 3] }
            ]
        })
    );
}

#[tokio::test]
async fn insertion_sort_records_every_iteration() {
    let app = test_app();
    let (status, body) =
        post_sort(&app, json!({ "elements": [3, 1, 2], "algorithm": "insertion" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(lists(&body), vec![vec![3, 1, 2], vec![1, 3, 2], vec![1, 2, 3]]);
}

#[tokio::test]
async fn merge_sort_steps_carry_focus() {
    let app = test_app();
    let (status, body) =
        post_sort(&app, json!({ "elements": [4, 3, 2, 1], "algorithm": "merge" })).await;

    assert_eq!(status, StatusCode::OK);
    let steps = body["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[0]["focus"], json!({ "start": 0, "end": 4 }));
    assert_eq!(steps[5]["list"], json!([1, 2, 3, 4]));
    assert_eq!(steps[5]["id"], json!(6));
}

#[tokio::test]
async fn empty_input_yields_no_steps() {
    let app = test_app();
    for algorithm in ["bubble", "insertion", "merge"] {
        let (status, body) = post_sort(&app, json!({ "elements": [], "algorithm": algorithm })).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, json!({ "steps": [] }), "{algorithm}");
    }
}

#[tokio::test]
async fn unknown_algorithm_is_bad_request() {
    let app = test_app();
    let (status, body) = post_sort(&app, json!({ "elements": [2, 1], "algorithm": "quick" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"]["code"], json!("UNKNOWN_ALGORITHM"));
    assert!(body.get("steps").is_none());
}

#[tokio::test]
async fn malformed_body_is_bare_bad_request() {
    let app = test_app();
    for raw in ["", "{", "[1,2,3]", r#"{"elements":"nope","algorithm":"bubble"}"#] {
        let (status, body) = post_sort_raw(&app, raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "body {raw:?}");
        assert!(body.is_empty(), "body {raw:?}");
    }
}

#[tokio::test]
async fn missing_or_null_elements_sort_nothing() {
    let app = test_app();
    for body in [json!({ "algorithm": "bubble" }), json!({ "elements": null, "algorithm": "bubble" })] {
        let (status, steps) = post_sort(&app, body.clone()).await;
        assert_eq!(status, StatusCode::OK, "{body}");
        assert_eq!(steps, json!({ "steps": [] }), "{body}");
    }
}

#[tokio::test]
async fn missing_algorithm_is_decode_failure() {
    let app = test_app();
    let (status, body) = post_sort_raw(&app, r#"{"elements":[1,2]}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body.is_empty());
}

#[tokio::test]
async fn content_type_is_not_required() {
    let app = test_app();
    let (status, _, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/sort")
            .body(Body::from(r#"{"elements":[2,1],"algorithm":"bubble"}"#))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(lists(&json), vec![vec![1, 2]]);
}

#[tokio::test]
async fn oversized_input_is_rejected() {
    let app = build_router(AppState::new(ServerConfig {
        max_elements: Some(3),
        ..ServerConfig::default()
    }));

    let (status, body) =
        post_sort(&app, json!({ "elements": [4, 3, 2, 1], "algorithm": "bubble" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], json!("TOO_MANY_ELEMENTS"));

    let (status, _) = post_sort(&app, json!({ "elements": [3, 2, 1], "algorithm": "bubble" })).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn default_config_accepts_large_input() {
    let app = test_app();
    let elements: Vec<i64> = (0..257).rev().collect();

    let (status, body) = post_sort(&app, json!({ "elements": elements, "algorithm": "merge" })).await;
    assert_eq!(status, StatusCode::OK);
    let last = lists(&body).pop().unwrap();
    assert_eq!(last, (0..257).collect::<Vec<i64>>());
}

// ---------------------------------------------------------------------------
// GET /algorithms
// ---------------------------------------------------------------------------

#[tokio::test]
async fn lists_registered_algorithms() {
    let app = test_app();
    let (status, _, body) = send(
        &app,
        Request::builder().uri("/algorithms").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(json, json!({ "algorithms": ["bubble", "insertion", "merge"] }));
}

// ---------------------------------------------------------------------------
// CORS
// ---------------------------------------------------------------------------

fn assert_cors_headers(headers: &axum::http::HeaderMap) {
    assert_eq!(headers["access-control-allow-origin"], "*");

    let methods = headers["access-control-allow-methods"].to_str().unwrap();
    for method in ["POST", "GET", "OPTIONS", "PUT", "DELETE"] {
        assert!(methods.contains(method), "missing {method} in {methods}");
    }

    let allowed = headers["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .to_ascii_lowercase();
    for header in ["accept", "content-type", "content-length", "authorization"] {
        assert!(allowed.contains(header), "missing {header} in {allowed}");
    }
}

#[tokio::test]
async fn preflight_returns_headers_only() {
    let app = test_app();
    let (status, headers, body) = send(
        &app,
        Request::builder()
            .method("OPTIONS")
            .uri("/sort")
            .header("origin", "http://localhost:3000")
            .header("access-control-request-method", "POST")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_cors_headers(&headers);
}

#[tokio::test]
async fn bare_options_returns_headers_only() {
    let app = test_app();
    let (status, headers, body) = send(
        &app,
        Request::builder()
            .method("OPTIONS")
            .uri("/sort")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
    assert_cors_headers(&headers);
}

#[tokio::test]
async fn cors_headers_on_success_and_error() {
    let app = test_app();
    for body in [
        r#"{"elements":[2,1],"algorithm":"bubble"}"#,
        r#"{"elements":[2,1],"algorithm":"quick"}"#,
        "not json",
    ] {
        let (_, headers, _) = send(
            &app,
            Request::builder()
                .method("POST")
                .uri("/sort")
                .header("origin", "http://localhost:3000")
                .body(Body::from(body))
                .unwrap(),
        )
        .await;
        assert_cors_headers(&headers);
    }
}
