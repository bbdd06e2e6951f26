//! Integration tests for health, route resolution, and general HTTP
//! behaviour. No test needs a running database: the health endpoint's
//! DB probe is bounded and reports degraded, and everything else never
//! touches the lazy test pool.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get};
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Test: GET /health returns 200 with expected JSON fields
// ---------------------------------------------------------------------------

#[tokio::test]
async fn health_check_answers_promptly_without_a_database() {
    let app = common::build_test_app(common::test_pool());
    let response = get(app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;

    // The bounded DB probe fails against the lazy pool, so the service
    // reports itself degraded instead of timing out the request.
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
    assert!(json["version"].is_string());
}

// ---------------------------------------------------------------------------
// Test: Unknown route returns 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app(common::test_pool());
    let response = get(app, "/this-route-does-not-exist").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ---------------------------------------------------------------------------
// Test: x-request-id header is present in response
// ---------------------------------------------------------------------------

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app(common::test_pool());
    let response = get(app, "/api/v1/entities/dashboards").await;

    assert_eq!(response.status(), StatusCode::OK);

    let request_id = response.headers().get("x-request-id");
    assert!(
        request_id.is_some(),
        "Response must contain an x-request-id header"
    );

    // The value should be a valid UUID (36 chars with hyphens).
    let id_str = request_id.unwrap().to_str().unwrap();
    assert_eq!(id_str.len(), 36, "x-request-id should be a UUID string");
}

// ---------------------------------------------------------------------------
// Test: CORS preflight OPTIONS request returns correct headers
// ---------------------------------------------------------------------------

#[tokio::test]
async fn cors_preflight_returns_correct_headers() {
    let app = common::build_test_app(common::test_pool());

    // CORS preflight requires custom headers, so we build the request manually.
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/dashboards")
        .header("Origin", "http://localhost:5173")
        .header("Access-Control-Request-Method", "POST")
        .header("Access-Control-Request-Headers", "content-type")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("http://localhost:5173")
    );
}

// ---------------------------------------------------------------------------
// Test: GET /api/v1/entities/{route} resolves known plural segments
// ---------------------------------------------------------------------------

#[tokio::test]
async fn known_route_resolves_to_entity() {
    let app = common::build_test_app(common::test_pool());
    let response = get(app, "/api/v1/entities/dashboards").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["route"], "dashboards");
    assert_eq!(json["data"]["entity"], "dashboard");
    assert_eq!(json["data"]["known"], true);
}

// ---------------------------------------------------------------------------
// Test: Unknown segments resolve by identity and are flagged unknown
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_route_resolves_by_identity() {
    let app = common::build_test_app(common::test_pool());
    let response = get(app, "/api/v1/entities/gizmos").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["route"], "gizmos");
    assert_eq!(json["data"]["entity"], "gizmos");
    assert_eq!(json["data"]["known"], false);
}

// ---------------------------------------------------------------------------
// Test: Dispatch rejects segments outside the route table with 404
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dispatch_rejects_unknown_resource() {
    let app = common::build_test_app(common::test_pool());
    let response = get(app, "/api/v1/resources/gizmos").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

// ---------------------------------------------------------------------------
// Test: Dispatch rejects mapped entities without a backing collection
// ---------------------------------------------------------------------------

#[tokio::test]
async fn dispatch_rejects_entity_without_collection() {
    let app = common::build_test_app(common::test_pool());
    let response = get(app, "/api/v1/resources/cars").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
