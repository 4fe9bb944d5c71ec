//! Integration tests for the ScamSense HTTP service
//!
//! Drives the full router (middleware included) with `tower::ServiceExt::oneshot`.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use scamsense_server::{create_router, AppState, ServerConfig};
use serde_json::{json, Value};
use std::io::Write;
use std::sync::Arc;
use tower::ServiceExt;

fn test_state(config: ServerConfig) -> Arc<AppState> {
    AppState::shared(config).expect("Failed to create state")
}

fn test_router() -> Router {
    create_router(test_state(ServerConfig::default()))
}

fn json_request(body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/scamsense")
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Vec<u8>) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

async fn send_json(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let (status, bytes) = send(router, request).await;
    let value = serde_json::from_slice(&bytes).expect("response body is not JSON");
    (status, value)
}

#[tokio::test]
async fn test_fixed_text_routes() {
    let cases = [
        (Method::GET, "/", "Hello from ScamSense!"),
        (Method::GET, "/about", "About page"),
        (Method::POST, "/submit", "Form submitted"),
    ];

    for (method, uri, expected) in cases {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let (status, body) = send(test_router(), request).await;
        assert_eq!(status, StatusCode::OK, "{}", uri);
        assert_eq!(String::from_utf8(body).unwrap(), expected);
    }
}

#[tokio::test]
async fn test_accepted_submission_is_normalized() {
    let body = json!({"content": "  this looks like a scam  ", "category": " sms "}).to_string();
    let (status, json) = send_json(test_router(), json_request(body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["success"], true);
    assert_eq!(
        json["data"],
        json!({"content": "this looks like a scam", "category": "sms"})
    );
    assert!(json["request_id"].as_str().is_some());
    assert!(json.get("error").is_none());
}

#[tokio::test]
async fn test_rejections_name_kind_and_field() {
    let cases = [
        (json!({}), "missing_field", "content"),
        (json!({"content": ""}), "empty_value", "content"),
        (json!({"content": 123}), "invalid_type", "content"),
        (json!({"content": "ok", "category": false}), "invalid_type", "category"),
    ];

    for (payload, kind, field) in cases {
        let (status, json) = send_json(test_router(), json_request(payload.to_string())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", payload);
        assert_eq!(json["success"], false);
        assert_eq!(json["error"]["kind"], kind);
        assert_eq!(json["error"]["field"], field);
        assert!(json.get("data").is_none());
    }
}

#[tokio::test]
async fn test_malformed_bodies() {
    for body in ["{not json", "[\"content\"]", "\"content\"", ""] {
        let (status, json) = send_json(test_router(), json_request(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{:?}", body);
        assert_eq!(json["error"]["kind"], "malformed_body");
        assert!(json["error"].get("field").is_none());
    }
}

#[tokio::test]
async fn test_missing_content_type() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/scamsense")
        .body(Body::from(json!({"content": "hi"}).to_string()))
        .unwrap();
    let (status, json) = send_json(test_router(), request).await;

    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert_eq!(json["error"]["kind"], "unsupported_media_type");
}

#[tokio::test]
async fn test_oversized_body() {
    let config = ServerConfig {
        max_body_size: 64,
        ..Default::default()
    };
    let router = create_router(test_state(config));
    let body = json!({"content": "x".repeat(200)}).to_string();
    let (status, json) = send_json(router, json_request(body)).await;

    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(json["error"]["kind"], "payload_too_large");
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/scamsense")
        .header(header::CONTENT_TYPE, "application/json")
        .header("x-request-id", "req-42")
        .body(Body::from(json!({}).to_string()))
        .unwrap();

    let response = test_router().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-42");

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(json["request_id"], "req-42");
}

#[tokio::test]
async fn test_schema_endpoint() {
    let request = Request::builder()
        .uri("/scamsense/schema")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send_json(test_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    let fields = json["data"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["name"], "content");
    assert_eq!(fields[0]["required"], true);
    assert_eq!(fields[1]["name"], "category");
}

#[tokio::test]
async fn test_health_check() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let (status, json) = send_json(test_router(), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["service"], "scamsense");
}

#[tokio::test]
async fn test_metrics_reflect_submissions() {
    let state = test_state(ServerConfig::default());
    let router = create_router(Arc::clone(&state));

    let accepted = json!({"content": "verify your account"}).to_string();
    send(router.clone(), json_request(accepted)).await;
    send(router.clone(), json_request(json!({}).to_string())).await;
    send(router.clone(), json_request("{oops")).await;

    assert_eq!(state.metrics.service().submissions("accepted"), 1.0);
    assert_eq!(state.metrics.service().submissions("rejected"), 1.0);

    let request = Request::builder()
        .uri("/metrics")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(router, request).await;
    let text = String::from_utf8(body).unwrap();

    assert_eq!(status, StatusCode::OK);
    assert!(text.contains("scamsense_rejections_total{field=\"content\",kind=\"missing_field\"} 1"));
    assert!(text.contains("scamsense_malformed_bodies_total 1"));
    assert!(text.contains("route=\"/scamsense\""));
}

#[tokio::test]
async fn test_cors_headers() {
    let request = Request::builder()
        .method(Method::POST)
        .uri("/scamsense")
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::from(json!({"content": "hi"}).to_string()))
        .unwrap();
    let response = test_router().oneshot(request).await.unwrap();
    assert!(response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));

    let config = ServerConfig {
        cors_enabled: false,
        ..Default::default()
    };
    let request = Request::builder()
        .uri("/")
        .header(header::ORIGIN, "http://localhost:5173")
        .body(Body::empty())
        .unwrap();
    let response = create_router(test_state(config))
        .oneshot(request)
        .await
        .unwrap();
    assert!(!response
        .headers()
        .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
}

#[test]
fn test_config_file_loading() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "port = 8088\nmax_body_size = 2048\ncors_enabled = false").unwrap();

    let config = ServerConfig::from_file(file.path()).unwrap();
    assert_eq!(config.port, 8088);
    assert_eq!(config.max_body_size, 2048);
    assert!(!config.cors_enabled);

    assert!(ServerConfig::from_file("/nonexistent/scamsense.toml").is_err());
}
