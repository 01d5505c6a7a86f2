// tests/support/helpers.rs
use std::sync::Arc;

use axum::body::{self, Body};
use axum::http::{Request, StatusCode, header};
use serde_json::Value;

use article_hub::application::ports::time::Clock;
use article_hub::application::services::ApplicationServices;
use article_hub::domain::article::ArticleRepository;
use article_hub::presentation::http::{routes::build_router, state::HttpState};

use super::mocks::FixedClock;

pub fn build_services(repo: Arc<dyn ArticleRepository>) -> ApplicationServices {
    let clock: Arc<dyn Clock> = Arc::new(FixedClock);
    ApplicationServices::new(repo, clock)
}

pub fn make_test_router(repo: Arc<dyn ArticleRepository>) -> axum::Router {
    let services = Arc::new(build_services(repo));
    build_router(HttpState { services })
}

pub fn json_request(method: &str, uri: &str, payload: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap()
}

pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub async fn read_json(resp: axum::response::Response) -> (StatusCode, Value) {
    let status = resp.status();
    let bytes = body::to_bytes(resp.into_body(), 1024 * 1024)
        .await
        .expect("read body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Assert that a response is an ErrorResponse JSON with the expected status and message.
pub async fn assert_error_response(
    resp: axum::response::Response,
    expected_status: StatusCode,
    expected_message: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let (parts, body_stream) = resp.into_parts();
    let body_bytes = body::to_bytes(body_stream, 1024 * 1024)
        .await
        .expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(
        ct.starts_with("application/json"),
        "unexpected content-type: {ct}"
    );
    let json: Value =
        serde_json::from_slice(&body_bytes).expect("expected valid json body for error");
    let err_field = json.get("error").and_then(|v| v.as_str()).unwrap_or("");
    let msg_field = json.get("message").and_then(|v| v.as_str()).unwrap_or("");
    assert_eq!(
        err_field,
        expected_status.canonical_reason().unwrap_or("error")
    );
    assert!(
        msg_field.contains(expected_message),
        "unexpected message field: {msg_field}"
    );
}
