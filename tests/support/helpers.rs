// tests/support/helpers.rs
use std::sync::Arc;

use api_log_ingest::application::{ports::security::SecretStore, services::ApplicationServices};
use api_log_ingest::domain::api_log::ApiLogRepository;
use api_log_ingest::presentation::http::{routes::build_router, state::HttpState};
use axum::body::{self, Body};
use axum::http::{Method, Request, StatusCode, header::AUTHORIZATION};
use axum::response::Response;
use serde_json::Value;
use tower::util::ServiceExt as _;

use super::mocks::{InMemoryApiLogRepo, StaticSecret};

pub const API_LOGS_URI: &str = "/api/api-logs";

pub fn build_test_state(
    repo: Arc<dyn ApiLogRepository>,
    secrets: Arc<dyn SecretStore>,
) -> HttpState {
    HttpState {
        services: Arc::new(ApplicationServices::new(repo, secrets)),
    }
}

/// Router backed by a fresh in-memory repository and the shared test token.
pub fn make_test_router() -> (axum::Router, Arc<InMemoryApiLogRepo>) {
    let repo = Arc::new(InMemoryApiLogRepo::new());
    let router = make_test_router_with_repo(repo.clone());
    (router, repo)
}

pub fn make_test_router_with_repo(repo: Arc<dyn ApiLogRepository>) -> axum::Router {
    build_router(build_test_state(repo, Arc::new(StaticSecret::test_token())))
}

pub fn post_logs_request(authorization: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(API_LOGS_URI)
        .header("content-type", "application/json");
    if let Some(value) = authorization {
        builder = builder.header(AUTHORIZATION, value);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

pub async fn post_logs(app: axum::Router, authorization: Option<&str>, body: &Value) -> Response {
    app.oneshot(post_logs_request(authorization, body))
        .await
        .unwrap()
}

pub async fn read_json(resp: Response) -> Value {
    let (parts, body_stream) = resp.into_parts();
    let bytes = body::to_bytes(body_stream, 1024 * 1024).await.expect("read body");
    let ct = parts
        .headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");
    assert!(ct.starts_with("application/json"), "unexpected content-type: {ct}");
    serde_json::from_slice(&bytes).expect("expected a json body")
}

/// Assert that a response is an `ErrorResponse` with the expected status, reason and kind.
pub async fn assert_error_response(
    resp: Response,
    expected_status: StatusCode,
    expected_error: &str,
    expected_kind: &str,
) {
    assert_eq!(resp.status(), expected_status);
    let json = read_json(resp).await;
    let err_field = json.get("error").and_then(Value::as_str).unwrap_or("");
    let kind_field = json.get("kind").and_then(Value::as_str).unwrap_or("");
    let msg_field = json.get("message").and_then(Value::as_str).unwrap_or("");
    assert_eq!(err_field, expected_error, "unexpected error field: {err_field}");
    assert_eq!(kind_field, expected_kind, "unexpected kind field: {kind_field}");
    assert!(!msg_field.is_empty(), "expected non-empty message field in ErrorResponse");
}
