//! Authentication test helpers
//!
//! Provides utilities for building a test app, generating tokens and
//! sending requests through the full router.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request},
    response::Response,
    Router,
};
use chrono::{Duration, Utc};
use sportshub::backend::auth::TokenCodec;
use sportshub::backend::routes::create_router;
use sportshub::backend::server::{AppState, ServerConfig};
use sportshub::shared::Role;
use tower::ServiceExt;
use uuid::Uuid;

/// Signing secret shared by the test app and test tokens
pub const TEST_SECRET: &str = "integration-test-secret";

/// Test identity with a ready-made token
pub struct TestUser {
    pub id: String,
    pub email: String,
    pub role: Role,
    pub token: String,
}

/// Configuration with defaults and the test secret
pub fn test_config() -> ServerConfig {
    ServerConfig::builder()
        .jwt_secret(TEST_SECRET)
        .build()
        .expect("test config should be valid")
}

/// App state without a database
pub fn test_state() -> AppState {
    AppState::new(test_config(), None)
}

/// Full router without a database
pub fn test_router() -> Router {
    create_router(test_state())
}

/// Codec matching the test app
pub fn test_codec() -> TokenCodec {
    TokenCodec::new(TEST_SECRET.as_bytes(), Duration::days(7))
}

/// Create a test identity with a fresh token
pub fn test_user(role: Role) -> TestUser {
    let id = Uuid::new_v4().to_string();
    let email = format!("{}_{}@uni.edu", role.as_str().to_lowercase(), &id[..8]);
    let token = test_codec()
        .issue(&id, &email, role)
        .expect("Failed to generate test token");
    TestUser { id, email, role, token }
}

/// A token that expired a day ago
pub fn expired_token(role: Role) -> String {
    test_codec()
        .issue_at("00000000-0000-0000-0000-000000000001", "old@uni.edu", role, Utc::now() - Duration::days(8))
        .expect("Failed to generate expired token")
}

/// A well-formed token signed with a different secret
pub fn foreign_token(role: Role) -> String {
    TokenCodec::new(b"some-other-secret", Duration::days(7))
        .issue("00000000-0000-0000-0000-000000000002", "forged@uni.edu", role)
        .expect("Failed to generate foreign token")
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}

/// Create cookie header value
pub fn session_cookie(token: &str) -> String {
    format!("token={}", token)
}

/// GET with no credential
pub fn get(path: &str) -> Request<Body> {
    Request::builder().uri(path).body(Body::empty()).unwrap()
}

/// GET with a bearer token
pub fn get_with_bearer(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::AUTHORIZATION, auth_header(token))
        .body(Body::empty())
        .unwrap()
}

/// GET with a session cookie
pub fn get_with_cookie(path: &str, token: &str) -> Request<Body> {
    Request::builder()
        .uri(path)
        .header(header::COOKIE, session_cookie(token))
        .body(Body::empty())
        .unwrap()
}

/// Request with a JSON body
pub fn json_request(method: &str, path: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Send one request through a fresh test router
pub async fn send(request: Request<Body>) -> Response {
    test_router().oneshot(request).await.unwrap()
}

/// Read a response body as JSON
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// All `Set-Cookie` values on a response
pub fn set_cookies(response: &Response) -> Vec<String> {
    response
        .headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .filter_map(|v| v.to_str().ok().map(str::to_string))
        .collect()
}
