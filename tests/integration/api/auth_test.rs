//! Authentication API integration tests
//!
//! Tests for the authentication endpoints including login, signup, logout
//! and user info. Tests that need Postgres are ignored by default; run them
//! with `DATABASE_URL` set and `--ignored`.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::json;
use serial_test::serial;
use sportshub::shared::Role;
use tower::ServiceExt;

use crate::common::*;
use crate::{assert_contains, assert_ok};

#[tokio::test]
async fn test_logout_clears_cookie() {
    let response = send(json_request("POST", "/api/auth/logout", json!({}))).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert_contains!(cookies[0], "Max-Age=0");
}

#[tokio::test]
async fn test_signup_without_database() {
    let response = send(json_request(
        "POST",
        "/api/auth/signup",
        json!({"name": "Ana", "email": "ana@uni.edu", "password": "password123"}),
    ))
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_signup_rejects_bad_input_without_database() {
    for body in [
        json!({"name": "Ana", "email": "ana@uni.edu", "password": "short"}),
        json!({"name": "Ana", "email": "not-an-email", "password": "password123"}),
        json!({"name": "Ana", "email": "ana@uni.edu", "password": "password123", "role": "ADMIN"}),
    ] {
        let response = send(json_request("POST", "/api/auth/signup", body)).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

#[tokio::test]
async fn test_login_without_database() {
    let response = send(json_request(
        "POST",
        "/api/auth/login",
        json!({"email": "ana@uni.edu", "password": "password123"}),
    ))
    .await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_signup_login_me() {
    let db = TestDatabase::new().await;

    let response = db
        .router()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            json!({"name": "Ana", "email": "Ana@Uni.edu", "password": "password123", "role": "COACH"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    assert_eq!(set_cookies(&response).len(), 1);
    let body = body_json(response).await;
    assert_eq!(body["user"]["email"], "ana@uni.edu");
    assert_eq!(body["user"]["role"], "COACH");
    assert!(body["user"].get("password_hash").is_none());

    let identity = assert_ok!(test_codec().verify(body["token"].as_str().unwrap()));
    assert_eq!(identity.role, Role::Coach);

    let response = db
        .router()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"email": "ana@uni.edu", "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["token"].as_str().unwrap().to_string();

    let response = db
        .router()
        .oneshot(get_with_bearer("/api/auth/me", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["name"], "Ana");
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_signup_duplicate_email() {
    let db = TestDatabase::new().await;
    let request = || {
        json_request(
            "POST",
            "/api/auth/signup",
            json!({"name": "Ben", "email": "ben@uni.edu", "password": "password123"}),
        )
    };

    let first = db.router().oneshot(request()).await.unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = db.router().oneshot(request()).await.unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_login_wrong_password() {
    let db = TestDatabase::new().await;
    let signup = db
        .router()
        .oneshot(json_request(
            "POST",
            "/api/auth/signup",
            json!({"name": "Cy", "email": "cy@uni.edu", "password": "password123"}),
        ))
        .await
        .unwrap();
    assert_eq!(signup.status(), StatusCode::CREATED);

    for body in [
        json!({"email": "cy@uni.edu", "password": "wrong-password"}),
        json!({"email": "nobody@uni.edu", "password": "password123"}),
    ] {
        let response = db
            .router()
            .oneshot(json_request("POST", "/api/auth/login", body))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Invalid email or password");
    }
}
