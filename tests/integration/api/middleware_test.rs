//! Authentication middleware integration tests
//!
//! Every path class against every credential state, through the real router.

use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use pretty_assertions::assert_eq;
use sportshub::shared::Role;

use crate::common::*;
use crate::{assert_contains, assert_redirects_to_login};

#[tokio::test]
async fn test_root_is_public() {
    let response = send(get("/")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["page"], "home");
}

#[tokio::test]
async fn test_login_page_ignores_bad_cookie() {
    let response = send(get_with_cookie("/login", "garbage")).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn test_health() {
    let response = send(get("/health")).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_protected_without_credential_redirects() {
    let response = send(get("/admin/dashboard")).await;
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_redirects_to_login!(response);
    // Nothing to clear when nothing was presented
    assert!(set_cookies(&response).is_empty());
}

#[tokio::test]
async fn test_protected_api_without_credential_redirects() {
    let response = send(get("/api/auth/me")).await;
    assert_redirects_to_login!(response);
}

#[tokio::test]
async fn test_expired_cookie_redirects_and_clears() {
    let response = send(get_with_cookie("/student/dashboard", &expired_token(Role::Student))).await;
    assert_redirects_to_login!(response);

    let cookies = set_cookies(&response);
    assert_eq!(cookies.len(), 1);
    assert_contains!(cookies[0], "token=;");
    assert_contains!(cookies[0], "Max-Age=0");
}

#[tokio::test]
async fn test_foreign_signature_redirects() {
    let response = send(get_with_bearer("/coach/dashboard", &foreign_token(Role::Coach))).await;
    assert_redirects_to_login!(response);
}

#[tokio::test]
async fn test_unspecified_path_without_credential_passes_through() {
    let response = send(get("/about")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unspecified_path_with_garbage_cookie_redirects() {
    let response = send(get_with_cookie("/about", "not-a-token")).await;
    assert_redirects_to_login!(response);
    assert_eq!(set_cookies(&response).len(), 1);
}

#[tokio::test]
async fn test_admin_reaches_admin_dashboard() {
    let admin = test_user(Role::Admin);
    let response = send(get_with_bearer("/admin/dashboard", &admin.token)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["section"], "/admin/dashboard");
    assert_eq!(body["user_id"], admin.id);
    assert_eq!(body["email"], admin.email);
    assert_eq!(body["role"], "ADMIN");
}

#[tokio::test]
async fn test_cookie_credential_is_accepted() {
    let coach = test_user(Role::Coach);
    let response = send(get_with_cookie("/coach/dashboard", &coach.token)).await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_student_forbidden_on_admin_dashboard() {
    let student = test_user(Role::Student);
    let response = send(get_with_bearer("/admin/dashboard", &student.token)).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = body_json(response).await;
    assert_eq!(body["status"], 403);
    assert_eq!(body["error"], "You do not have access to this resource");
}

#[tokio::test]
async fn test_bearer_wins_over_cookie() {
    let student = test_user(Role::Student);
    let request = Request::builder()
        .uri("/student/dashboard")
        .header(header::AUTHORIZATION, auth_header(&student.token))
        .header(header::COOKIE, session_cookie("garbage"))
        .body(Body::empty())
        .unwrap();
    assert_eq!(send(request).await.status(), StatusCode::OK);

    let request = Request::builder()
        .uri("/student/dashboard")
        .header(header::AUTHORIZATION, auth_header("garbage"))
        .header(header::COOKIE, session_cookie(&student.token))
        .body(Body::empty())
        .unwrap();
    let response = send(request).await;
    assert_redirects_to_login!(response);
}

#[tokio::test]
async fn test_authenticated_api_without_database() {
    let student = test_user(Role::Student);
    let response = send(get_with_bearer("/api/teams", &student.token)).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn test_role_checked_before_storage() {
    let student = test_user(Role::Student);
    let request = Request::builder()
        .method("POST")
        .uri("/api/events")
        .header(header::AUTHORIZATION, auth_header(&student.token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(r#"{"title":"Trials","starts_at":"2026-03-01T18:00:00Z"}"#))
        .unwrap();
    assert_eq!(send(request).await.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_missing_static_file_is_not_found() {
    let response = send(get("/static/missing.css")).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
