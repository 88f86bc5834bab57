//! Teams, events and posts against a real database

use axum::http::{header, Request, StatusCode};
use axum::body::Body;
use serde_json::json;
use serial_test::serial;
use sportshub::backend::auth::users::create_user;
use sportshub::shared::Role;
use tower::ServiceExt;

use crate::common::*;

/// Insert a user row and return a bearer token for it
async fn seeded_token(db: &TestDatabase, name: &str, role: Role) -> (String, String) {
    let email = format!("{}@uni.edu", name.to_lowercase());
    let user = create_user(db.pool(), name, &email, "not-a-real-hash", role)
        .await
        .expect("Failed to seed user");
    let token = test_codec()
        .issue(&user.id.to_string(), &user.email, role)
        .expect("Failed to issue token");
    (user.id.to_string(), token)
}

fn authed(method: &str, path: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(path)
        .header(header::AUTHORIZATION, auth_header(token))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_coach_creates_team_and_student_joins() {
    let db = TestDatabase::new().await;
    let (coach_id, coach) = seeded_token(&db, "Coach", Role::Coach).await;
    let (_, student) = seeded_token(&db, "Student", Role::Student).await;

    let response = db
        .router()
        .oneshot(authed("POST", "/api/teams", &coach, json!({"name": "Falcons", "sport": "Football"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let team = body_json(response).await;
    assert_eq!(team["coach_id"], coach_id);
    let team_id = team["id"].as_str().unwrap().to_string();

    let response = db
        .router()
        .oneshot(authed("POST", &format!("/api/teams/{}/join", team_id), &student, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["team_id"], team_id);

    let response = db
        .router()
        .oneshot(authed("POST", &format!("/api/teams/{}/join", team_id), &coach, json!({})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_events_admin_only() {
    let db = TestDatabase::new().await;
    let (_, admin) = seeded_token(&db, "Admin", Role::Admin).await;
    let (_, student) = seeded_token(&db, "Student", Role::Student).await;

    let event = json!({"title": "Trials", "location": "Gym", "starts_at": "2026-03-01T18:00:00Z"});
    let response = db
        .router()
        .oneshot(authed("POST", "/api/events", &admin, event))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let event_id = body_json(response).await["id"].as_str().unwrap().to_string();

    let response = db
        .router()
        .oneshot(get_with_bearer("/api/events", &student))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    let path = format!("/api/events/{}", event_id);
    let response = db.router().oneshot(authed("DELETE", &path, &student, json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = db.router().oneshot(authed("DELETE", &path, &admin, json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = db.router().oneshot(authed("DELETE", &path, &admin, json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore]
#[serial]
async fn test_only_author_deletes_post() {
    let db = TestDatabase::new().await;
    let (_, author) = seeded_token(&db, "Author", Role::Student).await;
    let (_, admin) = seeded_token(&db, "Admin", Role::Admin).await;

    let response = db
        .router()
        .oneshot(authed("POST", "/api/posts", &author, json!({"content": "Practice at 6"})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let post = body_json(response).await;
    assert_eq!(post["author_name"], "Author");
    let path = format!("/api/posts/{}", post["id"].as_str().unwrap());

    let response = db.router().oneshot(authed("DELETE", &path, &admin, json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let response = db.router().oneshot(authed("DELETE", &path, &author, json!({}))).await.unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = db
        .router()
        .oneshot(authed("POST", "/api/posts", &author, json!({"content": "   "})))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
