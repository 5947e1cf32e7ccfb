mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use classdesk::modules::users::model::UserRole;
use common::{session_cookie_for, test_app};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_user_lookup_without_cookie_is_unauthorized() {
    let app = test_app();

    let request = Request::builder()
        .uri("/users/ada@example.com")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_user_lookup_of_other_email_is_forbidden() {
    let app = test_app();

    let request = Request::builder()
        .uri("/users/other@example.com")
        .header(
            "cookie",
            session_cookie_for(UserRole::Student, "me@example.com"),
        )
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Forbidden");
}

#[tokio::test]
async fn test_self_lookup_applies_to_instructors_too() {
    let app = test_app();

    // An instructor role grants nothing here: only the session's own email
    // may be fetched.
    let request = Request::builder()
        .uri("/users/someone-else@example.com")
        .header(
            "cookie",
            session_cookie_for(UserRole::Instructor, "prof@example.com"),
        )
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_user_rejects_invalid_email() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": "nope",
                "name": "Ada",
                "role": "student"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_create_user_rejects_missing_name() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": "ada@example.com",
                "role": "student"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "name is required");
}

#[tokio::test]
async fn test_create_user_rejects_unknown_role() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/users")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "email": "ada@example.com",
                "name": "Ada",
                "role": "admin"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
