mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use classdesk::modules::users::model::UserRole;
use common::{session_cookie_for, test_app};
use http_body_util::BodyExt;
use serde_json::json;
use tower::ServiceExt;
use uuid::Uuid;

#[tokio::test]
async fn test_create_submission_requires_session() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/submissions")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "assignmentId": Uuid::new_v4(),
                "content": "my work"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_submission_rejects_instructors() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/submissions")
        .header(
            "cookie",
            session_cookie_for(UserRole::Instructor, "prof@example.com"),
        )
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({
                "assignmentId": Uuid::new_v4(),
                "content": "my work"
            }))
            .unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_create_submission_requires_content() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/submissions")
        .header(
            "cookie",
            session_cookie_for(UserRole::Student, "student@example.com"),
        )
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "assignmentId": Uuid::new_v4() })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "content is required");
}

#[tokio::test]
async fn test_review_submission_requires_session() {
    let app = test_app();

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/submissions/{}", Uuid::new_v4()))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "status": "Approved", "feedback": "nice" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_review_submission_rejects_students() {
    let app = test_app();

    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/submissions/{}", Uuid::new_v4()))
        .header(
            "cookie",
            session_cookie_for(UserRole::Student, "student@example.com"),
        )
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "status": "Approved", "feedback": "nice" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_review_cannot_set_status_back_to_pending() {
    let app = test_app();

    // "Pending" is not a valid review verdict; the request dies at
    // deserialization before any database work.
    let request = Request::builder()
        .method("PATCH")
        .uri(format!("/submissions/{}", Uuid::new_v4()))
        .header(
            "cookie",
            session_cookie_for(UserRole::Instructor, "prof@example.com"),
        )
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "status": "Pending", "feedback": "undo" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_review_submission_rejects_malformed_id() {
    let app = test_app();

    let request = Request::builder()
        .method("PATCH")
        .uri("/submissions/not-a-uuid")
        .header(
            "cookie",
            session_cookie_for(UserRole::Instructor, "prof@example.com"),
        )
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "status": "Approved", "feedback": "nice" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
