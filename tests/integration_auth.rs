mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use classdesk::middleware::auth::SESSION_COOKIE;
use classdesk::modules::auth::model::Claims;
use classdesk::modules::users::model::UserRole;
use common::{TEST_JWT_SECRET, session_cookie_for, test_app};
use http_body_util::BodyExt;
use jsonwebtoken::{EncodingKey, Header, encode};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn test_liveness() {
    let app = test_app();

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"server running");
}

#[tokio::test]
async fn test_issue_session_rejects_invalid_email() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "email": "not-an-email" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_issue_session_rejects_malformed_body() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("content-type", "application/json")
        .body(Body::from("this is not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/logout")
        .body(Body::empty())
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("logout must emit a Set-Cookie header")
        .to_str()
        .unwrap();

    assert!(set_cookie.starts_with(&format!("{SESSION_COOKIE}=")));
    assert!(set_cookie.contains("Max-Age=0"));

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "logged out successfully");
}

#[tokio::test]
async fn test_protected_route_without_cookie_is_unauthorized() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/assignments")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "Week 1", "description": "x" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "no token provided");
}

#[tokio::test]
async fn test_protected_route_with_garbage_cookie_is_unauthorized() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/assignments")
        .header("cookie", format!("{SESSION_COOKIE}=garbage.token.value"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "Week 1", "description": "x" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let app = test_app();

    // Signed with the right secret but expired long ago.
    let claims = Claims {
        sub: "00000000-0000-0000-0000-000000000000".to_string(),
        email: "old@example.com".to_string(),
        role: UserRole::Instructor,
        exp: 1000,
        iat: 500,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(TEST_JWT_SECRET.as_bytes()),
    )
    .unwrap();

    let request = Request::builder()
        .method("POST")
        .uri("/assignments")
        .header("cookie", format!("{SESSION_COOKIE}={token}"))
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "Week 1", "description": "x" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_session_with_wrong_role_is_forbidden() {
    let app = test_app();

    let request = Request::builder()
        .method("POST")
        .uri("/assignments")
        .header(
            "cookie",
            session_cookie_for(UserRole::Student, "student@example.com"),
        )
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::to_string(&json!({ "title": "Week 1", "description": "x" })).unwrap(),
        ))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let body = response.into_body().collect().await.unwrap().to_bytes();
    let body: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["message"], "Insufficient permissions");
}
