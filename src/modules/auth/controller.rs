use axum::Json;
use axum::extract::State;
use axum_extra::extract::cookie::CookieJar;
use tracing::instrument;
use utoipa::ToSchema;

use crate::middleware::auth::{removal_cookie, session_cookie};
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

use super::model::{MessageResponse, SessionRequest, SessionResponse};
use super::service::AuthService;

/// Shape of every error body.
#[derive(ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

/// Issue a session token for an existing user
///
/// Looks the user up by email and sets the signed session token as an
/// HTTP-only cookie. There is no password step: possession of a registered
/// email is the whole credential.
#[utoipa::path(
    post,
    path = "/jwt",
    request_body = SessionRequest,
    responses(
        (status = 200, description = "Session issued, cookie set", body = SessionResponse),
        (status = 404, description = "No user with that email", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(state, jar))]
pub async fn issue_session(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(dto): ValidatedJson<SessionRequest>,
) -> Result<(CookieJar, Json<SessionResponse>), AppError> {
    let (token, user) = AuthService::issue_session(&state.db, &dto.email, &state.jwt_config).await?;

    Ok((
        jar.add(session_cookie(token)),
        Json(SessionResponse {
            message: "login successful".to_string(),
            user,
        }),
    ))
}

/// Log out
///
/// Clears the session cookie. Purely client-side: a token that already left
/// the building stays valid until it expires.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 200, description = "Cookie cleared", body = MessageResponse)
    ),
    tag = "Authentication"
)]
#[instrument(skip(jar))]
pub async fn logout(jar: CookieJar) -> Result<(CookieJar, Json<MessageResponse>), AppError> {
    Ok((
        jar.remove(removal_cookie()),
        Json(MessageResponse {
            message: "logged out successfully".to_string(),
        }),
    ))
}
