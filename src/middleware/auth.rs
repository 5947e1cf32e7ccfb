//! Session verification.
//!
//! The session token travels in an HTTP-only cookie. [`SessionUser`] is the
//! verifier: it reads the cookie, checks signature and expiry against the
//! shared secret, and hands the decoded claims to the handler. Requests
//! without a valid cookie are rejected with 401 before any handler runs.
//! Verification is a pure function of the cookie value and the secret; it
//! never touches the database.

use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use uuid::Uuid;

use crate::modules::auth::model::Claims;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::verify_token;

/// Name of the session cookie.
pub const SESSION_COOKIE: &str = "accessToken";

/// Extractor that validates the session cookie and provides the caller's
/// decoded identity.
#[derive(Debug, Clone)]
pub struct SessionUser(pub Claims);

impl SessionUser {
    pub fn user_id(&self) -> Result<Uuid, AppError> {
        Uuid::parse_str(&self.0.sub)
            .map_err(|_| AppError::unauthorized(anyhow::anyhow!("invalid user id in token")))
    }

    pub fn email(&self) -> &str {
        &self.0.email
    }

    pub fn role(&self) -> UserRole {
        self.0.role
    }
}

impl FromRequestParts<AppState> for SessionUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);

        let token = jar
            .get(SESSION_COOKIE)
            .map(|cookie| cookie.value().to_owned())
            .ok_or_else(|| AppError::unauthorized(anyhow::anyhow!("no token provided")))?;

        let claims = verify_token(&token, &state.jwt_config)?;

        Ok(SessionUser(claims))
    }
}

/// Builds the session cookie: HttpOnly, SameSite=Lax, path "/", not marked
/// Secure so local frontends over plain HTTP can log in.
pub fn session_cookie(token: String) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token))
        .http_only(true)
        .secure(false)
        .same_site(SameSite::Lax)
        .path("/")
        .build()
}

/// Cookie used to clear the session on logout. Logout is purely client-side:
/// an already-issued token stays valid until its expiry.
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, "")).path("/").build()
}
