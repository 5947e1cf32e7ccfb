//! Role gate.
//!
//! The allowed-role set is fixed when a route is registered, never computed
//! per request. Two equivalent forms exist, both working over the closed
//! [`UserRole`] enumeration:
//!
//! 1. Layer form: [`require_instructor`] / [`require_student`] with
//!    `axum::middleware::from_fn_with_state`, for routes whose handler does
//!    not need the caller's identity.
//! 2. Extractor form: [`RequireInstructor`] / [`RequireStudent`], for
//!    handlers that also read the caller's email from the session.
//!
//! Either way a missing or invalid session is a 401 (from the verifier) and
//! a wrong role is a 403.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::middleware::auth::SessionUser;
use crate::modules::users::model::UserRole;
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Middleware that lets the request through only when the session's role is
/// in `allowed_roles`.
pub async fn require_roles(
    State(state): State<AppState>,
    req: Request,
    next: Next,
    allowed_roles: Vec<UserRole>,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let session = SessionUser::from_request_parts(&mut parts, &state).await?;
    check_any_role(&session, &allowed_roles)?;

    let req = Request::from_parts(parts, body);
    Ok(next.run(req).await)
}

/// Layer form of the instructor gate, for `middleware::from_fn_with_state`.
pub async fn require_instructor(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Instructor]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Layer form of the student gate.
pub async fn require_student(State(state): State<AppState>, req: Request, next: Next) -> Response {
    match require_roles(State(state), req, next, vec![UserRole::Student]).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}

/// Extractor gating a handler to instructors, carrying the verified session.
#[derive(Debug, Clone)]
pub struct RequireInstructor(pub SessionUser);

impl FromRequestParts<AppState> for RequireInstructor {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = SessionUser::from_request_parts(parts, state).await?;
        check_any_role(&session, &[UserRole::Instructor])?;

        Ok(RequireInstructor(session))
    }
}

/// Extractor gating a handler to students, carrying the verified session.
#[derive(Debug, Clone)]
pub struct RequireStudent(pub SessionUser);

impl FromRequestParts<AppState> for RequireStudent {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let session = SessionUser::from_request_parts(parts, state).await?;
        check_any_role(&session, &[UserRole::Student])?;

        Ok(RequireStudent(session))
    }
}

/// Membership test behind both gate forms.
pub fn check_any_role(session: &SessionUser, allowed_roles: &[UserRole]) -> Result<(), AppError> {
    if !allowed_roles.contains(&session.0.role) {
        return Err(AppError::forbidden(anyhow::anyhow!(
            "Insufficient permissions"
        )));
    }

    Ok(())
}
