use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;

use crate::middleware::auth::SessionUser;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::users::model::{CreateUserDto, User, UserCreatedResponse};
use crate::modules::users::service::UserService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// Register a new user
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Email already registered", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(dto): ValidatedJson<CreateUserDto>,
) -> Result<(StatusCode, Json<UserCreatedResponse>), AppError> {
    let user_id = UserService::create_user(&state.db, dto).await?;

    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User created successfully".to_string(),
            user_id,
        }),
    ))
}

/// Fetch a user by email
///
/// A caller may only look up their own record; any other email is a 403
/// regardless of whether it exists.
#[utoipa::path(
    get,
    path = "/users/{email}",
    params(
        ("email" = String, Path, description = "Email of the user to fetch")
    ),
    responses(
        (status = 200, description = "The user document", body = User),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Email does not match the session", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Users"
)]
#[instrument(skip(state))]
pub async fn get_user_by_email(
    State(state): State<AppState>,
    session: SessionUser,
    Path(email): Path<String>,
) -> Result<Json<User>, AppError> {
    if session.email() != email {
        return Err(AppError::forbidden(anyhow::anyhow!("Forbidden")));
    }

    let user = UserService::get_user_by_email(&state.db, &email).await?;
    Ok(Json(user))
}
