use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::RequireInstructor;
use crate::modules::assignments::model::{
    Assignment, AssignmentCreatedResponse, CreateAssignmentDto,
};
use crate::modules::assignments::service::AssignmentService;
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all assignments
#[utoipa::path(
    get,
    path = "/assignments",
    responses(
        (status = 200, description = "All assignments", body = Vec<Assignment>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn get_assignments(
    State(state): State<AppState>,
) -> Result<Json<Vec<Assignment>>, AppError> {
    let assignments = AssignmentService::get_assignments(&state.db).await?;
    Ok(Json(assignments))
}

/// Post a new assignment (instructors only)
#[utoipa::path(
    post,
    path = "/assignments",
    request_body = CreateAssignmentDto,
    responses(
        (status = 201, description = "Assignment created", body = AssignmentCreatedResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an instructor", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn create_assignment(
    State(state): State<AppState>,
    RequireInstructor(session): RequireInstructor,
    ValidatedJson(dto): ValidatedJson<CreateAssignmentDto>,
) -> Result<(StatusCode, Json<AssignmentCreatedResponse>), AppError> {
    let assignment_id =
        AssignmentService::create_assignment(&state.db, dto, session.email()).await?;

    Ok((
        StatusCode::CREATED,
        Json(AssignmentCreatedResponse {
            message: "Assignment created successfully".to_string(),
            assignment_id,
        }),
    ))
}

/// Delete an assignment (instructors only)
#[utoipa::path(
    delete,
    path = "/assignments/{id}",
    params(
        ("id" = Uuid, Path, description = "Assignment id")
    ),
    responses(
        (status = 200, description = "Assignment deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an instructor", body = ErrorResponse),
        (status = 404, description = "Assignment not found", body = ErrorResponse),
        (status = 500, description = "Delete failed after existence check", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Assignments"
)]
#[instrument(skip(state))]
pub async fn delete_assignment(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, AppError> {
    AssignmentService::delete_assignment(&state.db, id).await?;

    Ok(Json(MessageResponse {
        message: "Assignment deleted successfully".to_string(),
    }))
}
