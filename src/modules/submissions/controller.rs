use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use tracing::instrument;
use uuid::Uuid;

use crate::middleware::role::{RequireInstructor, RequireStudent};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::MessageResponse;
use crate::modules::submissions::model::{
    CreateSubmissionDto, ReviewSubmissionDto, Submission, SubmissionCreatedResponse,
};
use crate::modules::submissions::service::SubmissionService;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::validator::ValidatedJson;

/// List all submissions
#[utoipa::path(
    get,
    path = "/submissions",
    responses(
        (status = 200, description = "All submissions", body = Vec<Submission>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "Submissions"
)]
#[instrument(skip(state))]
pub async fn get_submissions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Submission>>, AppError> {
    let submissions = SubmissionService::get_submissions(&state.db).await?;
    Ok(Json(submissions))
}

/// Submit work against an assignment (students only)
///
/// Status always starts as `Pending`; a status field in the request body is
/// ignored.
#[utoipa::path(
    post,
    path = "/submissions",
    request_body = CreateSubmissionDto,
    responses(
        (status = 201, description = "Submission created", body = SubmissionCreatedResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not a student", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Submissions"
)]
#[instrument(skip(state))]
pub async fn create_submission(
    State(state): State<AppState>,
    RequireStudent(session): RequireStudent,
    ValidatedJson(dto): ValidatedJson<CreateSubmissionDto>,
) -> Result<(StatusCode, Json<SubmissionCreatedResponse>), AppError> {
    let submission_id =
        SubmissionService::create_submission(&state.db, dto, session.email()).await?;

    Ok((
        StatusCode::CREATED,
        Json(SubmissionCreatedResponse {
            message: "Submission created successfully".to_string(),
            submission_id,
        }),
    ))
}

/// Review a pending submission (instructors only)
#[utoipa::path(
    patch,
    path = "/submissions/{id}",
    params(
        ("id" = Uuid, Path, description = "Submission id")
    ),
    request_body = ReviewSubmissionDto,
    responses(
        (status = 200, description = "Submission reviewed", body = MessageResponse),
        (status = 401, description = "Missing or invalid session", body = ErrorResponse),
        (status = 403, description = "Caller is not an instructor", body = ErrorResponse),
        (status = 404, description = "Submission not found or already reviewed", body = ErrorResponse)
    ),
    security(("cookie_auth" = [])),
    tag = "Submissions"
)]
#[instrument(skip(state))]
pub async fn review_submission(
    State(state): State<AppState>,
    RequireInstructor(session): RequireInstructor,
    Path(id): Path<Uuid>,
    ValidatedJson(dto): ValidatedJson<ReviewSubmissionDto>,
) -> Result<Json<MessageResponse>, AppError> {
    SubmissionService::review_submission(&state.db, id, dto, session.email()).await?;

    Ok(Json(MessageResponse {
        message: "Submission reviewed successfully".to_string(),
    }))
}
