use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

/// An assignment posted by an instructor. Never updated in place; it either
/// exists as created or has been deleted.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Email of the instructor who posted it, taken from the session.
    pub created_by: String,
}

/// Creation payload. `created_at` and `created_by` are server-set.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct CreateAssignmentDto {
    #[validate(length(min = 1))]
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentCreatedResponse {
    pub message: String,
    pub assignment_id: Uuid,
}
