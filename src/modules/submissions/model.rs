//! Submission data models and DTOs.
//!
//! A submission starts as `Pending` and is moved exactly once to a reviewed
//! state by an instructor. The review verdict is its own enumeration so a
//! reviewed submission can never be sent back to `Pending` through the API.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "submission_status")]
pub enum SubmissionStatus {
    Pending,
    Approved,
    Rejected,
}

/// What an instructor may set a pending submission to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub enum ReviewVerdict {
    Approved,
    Rejected,
}

impl From<ReviewVerdict> for SubmissionStatus {
    fn from(verdict: ReviewVerdict) -> Self {
        match verdict {
            ReviewVerdict::Approved => SubmissionStatus::Approved,
            ReviewVerdict::Rejected => SubmissionStatus::Rejected,
        }
    }
}

/// A student's submission against an assignment.
///
/// `assignment_id` is an opaque reference from the portal's point of view;
/// deleting an assignment does not cascade into submissions.
#[derive(Serialize, Deserialize, FromRow, Debug, Clone, PartialEq, Eq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: Uuid,
    pub assignment_id: Uuid,
    pub content: String,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    /// Email of the submitting student, taken from the session.
    pub submitted_by: String,
    pub status: SubmissionStatus,
    pub feedback: Option<String>,
    pub reviewed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub reviewed_by: Option<String>,
}

/// Creation payload. `submitted_at`, `submitted_by`, and `status` are
/// server-set; a client-supplied status field is silently dropped.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubmissionDto {
    pub assignment_id: Uuid,
    #[validate(length(min = 1))]
    pub content: String,
}

/// Review payload sent by an instructor.
#[derive(Deserialize, Debug, Clone, Validate, ToSchema)]
pub struct ReviewSubmissionDto {
    pub status: ReviewVerdict,
    pub feedback: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionCreatedResponse {
    pub message: String,
    pub submission_id: Uuid,
}
