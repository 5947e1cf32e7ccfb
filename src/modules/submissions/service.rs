use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::modules::submissions::model::{
    CreateSubmissionDto, ReviewSubmissionDto, Submission, SubmissionStatus,
};
use crate::utils::errors::AppError;

pub struct SubmissionService;

impl SubmissionService {
    #[instrument(skip(db))]
    pub async fn get_submissions(db: &PgPool) -> Result<Vec<Submission>, AppError> {
        let submissions = sqlx::query_as::<_, Submission>(
            "SELECT id, assignment_id, content, submitted_at, submitted_by,
                    status, feedback, reviewed_at, reviewed_by
             FROM submissions
             ORDER BY submitted_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(submissions)
    }

    /// Inserts a submission with server-set timestamp, author, and status.
    /// Status always starts as `Pending`, whatever the client sent.
    #[instrument(skip(db, dto))]
    pub async fn create_submission(
        db: &PgPool,
        dto: CreateSubmissionDto,
        submitted_by: &str,
    ) -> Result<Uuid, AppError> {
        let submission = sqlx::query_as::<_, Submission>(
            "INSERT INTO submissions (assignment_id, content, submitted_by, status)
             VALUES ($1, $2, $3, 'Pending')
             RETURNING id, assignment_id, content, submitted_at, submitted_by,
                       status, feedback, reviewed_at, reviewed_by",
        )
        .bind(dto.assignment_id)
        .bind(&dto.content)
        .bind(submitted_by)
        .fetch_one(db)
        .await?;

        info!(submission.id = %submission.id, submitted_by = %submitted_by, "submission created");

        Ok(submission.id)
    }

    /// Moves a pending submission to its reviewed state, recording feedback,
    /// reviewer, and review time.
    ///
    /// The `status = 'Pending'` guard makes the transition one-shot: an
    /// unknown id and an already-reviewed submission are indistinguishable
    /// here and both report 404.
    #[instrument(skip(db, dto))]
    pub async fn review_submission(
        db: &PgPool,
        id: Uuid,
        dto: ReviewSubmissionDto,
        reviewed_by: &str,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "UPDATE submissions
             SET status = $1, feedback = $2, reviewed_at = NOW(), reviewed_by = $3
             WHERE id = $4 AND status = 'Pending'",
        )
        .bind(SubmissionStatus::from(dto.status))
        .bind(&dto.feedback)
        .bind(reviewed_by)
        .bind(id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            debug!(submission.id = %id, "submission missing or already reviewed");
            return Err(AppError::not_found(anyhow::anyhow!(
                "Submission not found or already reviewed"
            )));
        }

        info!(submission.id = %id, reviewed_by = %reviewed_by, "submission reviewed");

        Ok(())
    }
}
