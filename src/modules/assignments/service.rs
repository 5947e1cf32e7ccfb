use sqlx::PgPool;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::modules::assignments::model::{Assignment, CreateAssignmentDto};
use crate::utils::errors::AppError;

pub struct AssignmentService;

impl AssignmentService {
    #[instrument(skip(db))]
    pub async fn get_assignments(db: &PgPool) -> Result<Vec<Assignment>, AppError> {
        let assignments = sqlx::query_as::<_, Assignment>(
            "SELECT id, title, description, created_at, created_by
             FROM assignments
             ORDER BY created_at DESC",
        )
        .fetch_all(db)
        .await?;

        Ok(assignments)
    }

    /// Inserts an assignment with server-set timestamp and author.
    #[instrument(skip(db, dto))]
    pub async fn create_assignment(
        db: &PgPool,
        dto: CreateAssignmentDto,
        created_by: &str,
    ) -> Result<Uuid, AppError> {
        let assignment = sqlx::query_as::<_, Assignment>(
            "INSERT INTO assignments (title, description, created_by)
             VALUES ($1, $2, $3)
             RETURNING id, title, description, created_at, created_by",
        )
        .bind(&dto.title)
        .bind(&dto.description)
        .bind(created_by)
        .fetch_one(db)
        .await?;

        info!(assignment.id = %assignment.id, created_by = %created_by, "assignment created");

        Ok(assignment.id)
    }

    /// Checks existence, then deletes. The two steps are not atomic: under
    /// concurrent deletes of the same id the second caller can see the row
    /// vanish between check and delete and get a 500 instead of a 404.
    #[instrument(skip(db))]
    pub async fn delete_assignment(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let existing = sqlx::query("SELECT id FROM assignments WHERE id = $1")
            .bind(id)
            .fetch_optional(db)
            .await?;

        if existing.is_none() {
            debug!(assignment.id = %id, "assignment not found for deletion");
            return Err(AppError::not_found(anyhow::anyhow!("Assignment not found")));
        }

        let result = sqlx::query("DELETE FROM assignments WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::internal(anyhow::anyhow!(
                "Failed to delete assignment"
            )));
        }

        info!(assignment.id = %id, "assignment deleted");

        Ok(())
    }
}
