use sqlx::PgPool;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::modules::users::model::{CreateUserDto, User};
use crate::utils::errors::AppError;

pub struct UserService;

impl UserService {
    /// Inserts a new user unless the email is already taken. The existing
    /// record is never altered by a duplicate registration attempt.
    #[instrument(skip(db, dto))]
    pub async fn create_user(db: &PgPool, dto: CreateUserDto) -> Result<Uuid, AppError> {
        let existing = sqlx::query("SELECT id FROM users WHERE email = $1")
            .bind(&dto.email)
            .fetch_optional(db)
            .await?;

        if existing.is_some() {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "User already exists"
            )));
        }

        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (email, name, role)
             VALUES ($1, $2, $3)
             RETURNING id, email, name, role, created_at",
        )
        .bind(&dto.email)
        .bind(&dto.name)
        .bind(dto.role)
        .fetch_one(db)
        .await
        .map_err(|e| {
            // Backstop for the race between the existence check and the
            // insert: the unique index still wins.
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!("User already exists"));
            }
            AppError::database(anyhow::Error::from(e))
        })?;

        info!(user.email = %user.email, role = user.role.as_str(), "user registered");

        Ok(user.id)
    }

    #[instrument(skip(db))]
    pub async fn get_user_by_email(db: &PgPool, email: &str) -> Result<User, AppError> {
        sqlx::query_as::<_, User>(
            "SELECT id, email, name, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("User not found")))
    }
}
