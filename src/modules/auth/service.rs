use sqlx::PgPool;
use tracing::{debug, instrument};

use crate::config::jwt::JwtConfig;
use crate::modules::users::model::User;
use crate::utils::errors::AppError;
use crate::utils::jwt::create_session_token;

use super::model::SessionUserInfo;

pub struct AuthService;

impl AuthService {
    /// Looks up the user by exact email and signs a session token for them.
    /// No user means no token; nothing is written to the database.
    #[instrument(skip(db, jwt_config))]
    pub async fn issue_session(
        db: &PgPool,
        email: &str,
        jwt_config: &JwtConfig,
    ) -> Result<(String, SessionUserInfo), AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, email, name, role, created_at FROM users WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("user not found")))?;

        let token = create_session_token(user.id, &user.email, user.role, jwt_config)?;

        debug!(user.email = %user.email, role = user.role.as_str(), "session issued");

        Ok((
            token,
            SessionUserInfo {
                email: user.email,
                role: user.role,
                name: user.name,
            },
        ))
    }
}
