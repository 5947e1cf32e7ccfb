use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::modules::users::model::UserRole;

/// Session token claims. The role travels inside the token so the role gate
/// never needs a database lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: String,
    pub email: String,
    pub role: UserRole,
    pub exp: usize,
    pub iat: usize,
}

/// Body of `POST /jwt`: the email to issue a session for.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SessionRequest {
    #[validate(email)]
    pub email: String,
}

/// The user fields echoed back on successful login.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionUserInfo {
    pub email: String,
    pub role: UserRole,
    pub name: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct SessionResponse {
    pub message: String,
    pub user: SessionUserInfo,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
