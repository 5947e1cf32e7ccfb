use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::middleware::auth::SESSION_COOKIE;
use crate::modules::assignments::model::{
    Assignment, AssignmentCreatedResponse, CreateAssignmentDto,
};
use crate::modules::auth::controller::ErrorResponse;
use crate::modules::auth::model::{
    MessageResponse, SessionRequest, SessionResponse, SessionUserInfo,
};
use crate::modules::submissions::model::{
    CreateSubmissionDto, ReviewSubmissionDto, ReviewVerdict, Submission,
    SubmissionCreatedResponse, SubmissionStatus,
};
use crate::modules::users::model::{CreateUserDto, User, UserCreatedResponse, UserRole};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "cookie_auth",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::new(SESSION_COOKIE))),
            );
        }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_session,
        crate::modules::auth::controller::logout,
        crate::modules::users::controller::create_user,
        crate::modules::users::controller::get_user_by_email,
        crate::modules::assignments::controller::get_assignments,
        crate::modules::assignments::controller::create_assignment,
        crate::modules::assignments::controller::delete_assignment,
        crate::modules::submissions::controller::get_submissions,
        crate::modules::submissions::controller::create_submission,
        crate::modules::submissions::controller::review_submission,
    ),
    components(
        schemas(
            SessionRequest,
            SessionResponse,
            SessionUserInfo,
            MessageResponse,
            ErrorResponse,
            User,
            UserRole,
            CreateUserDto,
            UserCreatedResponse,
            Assignment,
            CreateAssignmentDto,
            AssignmentCreatedResponse,
            Submission,
            SubmissionStatus,
            ReviewVerdict,
            CreateSubmissionDto,
            ReviewSubmissionDto,
            SubmissionCreatedResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Session issuance and logout"),
        (name = "Users", description = "Registration and self lookup"),
        (name = "Assignments", description = "Assignments posted by instructors"),
        (name = "Submissions", description = "Student submissions and instructor review")
    ),
    info(
        title = "Classdesk API",
        description = "Application portal connecting instructors and students"
    )
)]
pub struct ApiDoc;
