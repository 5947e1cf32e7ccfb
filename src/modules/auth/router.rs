use axum::{Router, routing::post};

use crate::state::AppState;

use super::controller::{issue_session, logout};

pub fn init_auth_router() -> Router<AppState> {
    Router::new()
        .route("/jwt", post(issue_session))
        .route("/logout", post(logout))
}
