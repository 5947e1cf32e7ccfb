use axum::{
    Router,
    routing::{get, patch},
};

use crate::state::AppState;

use super::controller::{create_submission, get_submissions, review_submission};

pub fn init_submissions_router() -> Router<AppState> {
    Router::new()
        .route("/", get(get_submissions).post(create_submission))
        .route("/{id}", patch(review_submission))
}
