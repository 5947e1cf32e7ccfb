use axum::{
    Router, middleware,
    routing::{delete, get},
};

use crate::middleware::role::require_instructor;
use crate::state::AppState;

use super::controller::{create_assignment, delete_assignment, get_assignments};

/// Listing is public; posting is gated in the handler via
/// [`crate::middleware::role::RequireInstructor`] because it shares a path
/// with the public GET. Deletion carries the gate as a route layer since the
/// handler itself has no use for the caller's identity.
pub fn init_assignments_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(get_assignments).post(create_assignment))
        .route(
            "/{id}",
            delete(delete_assignment)
                .layer(middleware::from_fn_with_state(state, require_instructor)),
        )
}
