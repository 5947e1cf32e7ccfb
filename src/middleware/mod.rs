//! Request middleware.
//!
//! Two stages run in front of protected handlers, in order:
//!
//! 1. [`auth`]: the session verifier. Reads the `accessToken` cookie,
//!    validates signature and expiry, attaches the decoded identity.
//!    Missing or invalid token is a 401.
//! 2. [`role`]: the role gate. Checks the attached identity's role against
//!    the set allowed for the route. Wrong role is a 403.
//!
//! ```ignore
//! use crate::middleware::role::RequireInstructor;
//!
//! // Only instructors reach the handler body; the session rides along.
//! async fn create_assignment(
//!     RequireInstructor(session): RequireInstructor,
//!     // ...
//! ) -> impl IntoResponse {
//!     let author = session.email();
//!     // ...
//! }
//! ```

pub mod auth;
pub mod role;
