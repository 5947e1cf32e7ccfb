//! Environment-driven configuration.
//!
//! Each submodule owns one concern and exposes a `from_env()` constructor.
//! Configuration is read once at startup and carried in
//! [`crate::state::AppState`]; handlers never read the environment directly.
//!
//! # Modules
//!
//! - [`cors`]: allowed browser origin for credentialed requests
//! - [`database`]: PostgreSQL connection pool initialization
//! - [`jwt`]: session token secret and lifetime

pub mod cors;
pub mod database;
pub mod jwt;
