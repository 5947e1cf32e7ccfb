//! PostgreSQL connection pool initialization.
//!
//! The connection string comes from `DATABASE_URL` when set; otherwise it is
//! composed from the individual `DB_USER` / `DB_PASS` / `DB_HOST` / `DB_NAME`
//! variables. The pool connects lazily: an unreachable database at startup is
//! logged and the server keeps running, with affected routes failing
//! per-request until connectivity returns.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::env;
use tracing::{error, info};

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        let url = env::var("DATABASE_URL").unwrap_or_else(|_| {
            let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
            let pass = env::var("DB_PASS").unwrap_or_default();
            let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
            let name = env::var("DB_NAME").unwrap_or_else(|_| "applicationportal".to_string());
            format!("postgres://{user}:{pass}@{host}/{name}")
        });

        Self { url }
    }
}

/// Creates the shared connection pool and pings the database once.
///
/// # Panics
///
/// Panics only if the configured URL cannot be parsed as a Postgres
/// connection string. Connection failures do not panic.
pub async fn init_db_pool() -> PgPool {
    let config = DatabaseConfig::from_env();

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect_lazy(&config.url)
        .expect("database URL is not a valid Postgres connection string");

    match sqlx::query("SELECT 1").execute(&pool).await {
        Ok(_) => info!("connected to database"),
        Err(e) => error!(error = %e, "database unreachable at startup, continuing"),
    }

    pool
}
