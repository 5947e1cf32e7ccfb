use std::env;

/// CORS is restricted to a single origin because the session cookie is sent
/// with credentials; a wildcard origin would be rejected by browsers.
#[derive(Clone, Debug)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origin = env::var("ALLOWED_ORIGIN")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .trim()
            .to_string();

        Self { allowed_origin }
    }
}
