//! Server configuration from environment variables.

use std::time::Duration;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8000";
const DEFAULT_DATABASE_URL: &str = "sqlite://todos.db";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub bind_addr: String,
    pub database_url: String,
    /// Allowed CORS origins from `CORS_ORIGINS` (comma-separated).
    /// Empty means any origin is allowed.
    pub cors_origins: Vec<String>,
    pub request_timeout: Duration,
}

impl ServerConfig {
    pub fn from_env() -> Self {
        let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.into());
        let database_url =
            std::env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.into());
        let cors_origins = std::env::var("CORS_ORIGINS")
            .map(|raw| {
                raw.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();
        let request_timeout = std::env::var("REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        Self {
            bind_addr,
            database_url,
            cors_origins,
            request_timeout,
        }
    }
}
