//! Web application configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `FLUIR_DATABASE_URL` - `SQLite` connection string (default: sqlite://fluir.db)
//! - `FLUIR_HOST` - Bind address (default: 127.0.0.1)
//! - `FLUIR_PORT` - Listen port (default: 3000)
//! - `FLUIR_BASE_URL` - Public URL (default: http://localhost:3000); an
//!   `https://` prefix turns on the secure session cookie
//! - `FLUIR_LOG_JSON` - Emit JSON logs when set to `true`
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Web application configuration.
#[derive(Debug, Clone)]
pub struct WebConfig {
    /// `SQLite` database connection URL
    pub database_url: String,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL for the site
    pub base_url: String,
    /// Emit JSON-formatted logs
    pub log_json: bool,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl WebConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_env_or_default("FLUIR_DATABASE_URL", "sqlite://fluir.db");
        let host = get_env_or_default("FLUIR_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("FLUIR_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("FLUIR_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("FLUIR_PORT".to_string(), e.to_string()))?;
        let base_url = get_env_or_default("FLUIR_BASE_URL", "http://localhost:3000");
        let log_json = get_env_or_default("FLUIR_LOG_JSON", "false")
            .parse::<bool>()
            .map_err(|e| ConfigError::InvalidEnvVar("FLUIR_LOG_JSON".to_string(), e.to_string()))?;
        let sentry_dsn = get_optional_env("SENTRY_DSN");

        Ok(Self {
            database_url,
            host,
            port,
            base_url,
            log_json,
            sentry_dsn,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS (controls the secure cookie flag).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
