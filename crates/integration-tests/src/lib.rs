//! Integration tests for Fluir.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the server (seeds the default admin on a fresh database)
//! cargo run -p fluir-web
//!
//! # Run integration tests against it
//! cargo test -p fluir-integration-tests -- --ignored
//! ```
//!
//! Tests drive the running site over real HTTP with a cookie-holding
//! client, following redirects the way a browser would. They are
//! `#[ignore]`d by default because they need a live server.

/// Base URL of the site under test (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("FLUIR_BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_owned())
}

/// A cookie-holding HTTP client.
///
/// # Panics
///
/// Panics if the client cannot be constructed.
#[must_use]
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client")
}

/// A login handle that no earlier test run can have registered.
#[must_use]
pub fn unique_cpf(prefix: &str) -> String {
    format!("{prefix}-{}", uuid::Uuid::new_v4())
}
