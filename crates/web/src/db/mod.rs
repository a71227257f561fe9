//! Database operations for the Fluir `SQLite` store.
//!
//! ## Tables
//!
//! - `account` - Users and administrators (one table, distinguished by role)
//! - `tower_sessions` - Session storage for the tower-sessions `SQLite` store
//!
//! # Migrations
//!
//! Migrations are embedded from `crates/web/migrations/` and run at startup
//! via [`init`], or explicitly via:
//! ```bash
//! cargo run -p fluir-cli -- migrate
//! ```

pub mod accounts;

use std::str::FromStr;
use std::time::Duration;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use thiserror::Error;

use fluir_core::Role;

use crate::models::account::NewAccount;

pub use accounts::AccountRepository;

/// Embedded schema migrations.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!();

/// Name of the admin account seeded on first initialization.
pub const SEED_ADMIN_NAME: &str = "Admin";
/// Login handle of the seeded admin account.
pub const SEED_ADMIN_CPF: &str = "fluir_admin";
/// Default password of the seeded admin account.
pub const SEED_ADMIN_PASSWORD: &str = "admin123";

/// Errors that can occur during repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration failure during initialization.
    #[error("migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// Constraint violation (e.g., unique CPF).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Create a `SQLite` connection pool with sensible defaults.
///
/// The database file is created if missing. WAL journaling keeps readers
/// from blocking the single writer.
///
/// # Errors
///
/// Returns `sqlx::Error` if the URL is invalid or the connection cannot be
/// established.
pub async fn create_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .foreign_keys(true);

    SqlitePoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(10))
        .connect_with(options)
        .await
}

/// Initialize the store: run migrations, then seed the default admin
/// if no administrator exists yet.
///
/// The check-then-insert is not atomic; startup is assumed to be
/// single-process.
///
/// # Errors
///
/// Returns `RepositoryError::Migrate` if migrations fail, or any error
/// from the seed insert.
pub async fn init(pool: &SqlitePool) -> Result<(), RepositoryError> {
    MIGRATOR.run(pool).await?;
    seed_admin(pool).await
}

/// Insert the seed admin when the store holds no admin account.
async fn seed_admin(pool: &SqlitePool) -> Result<(), RepositoryError> {
    let repo = AccountRepository::new(pool);

    if repo.count_by_role(Role::Admin).await? > 0 {
        return Ok(());
    }

    let admin = repo
        .insert(&NewAccount {
            name: SEED_ADMIN_NAME.to_string(),
            cpf: SEED_ADMIN_CPF.to_string(),
            password: SEED_ADMIN_PASSWORD.to_string(),
            role: Role::Admin,
        })
        .await?;

    tracing::warn!(
        id = %admin.id,
        cpf = SEED_ADMIN_CPF,
        "No administrator found; seeded default admin (change its password)"
    );

    Ok(())
}

/// Open a migrated in-memory database for tests.
///
/// A single connection that is never reaped, so the in-memory database
/// survives for the whole test.
#[cfg(test)]
#[allow(clippy::unwrap_used)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
        .unwrap();

    MIGRATOR.run(&pool).await.unwrap();
    pool
}
