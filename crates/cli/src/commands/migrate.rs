//! Database migration commands.
//!
//! # Usage
//!
//! ```bash
//! # Run pending migrations
//! fluir-cli migrate
//!
//! # Run migrations and seed the default admin account
//! fluir-cli init
//! ```
//!
//! # Environment Variables
//!
//! - `FLUIR_DATABASE_URL` - `SQLite` connection string
//!   (default: `sqlite://fluir.db`)
//!
//! Migrations are embedded in the `fluir-web` crate, so the CLI needs no
//! access to the source tree at runtime.

use thiserror::Error;

use fluir_web::db::{self, RepositoryError};

/// Errors that can occur while migrating or initializing the database.
#[derive(Debug, Error)]
pub enum MigrateError {
    /// Database connection error.
    #[error("database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Seeding failure during initialization.
    #[error("initialization error: {0}")]
    Init(#[from] RepositoryError),
}

/// Run pending database migrations.
///
/// # Errors
///
/// Returns an error if the database cannot be opened or a migration fails.
pub async fn run() -> Result<(), MigrateError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url();
    tracing::info!("Connecting to {database_url}");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Running migrations...");
    db::MIGRATOR.run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}

/// Run migrations and seed the default admin account if none exists.
///
/// The web binary does the same at startup; running `init` ahead of time
/// lets a deployment prepare the database before the first request.
///
/// # Errors
///
/// Returns an error if the database cannot be opened, a migration fails,
/// or the seed insert fails.
pub async fn init() -> Result<(), MigrateError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url();
    tracing::info!("Connecting to {database_url}");
    let pool = db::create_pool(&database_url).await?;

    tracing::info!("Initializing database...");
    db::init(&pool).await?;

    tracing::info!("Database initialized!");
    Ok(())
}
