//! Administrator account management commands.
//!
//! # Usage
//!
//! ```bash
//! # Create a new administrator account
//! fluir-cli admin create -n "Maria Souza" -t maria -p "strong password"
//! ```
//!
//! The sign-in handle is namespaced: a token of `maria` creates an account
//! that signs in as `admin_maria`.
//!
//! # Environment Variables
//!
//! - `FLUIR_DATABASE_URL` - `SQLite` connection string
//!   (default: `sqlite://fluir.db`)

use thiserror::Error;

use fluir_core::{AccountId, Role};
use fluir_web::db::{self, AccountRepository, RepositoryError};
use fluir_web::models::NewAccount;
use fluir_web::services::ADMIN_CPF_PREFIX;

/// Errors that can occur during administrator management.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Database connection error.
    #[error("database connection error: {0}")]
    Connect(#[from] sqlx::Error),

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Database error.
    #[error("database error: {0}")]
    Database(RepositoryError),

    /// The namespaced handle is already taken.
    #[error("an account already signs in as {prefix}{0}", prefix = ADMIN_CPF_PREFIX)]
    TokenTaken(String),
}

/// Create a new administrator account.
///
/// Runs pending migrations first so the command also works against a
/// fresh database file.
///
/// # Arguments
///
/// * `name` - Administrator's display name
/// * `token` - Sign-in token (stored as `admin_<token>`)
/// * `password` - Administrator's password
///
/// # Returns
///
/// The ID of the created account.
///
/// # Errors
///
/// Returns [`AdminError::TokenTaken`] when the namespaced handle already
/// belongs to an account, or a database error otherwise.
pub async fn create(name: &str, token: &str, password: &str) -> Result<AccountId, AdminError> {
    dotenvy::dotenv().ok();

    let database_url = super::database_url();
    tracing::info!("Connecting to {database_url}");
    let pool = db::create_pool(&database_url).await?;
    db::MIGRATOR.run(&pool).await?;

    let cpf = format!("{ADMIN_CPF_PREFIX}{token}");
    tracing::info!("Creating administrator: {} ({})", name, cpf);

    let repo = AccountRepository::new(&pool);
    let account = repo
        .insert(&NewAccount {
            name: name.to_owned(),
            cpf,
            password: password.to_owned(),
            role: Role::Admin,
        })
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => AdminError::TokenTaken(token.to_owned()),
            other => AdminError::Database(other),
        })?;

    tracing::info!(
        "Administrator created successfully! ID: {}, handle: {}",
        account.id,
        account.cpf
    );

    Ok(account.id)
}
