//! Account repository for database operations.
//!
//! Thin adapter over the `account` table: absent rows come back as `None`,
//! and unique-CPF violations surface as `RepositoryError::Conflict`. Queries
//! are runtime-checked (`query_as` + bind) since this crate carries no
//! offline query metadata.

use sqlx::SqlitePool;

use fluir_core::{AccountId, Role};

use super::RepositoryError;
use crate::models::account::{Account, NewAccount};

// =============================================================================
// Internal Row Types
// =============================================================================

/// Internal row type for account queries.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    name: String,
    cpf: String,
    password: String,
    role: Role,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            id: AccountId::new(row.id),
            name: row.name,
            cpf: row.cpf,
            password: row.password,
            role: row.role,
        }
    }
}

// =============================================================================
// Repository
// =============================================================================

/// Repository for account database operations.
pub struct AccountRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AccountRepository<'a> {
    /// Create a new account repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all accounts in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Account>, RepositoryError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            "SELECT id, name, cpf, password, role FROM account ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    /// Get an account by its ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, name, cpf, password, role FROM account WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Account::from))
    }

    /// Find an account by exact CPF and password match.
    ///
    /// No normalization, no case folding: both fields compare verbatim.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_by_credentials(
        &self,
        cpf: &str,
        password: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, name, cpf, password, role FROM account WHERE cpf = ? AND password = ?",
        )
        .bind(cpf)
        .bind(password)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Account::from))
    }

    /// Find an administrator by exact CPF and password match.
    ///
    /// Same as [`find_by_credentials`](Self::find_by_credentials) with the
    /// role filter applied in SQL.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn find_admin_by_credentials(
        &self,
        cpf: &str,
        password: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "SELECT id, name, cpf, password, role FROM account \
             WHERE cpf = ? AND password = ? AND role = 'admin'",
        )
        .bind(cpf)
        .bind(password)
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Account::from))
    }

    /// Insert a new account and return it with its assigned ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the CPF already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(&self, new: &NewAccount) -> Result<Account, RepositoryError> {
        let row = sqlx::query_as::<_, AccountRow>(
            "INSERT INTO account (name, cpf, password, role) VALUES (?, ?, ?, ?) \
             RETURNING id, name, cpf, password, role",
        )
        .bind(&new.name)
        .bind(&new.cpf)
        .bind(&new.password)
        .bind(new.role)
        .fetch_one(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_unique_violation()
            {
                return RepositoryError::Conflict("cpf already exists".to_owned());
            }
            RepositoryError::Database(e)
        })?;

        Ok(row.into())
    }

    /// Update every field of an account except its ID.
    ///
    /// Updating an absent ID affects zero rows and is not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the CPF belongs to a
    /// different account.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(&self, account: &Account) -> Result<(), RepositoryError> {
        sqlx::query("UPDATE account SET name = ?, cpf = ?, password = ?, role = ? WHERE id = ?")
            .bind(&account.name)
            .bind(&account.cpf)
            .bind(&account.password)
            .bind(account.role)
            .bind(account.id)
            .execute(self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(ref db_err) = e
                    && db_err.is_unique_violation()
                {
                    return RepositoryError::Conflict("cpf already exists".to_owned());
                }
                RepositoryError::Database(e)
            })?;

        Ok(())
    }

    /// Delete an account by its ID.
    ///
    /// Returns whether a row was actually removed; deleting an absent ID
    /// reports `false`, not an error.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn delete(&self, id: AccountId) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM account WHERE id = ?")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Count accounts with the given role.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count_by_role(&self, role: Role) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM account WHERE role = ?")
            .bind(role)
            .fetch_one(self.pool)
            .await?;

        Ok(count)
    }
}
