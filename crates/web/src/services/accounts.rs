//! Account service.
//!
//! Registration, sign-in, and the administration operations behind the admin
//! panel. Policy failures (duplicate CPF, the self-delete guard) come back as
//! an unsuccessful [`Outcome`] so handlers can show them to the operator;
//! only infrastructure failures propagate as errors.

use sqlx::SqlitePool;

use fluir_core::{AccountId, Role};

use crate::db::RepositoryError;
use crate::db::accounts::AccountRepository;
use crate::models::account::{Account, NewAccount};

/// Prefix applied to every administrator CPF handle.
///
/// Administrators are created from a short token (`x1` becomes `admin_x1`),
/// which keeps their sign-in handles out of the regular CPF space.
pub const ADMIN_CPF_PREFIX: &str = "admin_";

// =============================================================================
// Outcome
// =============================================================================

/// Result of an account mutation, carrying the operator-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Whether the operation changed the database.
    pub ok: bool,
    /// Message to show the operator.
    pub message: String,
}

impl Outcome {
    fn success(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

// =============================================================================
// Service
// =============================================================================

/// Account service.
///
/// Wraps [`AccountRepository`] with the registration and administration
/// policies: role assignment, the admin CPF prefix, and the guard against
/// an administrator deleting their own account.
pub struct AccountService<'a> {
    accounts: AccountRepository<'a>,
}

impl<'a> AccountService<'a> {
    /// Create a new account service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            accounts: AccountRepository::new(pool),
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Authenticate with CPF and password.
    ///
    /// Matches any account regardless of role; a signed-in administrator is
    /// still just an account here.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the lookup fails.
    pub async fn authenticate(
        &self,
        cpf: &str,
        password: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        self.accounts.find_by_credentials(cpf, password).await
    }

    /// Authenticate an administrator with CPF and password.
    ///
    /// Only matches accounts with the admin role. A regular user presenting
    /// valid credentials here gets `None`, same as a wrong password.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the lookup fails.
    pub async fn authenticate_admin(
        &self,
        cpf: &str,
        password: &str,
    ) -> Result<Option<Account>, RepositoryError> {
        self.accounts.find_admin_by_credentials(cpf, password).await
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Register an account under its plain CPF.
    ///
    /// Self-registration always passes `Role::User`; the admin panel lets
    /// the operator pick the role. No other validation happens here, an
    /// empty name or CPF is stored as given.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails for a reason
    /// other than a duplicate CPF; a duplicate comes back as an unsuccessful
    /// [`Outcome`].
    pub async fn register_user(
        &self,
        name: &str,
        cpf: &str,
        password: &str,
        role: Role,
    ) -> Result<Outcome, RepositoryError> {
        let new = NewAccount {
            name: name.to_owned(),
            cpf: cpf.to_owned(),
            password: password.to_owned(),
            role,
        };

        match self.accounts.insert(&new).await {
            Ok(_) => Ok(Outcome::success("User added successfully!")),
            Err(RepositoryError::Conflict(_)) => Ok(Outcome::failure(
                "Error: CPF is already registered in the system.",
            )),
            Err(e) => Err(e),
        }
    }

    /// Register an administrator account from a short token.
    ///
    /// The stored CPF handle is the token with [`ADMIN_CPF_PREFIX`] applied.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails for a reason
    /// other than a duplicate handle; a duplicate comes back as an
    /// unsuccessful [`Outcome`].
    pub async fn register_admin(
        &self,
        name: &str,
        token: &str,
        password: &str,
    ) -> Result<Outcome, RepositoryError> {
        let new = NewAccount {
            name: name.to_owned(),
            cpf: format!("{ADMIN_CPF_PREFIX}{token}"),
            password: password.to_owned(),
            role: Role::Admin,
        };

        match self.accounts.insert(&new).await {
            Ok(_) => Ok(Outcome::success("Administrator added successfully!")),
            Err(RepositoryError::Conflict(_)) => Ok(Outcome::failure(
                "Error: admin identifier is already registered in the system.",
            )),
            Err(e) => Err(e),
        }
    }

    // =========================================================================
    // Administration
    // =========================================================================

    /// Get an account by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the lookup fails.
    pub async fn get_account(&self, id: AccountId) -> Result<Option<Account>, RepositoryError> {
        self.accounts.get_by_id(id).await
    }

    /// List all accounts in id order.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, RepositoryError> {
        self.accounts.list_all().await
    }

    /// Replace every stored field of an account.
    ///
    /// Updating an ID that no longer exists still reports success; the row
    /// is simply gone and there is nothing to contradict the new values.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the update fails for a reason
    /// other than a duplicate CPF; a duplicate comes back as an unsuccessful
    /// [`Outcome`].
    pub async fn update_account(&self, account: &Account) -> Result<Outcome, RepositoryError> {
        match self.accounts.update(account).await {
            Ok(()) => Ok(Outcome::success("User updated successfully!")),
            Err(RepositoryError::Conflict(_)) => Ok(Outcome::failure(
                "Error: CPF already registered to another user.",
            )),
            Err(e) => Err(e),
        }
    }

    /// Delete an account on behalf of a signed-in administrator.
    ///
    /// Refuses to delete the acting administrator's own account; that check
    /// runs before anything touches the database. Deleting any other account
    /// is unconditional, including other administrators and the last one.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the delete fails.
    pub async fn delete_account(
        &self,
        id: AccountId,
        acting_admin: AccountId,
    ) -> Result<Outcome, RepositoryError> {
        if id == acting_admin {
            return Ok(Outcome::failure(
                "Cannot delete the currently signed-in administrator.",
            ));
        }

        if self.accounts.delete(id).await? {
            Ok(Outcome::success("User deleted successfully!"))
        } else {
            Ok(Outcome::failure("Error: could not delete user."))
        }
    }
}
