//! Session-related types.
//!
//! Types stored in the session for authentication state. The session is the
//! only place login state lives; handlers receive it per request and there
//! is no process-wide authentication state.

use serde::{Deserialize, Serialize};

use fluir_core::AccountId;

/// Session-stored account identity for the public site.
///
/// Minimal data stored in the session to identify the signed-in account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAccount {
    /// Account's database ID.
    pub id: AccountId,
    /// Account's display name.
    pub name: String,
}

/// Session-stored admin identity for the management panel.
///
/// Stored separately from [`CurrentAccount`]: an admin signing in to the
/// panel does not implicitly sign in to the public site, and vice versa.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AccountId,
    /// Admin's display name.
    pub name: String,
}

/// Session keys for authentication data.
pub mod keys {
    /// Key for storing the account signed in to the public site.
    pub const CURRENT_ACCOUNT: &str = "current_account";

    /// Flag set when an administrator has authenticated.
    pub const ADMIN_AUTHENTICATED: &str = "admin_authenticated";

    /// Key for storing the signed-in administrator's identity.
    pub const CURRENT_ADMIN: &str = "current_admin";
}
