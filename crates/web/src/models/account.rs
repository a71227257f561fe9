//! Account domain types.

use serde::{Deserialize, Serialize};

use fluir_core::{AccountId, Role};

/// A stored user or administrator record.
///
/// The CPF is the unique login handle. For self-registered users it is the
/// Brazilian national ID; for administrators it is a namespaced synthetic
/// handle (uniqueness is the only rule the store enforces).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned ID, immutable once assigned.
    pub id: AccountId,
    /// Display name. No uniqueness, no format validation.
    pub name: String,
    /// Unique login handle.
    pub cpf: String,
    /// Password, stored and compared verbatim.
    pub password: String,
    /// Access level.
    pub role: Role,
}

/// An account about to be inserted (the store assigns the ID).
#[derive(Debug, Clone)]
pub struct NewAccount {
    pub name: String,
    pub cpf: String,
    pub password: String,
    pub role: Role,
}
