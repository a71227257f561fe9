//! Business logic services.
//!
//! # Services
//!
//! - `accounts` - Account registration, authentication, and administration

pub mod accounts;

pub use accounts::{ADMIN_CPF_PREFIX, AccountService, Outcome};
