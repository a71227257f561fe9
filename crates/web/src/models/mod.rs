//! Domain models for the Fluir site.

pub mod account;
pub mod session;

pub use account::{Account, NewAccount};
pub use session::{CurrentAccount, CurrentAdmin, keys as session_keys};
