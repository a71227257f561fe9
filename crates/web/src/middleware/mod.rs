//! HTTP middleware stack.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. Sentry layer (capture errors)
//! 2. `TraceLayer` (request tracing)
//! 3. Session layer (tower-sessions with `SQLite` store)
//! 4. Auth extractors (per-handler, not a layer)

pub mod auth;
pub mod session;

pub use auth::{
    OptionalAccount, RequireAdmin, check_admin_access, sign_in_account, sign_in_admin,
    sign_out_account, sign_out_admin,
};
pub use session::create_session_layer;
