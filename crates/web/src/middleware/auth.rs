//! Authentication middleware and extractors.
//!
//! The general sign-in and the admin sign-in keep separate session entries,
//! so one browser can hold both identities at once. Admin access requires
//! two marks in the session: the authenticated flag and the stored admin
//! identity. Sign-in writes both, sign-out removes both, and the access
//! check refuses a session carrying only one of them.

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentAccount, CurrentAdmin, session_keys};

/// Check whether the session carries full administrator access.
///
/// Returns the stored admin identity only when both the authenticated flag
/// and the identity entry are present.
pub async fn check_admin_access(session: &Session) -> Option<CurrentAdmin> {
    let authenticated = session
        .get::<bool>(session_keys::ADMIN_AUTHENTICATED)
        .await
        .ok()
        .flatten()
        .unwrap_or(false);

    if !authenticated {
        return None;
    }

    session
        .get::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await
        .ok()
        .flatten()
}

// =============================================================================
// Extractors
// =============================================================================

/// Extractor that requires a signed-in administrator.
///
/// If the session does not carry admin access, the handler never runs and
/// the client is redirected to the admin login page.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(
///     RequireAdmin(admin): RequireAdmin,
/// ) -> impl IntoResponse {
///     format!("Hello, {}!", admin.name)
/// }
/// ```
pub struct RequireAdmin(pub CurrentAdmin);

/// Error returned when admin access is required but not present.
pub enum AdminAuthRejection {
    /// Redirect to the admin login page.
    RedirectToLogin,
    /// Session layer missing from the request.
    Unauthorized,
}

impl IntoResponse for AdminAuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to("/admin/login").into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireAdmin
where
    S: Send + Sync,
{
    type Rejection = AdminAuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Session is placed in extensions by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .ok_or(AdminAuthRejection::Unauthorized)?;

        let admin = check_admin_access(session)
            .await
            .ok_or(AdminAuthRejection::RedirectToLogin)?;

        Ok(Self(admin))
    }
}

/// Extractor that optionally gets the signed-in account.
///
/// Never rejects; pages that render for guests use this to greet a
/// signed-in visitor.
pub struct OptionalAccount(pub Option<CurrentAccount>);

impl<S> FromRequestParts<S> for OptionalAccount
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let account = match parts.extensions.get::<Session>() {
            Some(session) => session
                .get::<CurrentAccount>(session_keys::CURRENT_ACCOUNT)
                .await
                .ok()
                .flatten(),
            None => None,
        };

        Ok(Self(account))
    }
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Record a general sign-in in the session.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn sign_in_account(
    session: &Session,
    account: &CurrentAccount,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::CURRENT_ACCOUNT, account)
        .await
}

/// Clear the general sign-in from the session.
///
/// Leaves any admin sign-in in place.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn sign_out_account(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<CurrentAccount>(session_keys::CURRENT_ACCOUNT)
        .await?;
    Ok(())
}

/// Record an admin sign-in in the session.
///
/// Writes both marks the access check requires.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn sign_in_admin(
    session: &Session,
    admin: &CurrentAdmin,
) -> Result<(), tower_sessions::session::Error> {
    session
        .insert(session_keys::ADMIN_AUTHENTICATED, true)
        .await?;
    session.insert(session_keys::CURRENT_ADMIN, admin).await
}

/// Clear the admin sign-in from the session.
///
/// Removes both marks; leaves any general sign-in in place.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn sign_out_admin(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session
        .remove::<bool>(session_keys::ADMIN_AUTHENTICATED)
        .await?;
    session
        .remove::<CurrentAdmin>(session_keys::CURRENT_ADMIN)
        .await?;
    Ok(())
}
