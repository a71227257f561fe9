//! Authentication route handlers.
//!
//! Sign-in and self-registration for regular accounts. The admin panel has
//! its own login under `/admin`; signing in here never grants admin access.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use fluir_core::Role;

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::{sign_in_account, sign_out_account};
use crate::models::CurrentAccount;
use crate::routes::MessageQuery;
use crate::services::AccountService;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub cpf: String,
    pub password: String,
}

/// Registration form data.
#[derive(Debug, Deserialize)]
pub struct RegisterForm {
    pub name: String,
    pub cpf: String,
    pub password: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Registration page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/register.html")]
pub struct RegisterTemplate {
    pub error: Option<String>,
}

// =============================================================================
// Route Handlers
// =============================================================================

/// Display the login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        error: query.error,
        success: query.success,
    }
}

/// Handle login form submission.
///
/// Matches CPF and password against any account, regardless of role.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let service = AccountService::new(state.pool());

    match service.authenticate(&form.cpf, &form.password).await? {
        Some(account) => {
            let current = CurrentAccount {
                id: account.id,
                name: account.name.clone(),
            };
            sign_in_account(&session, &current).await?;
            set_sentry_user(&account.id, Some(&account.name));

            Ok(Redirect::to(&format!(
                "/?success={}",
                urlencoding::encode("Signed in successfully!")
            ))
            .into_response())
        }
        None => Ok(Redirect::to(&format!(
            "/login?error={}",
            urlencoding::encode("Incorrect CPF or password. Please try again.")
        ))
        .into_response()),
    }
}

/// Display the registration page.
pub async fn register_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    RegisterTemplate { error: query.error }
}

/// Handle registration form submission.
///
/// Self-registration always creates a regular user account.
pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Response, AppError> {
    let service = AccountService::new(state.pool());

    let outcome = service
        .register_user(&form.name, &form.cpf, &form.password, Role::User)
        .await?;

    if outcome.ok {
        Ok(Redirect::to(&format!(
            "/login?success={}",
            urlencoding::encode("Registration successful! You can now sign in.")
        ))
        .into_response())
    } else {
        Ok(Redirect::to(&format!(
            "/register?error={}",
            urlencoding::encode(&outcome.message)
        ))
        .into_response())
    }
}

/// Logout and clear the general sign-in.
///
/// Any admin sign-in held by the same browser stays in place.
pub async fn logout(session: Session) -> impl IntoResponse {
    let _ = sign_out_account(&session).await;
    clear_sentry_user();

    Redirect::to("/")
}
