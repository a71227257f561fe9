//! Admin panel route handlers.
//!
//! Everything under `/admin` except the login page requires an admin
//! sign-in; the [`RequireAdmin`] extractor redirects anonymous visitors to
//! `/admin/login` before a handler runs.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form, Router,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use fluir_core::{AccountId, Role};

use crate::error::{AppError, clear_sentry_user, set_sentry_user};
use crate::middleware::{RequireAdmin, sign_in_admin, sign_out_admin};
use crate::models::{Account, CurrentAdmin};
use crate::routes::MessageQuery;
use crate::services::AccountService;
use crate::state::AppState;

/// Build the admin panel router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/admin/login", get(login_page).post(login))
        .route("/admin/logout", post(logout))
        .route("/admin", get(dashboard))
        .route("/admin/users/new", get(new_user_page))
        .route("/admin/users", post(create_user))
        .route("/admin/admins/new", get(new_admin_page))
        .route("/admin/admins", post(create_admin))
        .route("/admin/users/{id}/edit", get(edit_user_page))
        .route("/admin/users/{id}", post(update_user))
        .route("/admin/users/{id}/delete", post(delete_user))
}

// =============================================================================
// Form Types
// =============================================================================

/// Admin login form data.
#[derive(Debug, Deserialize)]
pub struct AdminLoginForm {
    pub cpf: String,
    pub password: String,
}

/// Create-user form data.
///
/// The operator picks the role; an unknown role value rejects the whole
/// form before the handler runs.
#[derive(Debug, Deserialize)]
pub struct CreateUserForm {
    pub name: String,
    pub cpf: String,
    pub password: String,
    pub role: Role,
}

/// Create-administrator form data.
///
/// Carries the short token, not the full CPF handle.
#[derive(Debug, Deserialize)]
pub struct CreateAdminForm {
    pub name: String,
    pub token: String,
    pub password: String,
}

/// Update-user form data.
#[derive(Debug, Deserialize)]
pub struct UpdateUserForm {
    pub name: String,
    pub cpf: String,
    pub password: String,
    pub role: Role,
}

// =============================================================================
// Templates
// =============================================================================

/// Admin login page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/login.html")]
pub struct AdminLoginTemplate {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Dashboard template with the full account list.
#[derive(Template, WebTemplate)]
#[template(path = "admin/dashboard.html")]
pub struct DashboardTemplate {
    pub admin: CurrentAdmin,
    pub accounts: Vec<Account>,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// New-user form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/new_user.html")]
pub struct NewUserTemplate {
    pub admin: CurrentAdmin,
    pub error: Option<String>,
}

/// New-administrator form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/new_admin.html")]
pub struct NewAdminTemplate {
    pub admin: CurrentAdmin,
    pub error: Option<String>,
}

/// Edit-user form template.
#[derive(Template, WebTemplate)]
#[template(path = "admin/edit_user.html")]
pub struct EditUserTemplate {
    pub admin: CurrentAdmin,
    pub account: Account,
    pub error: Option<String>,
}

// =============================================================================
// Auth Handlers
// =============================================================================

/// Display the admin login page.
pub async fn login_page(Query(query): Query<MessageQuery>) -> impl IntoResponse {
    AdminLoginTemplate {
        error: query.error,
        success: query.success,
    }
}

/// Handle admin login form submission.
///
/// Only accounts with the admin role pass; a regular user with correct
/// credentials is turned away the same as a wrong password.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<AdminLoginForm>,
) -> Result<Response, AppError> {
    let service = AccountService::new(state.pool());

    match service.authenticate_admin(&form.cpf, &form.password).await? {
        Some(account) => {
            let admin = CurrentAdmin {
                id: account.id,
                name: account.name.clone(),
            };
            sign_in_admin(&session, &admin).await?;
            set_sentry_user(&account.id, Some(&account.name));
            tracing::info!(id = %account.id, "Admin signed in");

            Ok(Redirect::to(&format!(
                "/admin?success={}",
                urlencoding::encode("Administrator signed in successfully!")
            ))
            .into_response())
        }
        None => Ok(Redirect::to(&format!(
            "/admin/login?error={}",
            urlencoding::encode("Incorrect CPF or password. Access denied.")
        ))
        .into_response()),
    }
}

/// Logout and clear the admin sign-in.
///
/// Any general sign-in held by the same browser stays in place.
pub async fn logout(session: Session) -> impl IntoResponse {
    let _ = sign_out_admin(&session).await;
    clear_sentry_user();

    Redirect::to(&format!(
        "/admin/login?success={}",
        urlencoding::encode("Signed out successfully!")
    ))
}

// =============================================================================
// Account Management Handlers
// =============================================================================

/// Dashboard listing every account.
#[instrument(skip(admin, state, query))]
pub async fn dashboard(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Query(query): Query<MessageQuery>,
) -> Result<DashboardTemplate, AppError> {
    let service = AccountService::new(state.pool());
    let accounts = service.list_accounts().await?;

    Ok(DashboardTemplate {
        admin,
        accounts,
        error: query.error,
        success: query.success,
    })
}

/// Display the new-user form.
pub async fn new_user_page(
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    NewUserTemplate {
        admin,
        error: query.error,
    }
}

/// Create an account with an operator-chosen role.
#[instrument(skip(_admin, state, form))]
pub async fn create_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<CreateUserForm>,
) -> Result<Response, AppError> {
    let service = AccountService::new(state.pool());

    let outcome = service
        .register_user(&form.name, &form.cpf, &form.password, form.role)
        .await?;

    if outcome.ok {
        Ok(Redirect::to(&format!(
            "/admin?success={}",
            urlencoding::encode(&outcome.message)
        ))
        .into_response())
    } else {
        Ok(Redirect::to(&format!(
            "/admin/users/new?error={}",
            urlencoding::encode(&outcome.message)
        ))
        .into_response())
    }
}

/// Display the new-administrator form.
pub async fn new_admin_page(
    RequireAdmin(admin): RequireAdmin,
    Query(query): Query<MessageQuery>,
) -> impl IntoResponse {
    NewAdminTemplate {
        admin,
        error: query.error,
    }
}

/// Create an administrator from a short token.
#[instrument(skip(_admin, state, form))]
pub async fn create_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Form(form): Form<CreateAdminForm>,
) -> Result<Response, AppError> {
    let service = AccountService::new(state.pool());

    let outcome = service
        .register_admin(&form.name, &form.token, &form.password)
        .await?;

    if outcome.ok {
        Ok(Redirect::to(&format!(
            "/admin?success={}",
            urlencoding::encode(&outcome.message)
        ))
        .into_response())
    } else {
        Ok(Redirect::to(&format!(
            "/admin/admins/new?error={}",
            urlencoding::encode(&outcome.message)
        ))
        .into_response())
    }
}

/// Display the edit form for an account.
#[instrument(skip(admin, state, query))]
pub async fn edit_user_page(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Query(query): Query<MessageQuery>,
) -> Result<Response, AppError> {
    let service = AccountService::new(state.pool());

    let Some(account) = service.get_account(id).await? else {
        return Ok(Redirect::to(&format!(
            "/admin?error={}",
            urlencoding::encode("Error: user not found.")
        ))
        .into_response());
    };

    Ok(EditUserTemplate {
        admin,
        account,
        error: query.error,
    }
    .into_response())
}

/// Replace every field of an account.
#[instrument(skip(_admin, state, form))]
pub async fn update_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
    Form(form): Form<UpdateUserForm>,
) -> Result<Response, AppError> {
    let service = AccountService::new(state.pool());

    let account = Account {
        id,
        name: form.name,
        cpf: form.cpf,
        password: form.password,
        role: form.role,
    };
    let outcome = service.update_account(&account).await?;

    if outcome.ok {
        Ok(Redirect::to(&format!(
            "/admin?success={}",
            urlencoding::encode(&outcome.message)
        ))
        .into_response())
    } else {
        Ok(Redirect::to(&format!(
            "/admin/users/{id}/edit?error={}",
            urlencoding::encode(&outcome.message)
        ))
        .into_response())
    }
}

/// Delete an account, refusing to remove the acting administrator.
#[instrument(skip(admin, state))]
pub async fn delete_user(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<AccountId>,
) -> Result<Response, AppError> {
    let service = AccountService::new(state.pool());

    let outcome = service.delete_account(id, admin.id).await?;

    let target = if outcome.ok {
        format!("/admin?success={}", urlencoding::encode(&outcome.message))
    } else {
        format!("/admin?error={}", urlencoding::encode(&outcome.message))
    };

    Ok(Redirect::to(&target).into_response())
}
