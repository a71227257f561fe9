//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                        - Home page
//! GET  /cisterns                - Cistern program page (placeholder)
//! GET  /deliveries/track        - Delivery tracking page
//! GET  /deliveries/detail       - Delivery detail page
//!
//! # Auth
//! GET  /login                   - Login page
//! POST /login                   - Login action
//! GET  /register                - Registration page
//! POST /register                - Registration action
//! POST /logout                  - Logout action
//!
//! # Admin panel (requires admin sign-in except login)
//! GET  /admin/login             - Admin login page
//! POST /admin/login             - Admin login action
//! POST /admin/logout            - Admin logout action
//! GET  /admin                   - Dashboard with account list
//! GET  /admin/users/new         - New user form
//! POST /admin/users             - Create user
//! GET  /admin/admins/new        - New administrator form
//! POST /admin/admins            - Create administrator
//! GET  /admin/users/{id}/edit   - Edit user form
//! POST /admin/users/{id}        - Update user
//! POST /admin/users/{id}/delete - Delete user
//! ```
//!
//! Mutation outcomes travel as `?success=` / `?error=` query parameters on
//! the redirect, and each page template renders them as a banner.
//!
//! The server binary wires `/health`, `/health/ready`, and `/static` on top
//! of this router.

pub mod admin;
pub mod auth;
pub mod home;

use axum::{
    Router,
    routing::{get, post},
};
use serde::Deserialize;

use crate::state::AppState;

/// Query parameters for error/success banners.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/register", get(auth::register_page).post(auth::register))
        .route("/logout", post(auth::logout))
}

/// Create all routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Public pages
        .route("/", get(home::index))
        .route("/cisterns", get(home::cisterns))
        .route("/deliveries/track", get(home::track_delivery))
        .route("/deliveries/detail", get(home::delivery_detail))
        // Auth routes
        .merge(auth_routes())
        // Admin panel
        .merge(admin::router())
}
