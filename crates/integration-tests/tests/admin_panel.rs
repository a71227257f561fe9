//! Integration tests for the Fluir admin panel.
//!
//! These tests require:
//! - A running Fluir server (cargo run -p fluir-web)
//! - The seeded default admin account (created automatically on a fresh
//!   database)
//!
//! Run with: cargo test -p fluir-integration-tests -- --ignored

use reqwest::{Client, StatusCode};

use fluir_integration_tests::{base_url, client, unique_cpf};
use fluir_web::db::{SEED_ADMIN_CPF, SEED_ADMIN_PASSWORD};

/// Sign the client in at the admin entry point with the seeded credentials.
async fn sign_in_admin(client: &Client) -> String {
    let base_url = base_url();
    let resp = client
        .post(format!("{base_url}/admin/login"))
        .form(&[
            ("cpf", SEED_ADMIN_CPF),
            ("password", SEED_ADMIN_PASSWORD),
        ])
        .send()
        .await
        .expect("Failed to sign in as admin");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/admin");
    resp.text().await.expect("Failed to read dashboard")
}

/// Find the account ID for `cpf` in the dashboard accounts table.
fn account_id_in(body: &str, cpf: &str) -> Option<String> {
    body.split("<tr>")
        .find(|row| row.contains(cpf))
        .and_then(|row| row.split("/admin/users/").nth(1))
        .and_then(|rest| rest.split('/').next())
        .map(ToOwned::to_owned)
}

// ============================================================================
// Access Control
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_admin_requires_authentication() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/admin"))
        .send()
        .await
        .expect("Failed to get admin panel");

    // Bounced to the admin sign-in page
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/admin/login");
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_seeded_admin_signs_in() {
    let client = client();

    let body = sign_in_admin(&client).await;
    assert!(body.contains("Administrator signed in successfully!"));
    assert!(body.contains(SEED_ADMIN_CPF));
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_wrong_admin_credentials_bounce_back() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .post(format!("{base_url}/admin/login"))
        .form(&[("cpf", SEED_ADMIN_CPF), ("password", "not-the-password")])
        .send()
        .await
        .expect("Failed to attempt admin sign-in");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/admin/login");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Incorrect CPF or password. Access denied."));
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_user_account_cannot_enter_admin() {
    let client = client();
    let base_url = base_url();
    let cpf = unique_cpf("no-admin");

    // Register and sign in as a regular user
    let resp = client
        .post(format!("{base_url}/register"))
        .form(&[
            ("name", "Regular User"),
            ("cpf", cpf.as_str()),
            ("password", "pw-integration"),
        ])
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.url().path(), "/login");

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("cpf", cpf.as_str()), ("password", "pw-integration")])
        .send()
        .await
        .expect("Failed to sign in");
    assert_eq!(resp.url().path(), "/");

    // The general session grants nothing on the admin side
    let resp = client
        .get(format!("{base_url}/admin"))
        .send()
        .await
        .expect("Failed to get admin panel");
    assert_eq!(resp.url().path(), "/admin/login");

    // Nor does the role-filtered entry point accept user credentials
    let resp = client
        .post(format!("{base_url}/admin/login"))
        .form(&[("cpf", cpf.as_str()), ("password", "pw-integration")])
        .send()
        .await
        .expect("Failed to attempt admin sign-in");
    assert_eq!(resp.url().path(), "/admin/login");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Incorrect CPF or password. Access denied."));
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_admin_logout_revokes_access() {
    let client = client();
    let base_url = base_url();

    sign_in_admin(&client).await;

    let resp = client
        .post(format!("{base_url}/admin/logout"))
        .send()
        .await
        .expect("Failed to sign out");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/admin/login");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Signed out successfully!"));

    let resp = client
        .get(format!("{base_url}/admin"))
        .send()
        .await
        .expect("Failed to get admin panel");
    assert_eq!(resp.url().path(), "/admin/login");
}

// ============================================================================
// Account CRUD
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_create_edit_delete_user_roundtrip() {
    let client = client();
    let base_url = base_url();
    let cpf = unique_cpf("crud");

    sign_in_admin(&client).await;

    // Create
    let resp = client
        .post(format!("{base_url}/admin/users"))
        .form(&[
            ("name", "Crud Subject"),
            ("cpf", cpf.as_str()),
            ("password", "pw-integration"),
            ("role", "user"),
        ])
        .send()
        .await
        .expect("Failed to create user");

    assert_eq!(resp.url().path(), "/admin");
    let body = resp.text().await.expect("Failed to read dashboard");
    assert!(body.contains("User added successfully!"));
    assert!(body.contains(&cpf));

    let id = account_id_in(&body, &cpf).expect("Created user missing from dashboard");

    // Edit
    let resp = client
        .post(format!("{base_url}/admin/users/{id}"))
        .form(&[
            ("name", "Crud Subject Renamed"),
            ("cpf", cpf.as_str()),
            ("password", "pw-integration"),
            ("role", "user"),
        ])
        .send()
        .await
        .expect("Failed to update user");

    assert_eq!(resp.url().path(), "/admin");
    let body = resp.text().await.expect("Failed to read dashboard");
    assert!(body.contains("User updated successfully!"));
    assert!(body.contains("Crud Subject Renamed"));

    // Delete
    let resp = client
        .post(format!("{base_url}/admin/users/{id}/delete"))
        .send()
        .await
        .expect("Failed to delete user");

    assert_eq!(resp.url().path(), "/admin");
    let body = resp.text().await.expect("Failed to read dashboard");
    assert!(body.contains("User deleted successfully!"));
    assert!(!body.contains(&cpf));
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_duplicate_cpf_is_rejected() {
    let client = client();
    let base_url = base_url();
    let cpf = unique_cpf("admin-dup");

    sign_in_admin(&client).await;

    let form = [
        ("name", "Original"),
        ("cpf", cpf.as_str()),
        ("password", "pw-integration"),
        ("role", "user"),
    ];

    let resp = client
        .post(format!("{base_url}/admin/users"))
        .form(&form)
        .send()
        .await
        .expect("Failed to create user");
    assert_eq!(resp.url().path(), "/admin");

    // Second create with the same CPF bounces back to the form
    let resp = client
        .post(format!("{base_url}/admin/users"))
        .form(&form)
        .send()
        .await
        .expect("Failed to re-create user");

    assert_eq!(resp.url().path(), "/admin/users/new");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Error: CPF is already registered in the system."));
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_create_admin_namespaces_token() {
    let client = client();
    let base_url = base_url();
    let token = unique_cpf("token");
    let handle = format!("admin_{token}");

    sign_in_admin(&client).await;

    let resp = client
        .post(format!("{base_url}/admin/admins"))
        .form(&[
            ("name", "Second Admin"),
            ("token", token.as_str()),
            ("password", "pw-integration"),
        ])
        .send()
        .await
        .expect("Failed to create admin");

    assert_eq!(resp.url().path(), "/admin");
    let body = resp.text().await.expect("Failed to read dashboard");
    assert!(body.contains("Administrator added successfully!"));
    assert!(body.contains(&handle));

    // The new admin signs in with the namespaced handle
    let second = fluir_integration_tests::client();
    let resp = second
        .post(format!("{base_url}/admin/login"))
        .form(&[("cpf", handle.as_str()), ("password", "pw-integration")])
        .send()
        .await
        .expect("Failed to sign in as new admin");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/admin");
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_self_delete_is_blocked() {
    let client = client();
    let base_url = base_url();

    let body = sign_in_admin(&client).await;
    let id = account_id_in(&body, SEED_ADMIN_CPF).expect("Seeded admin missing from dashboard");

    // The dashboard hides the button, but the endpoint must refuse too
    let resp = client
        .post(format!("{base_url}/admin/users/{id}/delete"))
        .send()
        .await
        .expect("Failed to attempt self-delete");

    assert_eq!(resp.url().path(), "/admin");
    let body = resp.text().await.expect("Failed to read dashboard");
    assert!(body.contains("Cannot delete the currently signed-in administrator."));
    assert!(body.contains(SEED_ADMIN_CPF));
}
