//! Integration tests for the public Fluir site.
//!
//! These tests require:
//! - A running Fluir server (cargo run -p fluir-web)
//!
//! Run with: cargo test -p fluir-integration-tests -- --ignored

use reqwest::StatusCode;

use fluir_integration_tests::{base_url, client, unique_cpf};

// ============================================================================
// Health & Static Pages
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_health_endpoints() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/health"))
        .send()
        .await
        .expect("Failed to reach health endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.text().await.expect("Failed to read body"), "ok");

    let resp = client
        .get(format!("{base_url}/health/ready"))
        .send()
        .await
        .expect("Failed to reach readiness endpoint");
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_home_page_renders() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/"))
        .send()
        .await
        .expect("Failed to get home page");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Fluir"));
    assert!(body.contains("Sign in"));
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_delivery_pages_render() {
    let client = client();
    let base_url = base_url();

    for path in ["/cisterns", "/deliveries/track", "/deliveries/detail"] {
        let resp = client
            .get(format!("{base_url}{path}"))
            .send()
            .await
            .expect("Failed to get page");
        assert_eq!(resp.status(), StatusCode::OK, "GET {path}");
    }
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_stylesheet_is_served() {
    let client = client();
    let base_url = base_url();

    let resp = client
        .get(format!("{base_url}/static/css/main.css"))
        .send()
        .await
        .expect("Failed to get stylesheet");

    assert_eq!(resp.status(), StatusCode::OK);
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains(".site-header"));
}

// ============================================================================
// Registration & Sign-in Flow
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_registration_and_sign_in_flow() {
    let client = client();
    let base_url = base_url();
    let cpf = unique_cpf("register");

    // Register
    let resp = client
        .post(format!("{base_url}/register"))
        .form(&[
            ("name", "Integration Test"),
            ("cpf", cpf.as_str()),
            ("password", "pw-integration"),
        ])
        .send()
        .await
        .expect("Failed to register");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/login");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Registration successful! You can now sign in."));

    // Sign in
    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("cpf", cpf.as_str()), ("password", "pw-integration")])
        .send()
        .await
        .expect("Failed to sign in");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Signed in successfully!"));
    assert!(body.contains("Hello, Integration Test"));

    // Sign out
    let resp = client
        .post(format!("{base_url}/logout"))
        .send()
        .await
        .expect("Failed to sign out");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Sign in"));
    assert!(!body.contains("Hello, Integration Test"));
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_duplicate_registration_is_rejected() {
    let client = client();
    let base_url = base_url();
    let cpf = unique_cpf("duplicate");

    let form = [
        ("name", "First"),
        ("cpf", cpf.as_str()),
        ("password", "pw-integration"),
    ];

    let resp = client
        .post(format!("{base_url}/register"))
        .form(&form)
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.url().path(), "/login");

    // Same CPF again bounces back to the registration form
    let resp = client
        .post(format!("{base_url}/register"))
        .form(&form)
        .send()
        .await
        .expect("Failed to re-register");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/register");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Error: CPF is already registered in the system."));
}

#[tokio::test]
#[ignore = "Requires a running Fluir server"]
async fn test_wrong_password_bounces_to_login() {
    let client = client();
    let base_url = base_url();
    let cpf = unique_cpf("wrong-pw");

    let resp = client
        .post(format!("{base_url}/register"))
        .form(&[
            ("name", "Wrong PW"),
            ("cpf", cpf.as_str()),
            ("password", "right"),
        ])
        .send()
        .await
        .expect("Failed to register");
    assert_eq!(resp.url().path(), "/login");

    let resp = client
        .post(format!("{base_url}/login"))
        .form(&[("cpf", cpf.as_str()), ("password", "wrong")])
        .send()
        .await
        .expect("Failed to attempt sign-in");

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.url().path(), "/login");
    let body = resp.text().await.expect("Failed to read body");
    assert!(body.contains("Incorrect CPF or password. Please try again."));
}
