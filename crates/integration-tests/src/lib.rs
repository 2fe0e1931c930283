//! Integration tests for Pressroom.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the database and run migrations
//! cargo run -p pressroom-cli -- migrate
//!
//! # Create the test user and start the server
//! cargo run -p pressroom-cli -- user create -e test@pressroom.local -n "Test User"
//! cargo run -p pressroom-admin
//!
//! # Run the ignored tests against it
//! cargo test -p pressroom-integration-tests -- --ignored
//! ```
//!
//! The tests drive the running admin server over HTTP with a cookie-holding
//! client, logging in through the real `/login` form.

#![cfg_attr(not(test), forbid(unsafe_code))]

use reqwest::Client;

/// Base URL for the admin server (configurable via environment).
#[must_use]
pub fn base_url() -> String {
    std::env::var("PRESSROOM_BASE_URL").unwrap_or_else(|_| "http://localhost:3100".to_string())
}

/// Email of the user the tests log in as.
#[must_use]
pub fn test_user_email() -> String {
    std::env::var("PRESSROOM_TEST_EMAIL").unwrap_or_else(|_| "test@pressroom.local".to_string())
}

/// Create a client with a cookie store and log in through `/login`.
///
/// # Panics
///
/// Panics if the server is unreachable or the login redirect does not land
/// on the dashboard (for instance when the test user does not exist).
pub async fn authenticated_client() -> Client {
    let client = Client::builder()
        .cookie_store(true)
        .build()
        .expect("Failed to create HTTP client");

    let resp = client
        .post(format!("{}/login", base_url()))
        .form(&[("email", test_user_email())])
        .send()
        .await
        .expect("Failed to log in");

    // The redirect is followed; an error flag in the final URL means the
    // login was rejected.
    assert!(
        resp.status().is_success(),
        "Login failed with status {}",
        resp.status()
    );
    assert!(
        !resp.url().as_str().contains("error"),
        "Login rejected for {}",
        test_user_email()
    );

    client
}
