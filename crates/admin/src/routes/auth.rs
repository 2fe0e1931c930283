//! Login and logout.
//!
//! Login is by email lookup against the user store. A failed lookup lands
//! back on the login page with the error flag set, without distinguishing an
//! unknown address from a backend failure.

use askama::Template;
use axum::{
    Form, Router,
    extract::{Query, State},
    response::{Html, Redirect},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;

use pressroom_core::Email;

use crate::error::AppError;
use crate::models::{CurrentUser, session_keys};
use crate::state::AppState;

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    show_error: bool,
}

#[derive(Debug, Deserialize)]
struct LoginQuery {
    error: Option<String>,
}

#[derive(Debug, Deserialize)]
struct LoginForm {
    email: String,
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", get(login_page).post(login))
        .route("/logout", post(logout))
}

/// Render the login page.
///
/// GET /login
async fn login_page(Query(query): Query<LoginQuery>) -> Result<Html<String>, AppError> {
    let template = LoginTemplate {
        show_error: query.error.is_some(),
    };
    Ok(Html(template.render()?))
}

/// Log in by email and store the user in the session.
///
/// POST /login
async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    let Ok(email) = Email::parse(form.email.trim()) else {
        return Ok(Redirect::to("/login?error=1"));
    };

    let user = match state.users().find_by_email(&email).await {
        Ok(Some(user)) => user,
        Ok(None) => return Ok(Redirect::to("/login?error=1")),
        Err(err) => {
            tracing::error!(error = %err, "Login lookup failed");
            return Ok(Redirect::to("/login?error=1"));
        }
    };

    session
        .insert(session_keys::CURRENT_USER, CurrentUser::from(&user))
        .await?;

    Ok(Redirect::to("/"))
}

/// Clear the session and return to the login page.
///
/// POST /logout
async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await?;
    Ok(Redirect::to("/login"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::StatusCode;

    use crate::routes::testing::{TestApp, body_text, location};

    #[tokio::test]
    async fn test_login_page_renders() {
        let app = TestApp::new();

        let response = app.get_anonymous("/login").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_text(response).await;
        assert!(body.contains("Sign in"));
        assert!(!body.contains("Sign in failed"));
    }

    #[tokio::test]
    async fn test_login_page_shows_error_flag() {
        let app = TestApp::new();

        let response = app.get_anonymous("/login?error=1").await;
        let body = body_text(response).await;
        assert!(body.contains("Sign in failed"));
    }

    #[tokio::test]
    async fn test_login_with_known_email_sets_session() {
        let app = TestApp::new();

        // login() asserts the 303 to "/" and the session cookie.
        let cookie = app.login().await;

        let response = app.get(&cookie, "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_text(response).await;
        assert!(body.contains("Pat Admin"));
    }

    #[tokio::test]
    async fn test_login_with_unknown_email_redirects_with_error() {
        let app = TestApp::new();

        let response = app
            .post_form("", "/login", "email=nobody@pressroom.test")
            .await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login?error=1");
    }

    #[tokio::test]
    async fn test_login_with_invalid_email_redirects_with_error() {
        let app = TestApp::new();

        let response = app.post_form("", "/login", "email=not-an-email").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login?error=1");
    }

    #[tokio::test]
    async fn test_logout_clears_session() {
        let app = TestApp::new();
        let cookie = app.login().await;

        let response = app.post_form(&cookie, "/logout", "").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");

        // The old cookie no longer authenticates.
        let response = app.get(&cookie, "/").await;
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(location(&response), "/login");
    }
}
