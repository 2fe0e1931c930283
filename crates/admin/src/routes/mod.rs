//! HTTP route handlers.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                  - Liveness check
//! GET  /health/ready            - Readiness check (database reachable)
//!
//! # Dashboard
//! GET  /                        - Dashboard overview
//!
//! # Auth
//! GET  /login                   - Login page
//! POST /login                   - Log in by email
//! POST /logout                  - Log out
//!
//! # Clients
//! GET  /clients                 - Client list (modal state in query string)
//! POST /clients                 - Create client
//! POST /clients/{id}            - Update client
//! POST /clients/{id}/delete     - Delete client
//!
//! # Print jobs
//! GET  /print-jobs              - Print job list (modal state in query string)
//! POST /print-jobs              - Create print job
//! POST /print-jobs/{id}         - Update print job
//! POST /print-jobs/{id}/delete  - Delete print job
//! ```

pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod print_jobs;

use axum::{
    Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use crate::state::AppState;

/// Build the full application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(dashboard::router())
        .merge(auth::router())
        .merge(clients::router())
        .merge(print_jobs::router())
        .route("/health", get(health))
        .route("/health/ready", get(readiness))
        .with_state(state)
}

/// Liveness check.
///
/// GET /health
async fn health() -> &'static str {
    "OK"
}

/// Readiness check: verifies the database is reachable.
///
/// GET /health/ready
async fn readiness(State(state): State<AppState>) -> impl IntoResponse {
    match sqlx::query("SELECT 1").execute(state.pool()).await {
        Ok(_) => (StatusCode::OK, "READY"),
        Err(err) => {
            tracing::error!(error = %err, "Readiness check failed");
            (StatusCode::SERVICE_UNAVAILABLE, "NOT READY")
        }
    }
}


#[cfg(test)]
pub(crate) mod testing {
    //! Shared harness for router behavior tests.
    //!
    //! Builds the real router over in-memory stores with a memory-backed
    //! session layer, and drives it with `tower::ServiceExt::oneshot`.

    #![allow(clippy::unwrap_used)]

    use std::sync::Arc;

    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request, StatusCode, header};
    use axum::response::Response;
    use secrecy::SecretString;
    use tower::ServiceExt;
    use tower_sessions::{MemoryStore, SessionManagerLayer};

    use crate::config::AdminConfig;
    use crate::db::memory::{MemoryClientStore, MemoryPrintJobStore, MemoryUserStore};
    use crate::models::User;
    use crate::state::AppState;

    /// Email of the user seeded by [`TestApp::new`].
    pub const TEST_USER_EMAIL: &str = "admin@pressroom.test";

    /// The router plus handles to its backing stores.
    pub struct TestApp {
        pub app: Router,
        pub clients: Arc<MemoryClientStore>,
        pub jobs: Arc<MemoryPrintJobStore>,
        pub user: User,
    }

    impl TestApp {
        /// App over fresh stores, with one login-capable user seeded.
        pub fn new() -> Self {
            Self::with_stores(
                Arc::new(MemoryClientStore::new()),
                Arc::new(MemoryPrintJobStore::new()),
            )
        }

        pub fn with_stores(
            clients: Arc<MemoryClientStore>,
            jobs: Arc<MemoryPrintJobStore>,
        ) -> Self {
            let users = Arc::new(MemoryUserStore::new());
            let user = users.seed(1, TEST_USER_EMAIL, "Pat Admin");

            let pool = sqlx::postgres::PgPoolOptions::new()
                .connect_lazy("postgres://localhost/pressroom_test")
                .unwrap();
            let state =
                AppState::with_stores(test_config(), pool, clients.clone(), jobs.clone(), users);

            // Memory-backed sessions; the cookie round-trip is handled
            // manually by the request helpers below.
            let session_layer = SessionManagerLayer::new(MemoryStore::default()).with_secure(false);
            let app = super::router(state).layer(session_layer);

            Self {
                app,
                clients,
                jobs,
                user,
            }
        }

        /// Log in as the seeded user and return the session cookie.
        pub async fn login(&self) -> String {
            let response = self
                .app
                .clone()
                .oneshot(
                    Request::post("/login")
                        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                        .body(Body::from(format!("email={TEST_USER_EMAIL}")))
                        .unwrap(),
                )
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(location(&response), "/");

            response
                .headers()
                .get(header::SET_COOKIE)
                .unwrap()
                .to_str()
                .unwrap()
                .split(';')
                .next()
                .unwrap()
                .to_string()
        }

        pub async fn get(&self, cookie: &str, uri: &str) -> Response {
            self.app
                .clone()
                .oneshot(
                    Request::get(uri)
                        .header(header::COOKIE, cookie)
                        .body(Body::empty())
                        .unwrap(),
                )
                .await
                .unwrap()
        }

        pub async fn get_anonymous(&self, uri: &str) -> Response {
            self.app
                .clone()
                .oneshot(Request::get(uri).body(Body::empty()).unwrap())
                .await
                .unwrap()
        }

        pub async fn post_form(&self, cookie: &str, uri: &str, body: &str) -> Response {
            self.app
                .clone()
                .oneshot(
                    Request::post(uri)
                        .header(header::COOKIE, cookie)
                        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                        .body(Body::from(body.to_string()))
                        .unwrap(),
                )
                .await
                .unwrap()
        }
    }

    /// The `Location` header of a redirect response.
    pub fn location(response: &Response) -> &str {
        response
            .headers()
            .get(header::LOCATION)
            .unwrap()
            .to_str()
            .unwrap()
    }

    /// Consume a response and return its body as text.
    pub async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    fn test_config() -> AdminConfig {
        AdminConfig {
            database_url: SecretString::from("postgres://localhost/pressroom_test"),
            host: "127.0.0.1".parse().unwrap(),
            port: 3100,
            base_url: "http://localhost:3100".to_string(),
            session_secret: SecretString::from("x".repeat(32)),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }
}
