//! Unified error handling for the admin panel.
//!
//! Store failures inside the client and print job flows are deliberately
//! handled (logged and swallowed) at the route layer, so `AppError` covers
//! the cases that do escape a handler: template rendering, session storage,
//! and store failures outside the silent-failure contract (login).

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::db::StoreError;

/// Application-level error type for the admin panel.
#[derive(Debug, Error)]
pub enum AppError {
    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// Template rendering failed.
    #[error("template error: {0}")]
    Template(#[from] askama::Error),

    /// Session storage failed.
    #[error("session error: {0}")]
    Session(#[from] tower_sessions::session::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // All AppError variants are server-side faults; capture them.
        let event_id = sentry::capture_error(&self);
        tracing::error!(
            error = %self,
            sentry_event_id = %event_id,
            "Admin request error"
        );

        // Don't expose internal error details to clients
        (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::Store(StoreError::NotFound);
        assert_eq!(err.to_string(), "store error: not found");
    }

    #[test]
    fn test_app_error_response_is_500() {
        let err = AppError::Store(StoreError::DataCorruption("bad row".to_string()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
