//! CLI command implementations.

pub mod migrate;
pub mod seed;
pub mod user;

use thiserror::Error;

/// Errors shared by the CLI commands.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Migration error.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Store error.
    #[error("Store error: {0}")]
    Store(#[from] pressroom_admin::db::StoreError),

    /// Invalid email address.
    #[error("Invalid email: {0}")]
    InvalidEmail(#[from] pressroom_core::EmailError),

    /// Invalid phone number.
    #[error("Invalid phone: {0}")]
    InvalidPhone(#[from] pressroom_core::PhoneError),

    /// User already exists.
    #[error("User already exists with email: {0}")]
    UserExists(String),
}

/// Read the database URL from the environment.
///
/// Checks `PRESSROOM_DATABASE_URL` first, then falls back to `DATABASE_URL`,
/// matching the admin server's configuration.
pub(crate) fn database_url() -> Result<secrecy::SecretString, CommandError> {
    std::env::var("PRESSROOM_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map(secrecy::SecretString::from)
        .map_err(|_| CommandError::MissingEnvVar("PRESSROOM_DATABASE_URL"))
}
