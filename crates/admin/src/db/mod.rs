//! Storage layer: store traits and their `PostgreSQL` implementations.
//!
//! Route handlers never touch the database directly. They depend on the
//! narrow store traits defined here, which makes the failure-handling policy
//! a single auditable seam and lets the behavior tests run against in-memory
//! fakes.
//!
//! ## Tables
//!
//! - `users` - Panel users (ownership stamps and login)
//! - `session` - Session storage (tower-sessions)
//! - `clients` - Clients of the print business
//! - `print_jobs` - Print jobs, each belonging to a client
//!
//! # Migrations
//!
//! Migrations live in `crates/admin/migrations/` and are run explicitly via:
//! ```bash
//! cargo run -p pressroom-cli -- migrate
//! ```
//! They are never run automatically at server startup.

pub mod clients;
pub mod print_jobs;
pub mod users;

#[cfg(test)]
pub mod memory;

use std::time::Duration;

use async_trait::async_trait;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use thiserror::Error;

use pressroom_core::{ClientId, Email, PrintJobId};

use crate::models::{
    Client, ClientUpdate, NewClient, NewPrintJob, NewUser, PrintJob, PrintJobUpdate, User,
};

pub use clients::PgClientStore;
pub use print_jobs::PgPrintJobStore;
pub use users::PgUserStore;

/// Errors that can occur during store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Data in the database is corrupted or invalid.
    #[error("data corruption: {0}")]
    DataCorruption(String),

    /// Requested entity was not found.
    #[error("not found")]
    NotFound,

    /// Constraint violation (e.g., unique email, missing referenced client).
    #[error("constraint violation: {0}")]
    Conflict(String),
}

/// Store for clients.
///
/// The whole client surface of the panel: fetch-all ordered newest-first,
/// create with an ownership stamp, update by ID, delete by ID.
#[async_trait]
pub trait ClientStore: Send + Sync {
    /// List all clients, ordered by creation time descending.
    async fn list(&self) -> Result<Vec<Client>, StoreError>;

    /// Fetch one client by ID.
    async fn get(&self, id: ClientId) -> Result<Option<Client>, StoreError>;

    /// Insert a new client. The ID and creation timestamp are server-assigned.
    async fn create(&self, new: NewClient) -> Result<Client, StoreError>;

    /// Update a client by ID. The owner stamp is never touched.
    async fn update(&self, id: ClientId, update: ClientUpdate) -> Result<Client, StoreError>;

    /// Delete a client by ID.
    async fn delete(&self, id: ClientId) -> Result<(), StoreError>;
}

/// Store for print jobs. Same shape as [`ClientStore`].
#[async_trait]
pub trait PrintJobStore: Send + Sync {
    /// List all print jobs, ordered by creation time descending.
    async fn list(&self) -> Result<Vec<PrintJob>, StoreError>;

    /// Fetch one print job by ID.
    async fn get(&self, id: PrintJobId) -> Result<Option<PrintJob>, StoreError>;

    /// Insert a new print job. The ID and creation timestamp are server-assigned.
    async fn create(&self, new: NewPrintJob) -> Result<PrintJob, StoreError>;

    /// Update a print job by ID. The owner stamp is never touched.
    async fn update(&self, id: PrintJobId, update: PrintJobUpdate)
    -> Result<PrintJob, StoreError>;

    /// Delete a print job by ID.
    async fn delete(&self, id: PrintJobId) -> Result<(), StoreError>;
}

/// Store for panel users (the identity boundary).
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Look up a user by email address. Used at login.
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, StoreError>;

    /// Insert a new user. Used by the CLI, not the web surface.
    async fn create(&self, new: NewUser) -> Result<User, StoreError>;
}

/// Create a `PostgreSQL` connection pool with sensible defaults.
///
/// # Errors
///
/// Returns `sqlx::Error` if the connection cannot be established.
pub async fn create_pool(database_url: &secrecy::SecretString) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .min_connections(2)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url.expose_secret())
        .await
}

/// Map a sqlx error onto the store taxonomy, turning unique and foreign key
/// violations into `Conflict`.
fn map_sqlx_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db_err) = &err {
        match db_err.kind() {
            sqlx::error::ErrorKind::UniqueViolation => {
                return StoreError::Conflict(db_err.message().to_string());
            }
            sqlx::error::ErrorKind::ForeignKeyViolation => {
                return StoreError::Conflict(db_err.message().to_string());
            }
            _ => {}
        }
    }
    StoreError::Database(err)
}
