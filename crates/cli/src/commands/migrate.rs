//! Database migration command.
//!
//! # Usage
//!
//! ```bash
//! pressroom-cli migrate
//! ```
//!
//! Migrations live in `crates/admin/migrations/` and are embedded in the
//! binary at compile time. The admin server never runs them automatically.

use secrecy::ExposeSecret;
use sqlx::PgPool;

use super::{CommandError, database_url};

/// Run all pending database migrations.
pub async fn run() -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(database_url.expose_secret()).await?;

    tracing::info!("Running migrations...");
    sqlx::migrate!("../admin/migrations").run(&pool).await?;

    tracing::info!("Migrations complete!");
    Ok(())
}
