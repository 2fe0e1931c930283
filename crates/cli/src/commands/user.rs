//! Panel user management command.
//!
//! # Usage
//!
//! ```bash
//! pressroom-cli user create -e pat@example.com -n "Pat Admin"
//! ```
//!
//! Login is by email only, so creating the row is all it takes to grant
//! access to the panel.

use pressroom_core::Email;

use pressroom_admin::db::{self, PgUserStore, UserStore};
use pressroom_admin::models::NewUser;

use super::{CommandError, database_url};

/// Create a new panel user.
///
/// # Errors
///
/// Fails if the email is invalid, a user with this email already exists, or
/// the database is unreachable.
pub async fn create(email: &str, name: &str) -> Result<(), CommandError> {
    dotenvy::dotenv().ok();

    let email = Email::parse(email)?;

    let database_url = database_url()?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url).await?;
    let users = PgUserStore::new(pool);

    if users.find_by_email(&email).await?.is_some() {
        return Err(CommandError::UserExists(email.to_string()));
    }

    let user = users
        .create(NewUser {
            email,
            name: name.to_owned(),
        })
        .await?;

    tracing::info!(
        "User created successfully! ID: {}, Email: {}",
        user.id,
        user.email
    );
    Ok(())
}
