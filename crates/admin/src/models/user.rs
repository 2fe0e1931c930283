//! Panel user domain types and session keys.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pressroom_core::{Email, UserId};

/// Session storage keys.
pub mod session_keys {
    /// Key under which the logged-in user is stored in the session.
    pub const CURRENT_USER: &str = "current_user";
}

/// A panel user (domain type).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// The user's email address.
    pub email: Email,
    /// The user's display name.
    pub name: String,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// Fields for creating a panel user (via the CLI).
#[derive(Debug, Clone)]
pub struct NewUser {
    pub email: Email,
    pub name: String,
}

/// The logged-in user, as stored in the session.
///
/// This is the "current user identifier" consumed when stamping ownership on
/// newly created records. Handlers receive it explicitly through the
/// `RequireAuth` extractor rather than reading ambient global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentUser {
    /// The user's ID.
    pub id: UserId,
    /// The user's email address.
    pub email: Email,
    /// The user's display name.
    pub name: String,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
