//! Client domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use pressroom_core::{ClientId, Email, Phone, UserId};

/// A client of the print business.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    /// Unique client ID. Server-assigned, immutable, and the sole key used
    /// for update and delete targeting.
    pub id: ClientId,
    /// Contact name.
    pub name: String,
    /// Contact email address.
    pub email: Email,
    /// Contact phone number.
    pub phone: Phone,
    /// Company name.
    pub company: String,
    /// User who created this client. Set once at insert time.
    pub created_by: UserId,
    /// When the client was created (server-assigned).
    pub created_at: DateTime<Utc>,
    /// When the client was last updated (application-assigned at edit time).
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a client.
///
/// Carries the owning user so the ownership stamp is an explicit input to the
/// store rather than ambient state.
#[derive(Debug, Clone)]
pub struct NewClient {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub company: String,
    /// The current user, recorded as the owner of the new record.
    pub created_by: UserId,
}

/// Fields for updating a client.
///
/// Deliberately has no owner field: ownership is set once at creation and is
/// never part of an update payload.
#[derive(Debug, Clone)]
pub struct ClientUpdate {
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub company: String,
    /// Fresh "last updated" timestamp, generated when the edit is submitted.
    pub updated_at: DateTime<Utc>,
}
