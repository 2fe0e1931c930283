//! Print job domain types.

use core::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use pressroom_core::{ClientId, PrintJobId, UserId};

/// Lifecycle status of a print job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PrintJobStatus {
    /// Accepted but not started.
    Pending,
    /// On the press.
    InProgress,
    /// Done and ready for pickup or delivery.
    Completed,
}

impl PrintJobStatus {
    /// Stable string form, matching the database CHECK constraint.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
        }
    }

    /// Human-readable label for templates.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In progress",
            Self::Completed => "Completed",
        }
    }
}

impl fmt::Display for PrintJobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown status string.
#[derive(Debug, Clone, thiserror::Error)]
#[error("unknown print job status: {0}")]
pub struct ParseStatusError(String);

impl FromStr for PrintJobStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            other => Err(ParseStatusError(other.to_string())),
        }
    }
}

/// A print job for a client.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrintJob {
    /// Unique job ID. Server-assigned and immutable.
    pub id: PrintJobId,
    /// What is being printed.
    pub title: String,
    /// Client the job belongs to.
    pub client_id: ClientId,
    /// Current status.
    pub status: PrintJobStatus,
    /// Number of units.
    pub quantity: i32,
    /// Optional due date.
    pub due_date: Option<NaiveDate>,
    /// User who created this job. Set once at insert time.
    pub created_by: UserId,
    /// When the job was created (server-assigned).
    pub created_at: DateTime<Utc>,
    /// When the job was last updated (application-assigned at edit time).
    pub updated_at: DateTime<Utc>,
}

/// Fields for creating a print job.
#[derive(Debug, Clone)]
pub struct NewPrintJob {
    pub title: String,
    pub client_id: ClientId,
    pub status: PrintJobStatus,
    pub quantity: i32,
    pub due_date: Option<NaiveDate>,
    /// The current user, recorded as the owner of the new record.
    pub created_by: UserId,
}

/// Fields for updating a print job. No owner field, same as [`super::ClientUpdate`].
#[derive(Debug, Clone)]
pub struct PrintJobUpdate {
    pub title: String,
    pub client_id: ClientId,
    pub status: PrintJobStatus,
    pub quantity: i32,
    pub due_date: Option<NaiveDate>,
    /// Fresh "last updated" timestamp, generated when the edit is submitted.
    pub updated_at: DateTime<Utc>,
}
