//! Domain models for the admin panel.

pub mod client;
pub mod print_job;
pub mod user;

pub use client::{Client, ClientUpdate, NewClient};
pub use print_job::{NewPrintJob, PrintJob, PrintJobStatus, PrintJobUpdate};
pub use user::{CurrentUser, NewUser, User, session_keys};
