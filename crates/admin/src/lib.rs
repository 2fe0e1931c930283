//! Pressroom admin panel library.
//!
//! A server-rendered administration panel for a print shop: clients and
//! their print jobs, behind email login with `PostgreSQL`-backed sessions.
//!
//! The crate is a library so the router can be exercised by tests without
//! binding a socket; the binary in `main.rs` only wires configuration,
//! logging, and the listener around it.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod models;
pub mod nav;
pub mod routes;
pub mod state;
