//! Server-rendered admin dashboard for hackathon registrations.
//!
//! The core fetches `{API_BASE_URL}/api/admin/all-data`, decodes the
//! double-encoded members field of every record and renders the result as
//! HTML. The `server` feature exposes it over axum.

pub mod core;
pub mod server;
pub mod utils;
