//! # Graylog API Client
//!
//! Provides Graylog REST API integration for the universal log search,
//! supporting absolute and relative time ranges and stream filtering for
//! opskit subcommands.

mod client;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::GraylogClient;
// Re-export models
pub use models::{GraylogOptions, LogsOptions};
