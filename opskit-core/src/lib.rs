//! # Opskit Core Library
//!
//! Shared plumbing for the opskit vendor clients and CLI: HTTP client
//! construction, `Authorization` header selection, file/URL content
//! resolution, and response output handling.

pub mod auth;
pub mod content;
pub mod http;
pub mod output;

// Re-export main types for the vendor clients and the CLI
pub use auth::Auth;
pub use http::{HttpOptions, build_client};
pub use output::{OutputOptions, print_error, print_info, print_success, print_warning, write_output};
