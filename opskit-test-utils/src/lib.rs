//! Test utilities shared across the opskit workspace
//!
//! This crate provides common testing infrastructure:
//! - environment variable isolation ([`EnvVarGuard`])
//! - content file fixtures ([`ContentFileGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test
//! utilities may not be used by all tests, and the compiler cannot detect
//! usage across crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod content;
pub mod env;

// Re-export commonly used items
pub use content::ContentFileGuard;
pub use env::EnvVarGuard;
