//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the Jira API resource types opskit
//! exposes: issues, transitions, issue search, and Insight asset search.

pub mod assets;
pub mod issues;
pub mod search;
pub mod transitions;
