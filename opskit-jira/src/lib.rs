//! # Jira API Client
//!
//! Provides Jira REST API integration for issue management, transitions,
//! issue search, and Insight asset search, supporting basic and bearer
//! authentication for opskit subcommands.

mod client;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::JiraClient;
// Re-export models
pub use models::{
  AddAttachmentOptions, AddCommentOptions, IssueCreateOptions, IssueOptions, JiraOptions, SearchAssetsOptions,
  SearchIssuesOptions,
};
