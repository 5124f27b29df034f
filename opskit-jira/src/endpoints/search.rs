//! # Jira Issue Search
//!
//! JQL issue search against the fixed `/rest/api/2/search` endpoint. The
//! response is returned unmodified for the CLI output step.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::SearchIssuesOptions;

impl JiraClient {
  /// Search issues by JQL expression and return the raw response bytes
  pub async fn search_issues(&self, options: &SearchIssuesOptions) -> Result<Vec<u8>> {
    let url = format!("{}/rest/api/2/search", self.base_url);
    debug!("Searching Jira issues: {}", options.search_pattern);

    let max_results = options.max_results.to_string();
    let response = self
      .auth
      .apply(self.client.get(&url))
      .query(&[
        ("jql", options.search_pattern.as_str()),
        ("maxResults", max_results.as_str()),
        ("validateQuery", "strict"),
      ])
      .send()
      .await
      .context("Failed to search Jira issues")?;

    match response.status() {
      status if status.is_success() => Ok(response.bytes().await.context("Failed to read Jira response")?.to_vec()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Jira rejected the search query: {}",
        response.text().await.unwrap_or_default()
      )),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
