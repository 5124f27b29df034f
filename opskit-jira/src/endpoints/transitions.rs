//! # Jira Transition Endpoint
//!
//! Applies a workflow transition to an issue. The transition endpoint
//! returns no useful body, so the operation wraps the numeric HTTP status
//! code into a small JSON object instead.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{IssueOptions, OutputCode, TransitionId, TransitionRequest};

impl JiraClient {
  /// Apply the transition named by the issue's status option and return
  /// `{"code": <status>}` as bytes
  pub async fn transition_issue(&self, issue: &IssueOptions) -> Result<Vec<u8>> {
    let url = format!("{}/rest/api/2/issue/{}/transitions", self.base_url, issue.id_or_key);
    debug!("Transitioning Jira issue {} to {}", issue.id_or_key, issue.status);

    let payload = TransitionRequest {
      transition: TransitionId {
        id: issue.status.clone(),
      },
    };

    let response = self
      .auth
      .apply(self.client.post(&url))
      .json(&payload)
      .send()
      .await
      .context("Failed to transition Jira issue")?;

    match response.status() {
      status if status.is_success() => {
        let code = OutputCode { code: status.as_u16() };
        serde_json::to_vec(&code).context("Failed to serialize transition status code")
      }
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue.id_or_key)),
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Invalid transition. The transition may not be available for the current status."
      )),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
