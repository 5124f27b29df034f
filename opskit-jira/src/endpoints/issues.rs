//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations: creating and
//! updating issues, adding comments, and uploading attachments.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use serde_json::{Map, Value};
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{
  AddAttachmentOptions, AddCommentOptions, CommentPayload, IssueCreateOptions, IssueFields, IssueOptions, IssuePayload,
  NamedField, ProjectKey,
};

/// Build an optional named sub-object, present only for a non-empty name
fn named_field(name: &str) -> Option<NamedField> {
  (!name.is_empty()).then(|| NamedField { name: name.to_string() })
}

/// Build the `fields` object for issue creation
fn create_fields(issue: &IssueOptions, create: &IssueCreateOptions) -> IssueFields {
  IssueFields {
    project: Some(ProjectKey {
      key: create.project_key.clone(),
    }),
    issue_type: Some(NamedField {
      name: create.issue_type.clone(),
    }),
    summary: issue.summary.clone(),
    description: issue.description.clone(),
    labels: issue.labels.clone(),
    priority: named_field(&create.priority),
    assignee: named_field(&create.assignee),
    reporter: named_field(&create.reporter),
  }
}

/// Build the `fields` object for issue update.
///
/// Labels are included only when at least one label is non-empty.
fn update_fields(issue: &IssueOptions) -> IssueFields {
  let labels = if issue.labels.iter().any(|label| !label.is_empty()) {
    issue.labels.clone()
  } else {
    Vec::new()
  };

  IssueFields {
    summary: issue.summary.clone(),
    description: issue.description.clone(),
    labels,
    ..Default::default()
  }
}

/// Parse the caller-supplied custom-field overrides
fn parse_custom_fields(raw: &str) -> Result<Map<String, Value>> {
  if raw.trim().is_empty() {
    return Ok(Map::new());
  }
  serde_json::from_str(raw).context("Custom fields must be a JSON object")
}

/// Serialize an issue payload, merging custom-field overrides into the
/// `fields` map. Overrides win on key collision.
fn issue_body(payload: IssuePayload, custom_fields: &str) -> Result<Vec<u8>> {
  let mut value = serde_json::to_value(&payload).context("Failed to serialize issue payload")?;

  let overrides = parse_custom_fields(custom_fields)?;
  if !overrides.is_empty() {
    let fields = value
      .get_mut("fields")
      .and_then(Value::as_object_mut)
      .ok_or_else(|| anyhow::anyhow!("Issue payload has no fields object"))?;
    for (key, override_value) in overrides {
      fields.insert(key, override_value);
    }
  }

  serde_json::to_vec(&value).context("Failed to serialize issue payload")
}

impl JiraClient {
  /// Create an issue and return the raw response bytes
  pub async fn create_issue(&self, issue: &IssueOptions, create: &IssueCreateOptions) -> Result<Vec<u8>> {
    let url = format!("{}/rest/api/2/issue", self.base_url);
    debug!("Creating Jira issue in project {}", create.project_key);

    let payload = IssuePayload {
      fields: create_fields(issue, create),
    };
    let body = issue_body(payload, &issue.custom_fields)?;

    let response = self
      .auth
      .apply(self.client.post(&url))
      .header(CONTENT_TYPE, "application/json")
      .body(body)
      .send()
      .await
      .context("Failed to create Jira issue")?;

    match response.status() {
      status if status.is_success() => Ok(response.bytes().await.context("Failed to read Jira response")?.to_vec()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Jira rejected the issue payload: {}",
        response.text().await.unwrap_or_default()
      )),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Update an issue and return the raw response bytes
  pub async fn update_issue(&self, issue: &IssueOptions) -> Result<Vec<u8>> {
    let url = format!("{}/rest/api/2/issue/{}", self.base_url, issue.id_or_key);
    debug!("Updating Jira issue {}", issue.id_or_key);

    let payload = IssuePayload {
      fields: update_fields(issue),
    };
    let body = issue_body(payload, &issue.custom_fields)?;

    let response = self
      .auth
      .apply(self.client.put(&url))
      .header(CONTENT_TYPE, "application/json")
      .body(body)
      .send()
      .await
      .context("Failed to update Jira issue")?;

    match response.status() {
      status if status.is_success() => Ok(response.bytes().await.context("Failed to read Jira response")?.to_vec()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue.id_or_key)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Add a comment to an issue and return the raw response bytes
  pub async fn add_comment(&self, issue: &IssueOptions, comment: &AddCommentOptions) -> Result<Vec<u8>> {
    let url = format!("{}/rest/api/2/issue/{}/comment", self.base_url, issue.id_or_key);
    debug!("Adding comment to Jira issue {}", issue.id_or_key);

    let payload = CommentPayload {
      body: comment.body.clone(),
    };

    let response = self
      .auth
      .apply(self.client.post(&url))
      .json(&payload)
      .send()
      .await
      .context("Failed to add Jira comment")?;

    match response.status() {
      status if status.is_success() => Ok(response.bytes().await.context("Failed to read Jira response")?.to_vec()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue.id_or_key)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }

  /// Upload an attachment to an issue and return the raw response bytes.
  ///
  /// The attachment endpoint requires the `X-Atlassian-Token: no-check`
  /// bypass header and a multipart body with a single `file` part.
  pub async fn add_attachment(&self, issue: &IssueOptions, attachment: &AddAttachmentOptions) -> Result<Vec<u8>> {
    let url = format!("{}/rest/api/2/issue/{}/attachments", self.base_url, issue.id_or_key);
    debug!("Attaching {} to Jira issue {}", attachment.name, issue.id_or_key);

    let part = Part::bytes(attachment.file.clone()).file_name(attachment.name.clone());
    let form = Form::new().part("file", part);

    let response = self
      .auth
      .apply(self.client.post(&url))
      .header("X-Atlassian-Token", "no-check")
      .multipart(form)
      .send()
      .await
      .context("Failed to upload Jira attachment")?;

    match response.status() {
      status if status.is_success() => Ok(response.bytes().await.context("Failed to read Jira response")?.to_vec()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      StatusCode::NOT_FOUND => Err(anyhow::anyhow!("Issue {} not found", issue.id_or_key)),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}
