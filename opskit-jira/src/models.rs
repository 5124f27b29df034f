use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Connection options for the Jira client
#[derive(Clone, Debug, Default)]
pub struct JiraOptions {
  pub url: String,
  pub timeout: u64,
  pub insecure: bool,
  pub user: String,
  pub password: String,
  pub access_token: String,
}

/// Options shared by the issue operations
#[derive(Clone, Debug, Default)]
pub struct IssueOptions {
  pub id_or_key: String,
  pub summary: String,
  pub description: String,
  /// Arbitrary JSON object merged into the payload's `fields` map
  pub custom_fields: String,
  /// Transition id used by the change-transitions operation
  pub status: String,
  pub labels: Vec<String>,
}

/// Options specific to issue creation
#[derive(Clone, Debug, Default)]
pub struct IssueCreateOptions {
  pub project_key: String,
  pub issue_type: String,
  pub priority: String,
  pub assignee: String,
  pub reporter: String,
}

/// Options for adding a comment to an issue
#[derive(Clone, Debug, Default)]
pub struct AddCommentOptions {
  pub body: String,
}

/// Options for attaching a file to an issue
#[derive(Clone, Debug, Default)]
pub struct AddAttachmentOptions {
  /// Resolved file content
  pub file: Vec<u8>,
  pub name: String,
}

/// Options for the JQL issue search
#[derive(Clone, Debug, Default)]
pub struct SearchIssuesOptions {
  pub search_pattern: String,
  pub max_results: u32,
}

/// Options for the Insight asset search
#[derive(Clone, Debug, Default)]
pub struct SearchAssetsOptions {
  pub search_pattern: String,
  pub result_per_page: u32,
}

/// A `fields` sub-object carrying only a name, e.g. issue type or priority
#[derive(Debug, Serialize, PartialEq)]
pub struct NamedField {
  pub name: String,
}

/// The `project` sub-object of an issue payload
#[derive(Debug, Serialize, PartialEq)]
pub struct ProjectKey {
  pub key: String,
}

/// The `fields` object of a create or update payload.
///
/// Optional sub-objects and scalar fields are serialized only when the
/// corresponding option was non-empty.
#[derive(Debug, Default, Serialize)]
pub struct IssueFields {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub project: Option<ProjectKey>,
  #[serde(rename = "issuetype", skip_serializing_if = "Option::is_none")]
  pub issue_type: Option<NamedField>,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub summary: String,
  #[serde(skip_serializing_if = "String::is_empty")]
  pub description: String,
  #[serde(skip_serializing_if = "Vec::is_empty")]
  pub labels: Vec<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub priority: Option<NamedField>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub assignee: Option<NamedField>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub reporter: Option<NamedField>,
}

/// A create or update request body
#[derive(Debug, Serialize)]
pub struct IssuePayload {
  pub fields: IssueFields,
}

/// A comment request body
#[derive(Debug, Serialize)]
pub struct CommentPayload {
  pub body: String,
}

/// A transition request body
#[derive(Debug, Serialize)]
pub struct TransitionRequest {
  pub transition: TransitionId,
}

/// The transition id inside a transition request
#[derive(Debug, Serialize)]
pub struct TransitionId {
  pub id: String,
}

/// Status-code wrapper returned by the transition operation, which has no
/// useful response body of its own
#[derive(Debug, Serialize)]
pub struct OutputCode {
  pub code: u16,
}

/// One page of the Insight asset search response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetsPage {
  pub object_entries: Vec<Value>,
  pub object_type_attributes: Vec<Value>,
  pub page_size: u32,
}
