use anyhow::{Context, Result};
use opskit_core::{Auth, HttpOptions, build_client};
use reqwest::Client;
use url::Url;

use crate::models::JiraOptions;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: Auth,
}

impl JiraClient {
  /// Create a new Jira client from connection options
  pub fn new(options: &JiraOptions) -> Result<Self> {
    let base = Url::parse(&options.url).with_context(|| format!("Invalid Jira URL: {}", options.url))?;
    let client = build_client(&HttpOptions {
      timeout_secs: options.timeout,
      insecure: options.insecure,
    })?;

    Ok(Self {
      client,
      base_url: base.as_str().trim_end_matches('/').to_string(),
      auth: Auth::from_options(&options.user, &options.password, &options.access_token),
    })
  }
}
