use anyhow::{Context, Result};
use opskit_core::{Auth, HttpOptions, build_client};
use reqwest::Client;
use url::Url;

use crate::models::GraylogOptions;

/// Represents a Graylog API client
pub struct GraylogClient {
  pub(crate) client: Client,
  pub(crate) base_url: String,
  pub(crate) auth: Auth,
}

impl GraylogClient {
  /// Create a new Graylog client from connection options
  pub fn new(options: &GraylogOptions) -> Result<Self> {
    let base = Url::parse(&options.url).with_context(|| format!("Invalid Graylog URL: {}", options.url))?;
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

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_graylog_client_creation() -> Result<()> {
    let client = GraylogClient::new(&GraylogOptions {
      url: "https://graylog.example.com/".to_string(),
      timeout: 30,
      user: "reader".to_string(),
      password: "secret".to_string(),
      ..Default::default()
    })?;

    assert_eq!(client.base_url, "https://graylog.example.com");
    assert_eq!(
      client.auth,
      Auth::Basic {
        username: "reader".to_string(),
        password: "secret".to_string(),
      }
    );

    Ok(())
  }

  #[test]
  fn test_graylog_client_rejects_invalid_url() {
    let result = GraylogClient::new(&GraylogOptions {
      url: "graylog.example.com".to_string(),
      timeout: 30,
      ..Default::default()
    });
    assert!(result.is_err());
  }
}
