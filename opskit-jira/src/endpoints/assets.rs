//! # Jira Insight Asset Search
//!
//! AQL object search against the Insight endpoint. The endpoint answers
//! page-wise; entries are collected across all pages into a single composed
//! object before the bytes are handed back.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use tracing::debug;

use crate::client::JiraClient;
use crate::models::{AssetsPage, SearchAssetsOptions};

/// Decode one page of the Insight response into the known envelope.
///
/// A response missing the envelope fields is vendor schema drift and
/// surfaces as a decode error rather than a panic.
fn decode_assets_page(bytes: &[u8]) -> Result<AssetsPage> {
  serde_json::from_slice(bytes).context("Unexpected Insight response shape")
}

impl JiraClient {
  /// Search assets by AQL expression, following pagination, and return a
  /// composed `{"objects": [...], "attributes": [...]}` document as bytes.
  ///
  /// Entries concatenate across pages in page order. Attributes are
  /// type-level metadata repeated on every page, so page 1's copy is kept.
  pub async fn search_assets(&self, options: &SearchAssetsOptions) -> Result<Vec<u8>> {
    debug!("Searching Jira assets: {}", options.search_pattern);

    let per_page = options.result_per_page.to_string();
    let first = self.assets_page(&options.search_pattern, &per_page, None).await?;
    let page = decode_assets_page(&first)?;

    let mut objects = page.object_entries;
    let attributes = page.object_type_attributes;

    if page.page_size > 1 {
      for page_number in 2..=page.page_size {
        let bytes = self
          .assets_page(&options.search_pattern, &per_page, Some(page_number))
          .await?;
        let next = decode_assets_page(&bytes)?;
        objects.extend(next.object_entries);
      }
    }

    let merged = serde_json::json!({
      "objects": objects,
      "attributes": attributes,
    });
    serde_json::to_vec(&merged).context("Failed to serialize merged asset pages")
  }

  /// Fetch a single page of the Insight object search
  async fn assets_page(&self, pattern: &str, per_page: &str, page: Option<u32>) -> Result<Vec<u8>> {
    let url = format!("{}/rest/insight/1.0/aql/objects", self.base_url);

    let mut request = self
      .auth
      .apply(self.client.get(&url))
      .query(&[("qlQuery", pattern), ("resultPerPage", per_page)]);
    if let Some(page) = page {
      request = request.query(&[("page", page.to_string().as_str())]);
    }

    let response = request.send().await.context("Failed to search Jira assets")?;

    match response.status() {
      status if status.is_success() => Ok(response.bytes().await.context("Failed to read Jira response")?.to_vec()),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Jira credentials."
      )),
      status => Err(anyhow::anyhow!(
        "Unexpected error: HTTP {} - {}",
        status,
        response.text().await.unwrap_or_default()
      )),
    }
  }
}

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{method, path, query_param, query_param_is_missing};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::models::JiraOptions;

  fn client_for(mock_server: &MockServer) -> JiraClient {
    JiraClient::new(&JiraOptions {
      url: mock_server.uri(),
      timeout: 30,
      user: "test_user".to_string(),
      password: "test_token".to_string(),
      ..Default::default()
    })
    .unwrap()
  }

  #[tokio::test]
  async fn test_search_assets_single_page() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/insight/1.0/aql/objects"))
      .and(query_param("qlQuery", "objectType = Host"))
      .and(query_param("resultPerPage", "50"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "objectEntries": [{"id": 1}, {"id": 2}],
          "objectTypeAttributes": [{"name": "Host"}],
          "pageSize": 1
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let bytes = client
      .search_assets(&SearchAssetsOptions {
        search_pattern: "objectType = Host".to_string(),
        result_per_page: 50,
      })
      .await?;

    let merged: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(merged["objects"], json!([{"id": 1}, {"id": 2}]));
    assert_eq!(merged["attributes"], json!([{"name": "Host"}]));

    Ok(())
  }

  #[tokio::test]
  async fn test_search_assets_follows_pagination() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    // Page 1 declares three pages; exactly two more GETs must follow
    Mock::given(method("GET"))
      .and(path("/rest/insight/1.0/aql/objects"))
      .and(query_param("qlQuery", "objectType = Host"))
      .and(query_param_is_missing("page"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "objectEntries": [{"id": 1}, {"id": 2}],
          "objectTypeAttributes": [{"name": "Host"}],
          "pageSize": 3
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/insight/1.0/aql/objects"))
      .and(query_param("page", "2"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "objectEntries": [{"id": 3}, {"id": 4}],
          "objectTypeAttributes": [{"name": "Ignored"}],
          "pageSize": 3
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/insight/1.0/aql/objects"))
      .and(query_param("page", "3"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "objectEntries": [{"id": 5}],
          "objectTypeAttributes": [{"name": "Ignored"}],
          "pageSize": 3
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let bytes = client
      .search_assets(&SearchAssetsOptions {
        search_pattern: "objectType = Host".to_string(),
        result_per_page: 2,
      })
      .await?;

    let merged: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(
      merged["objects"],
      json!([{"id": 1}, {"id": 2}, {"id": 3}, {"id": 4}, {"id": 5}])
    );
    assert_eq!(merged["attributes"], json!([{"name": "Host"}]));

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 3);

    Ok(())
  }

  #[tokio::test]
  async fn test_search_assets_unexpected_shape() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/insight/1.0/aql/objects"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "entries": [],
          "total": 0
      })))
      .mount(&mock_server)
      .await;

    let result = client
      .search_assets(&SearchAssetsOptions {
        search_pattern: "objectType = Host".to_string(),
        result_per_page: 50,
      })
      .await;

    assert!(result.is_err());
    assert!(
      result
        .unwrap_err()
        .to_string()
        .contains("Unexpected Insight response shape")
    );
  }
}
