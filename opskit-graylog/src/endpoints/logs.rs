//! # Graylog Log Search
//!
//! Universal search against `/api/search/universal/{absolute|relative}`.
//! The time-range flavor picks the endpoint path and its parameters; the
//! response is returned unmodified for the CLI output step.

use anyhow::{Context, Result};
use reqwest::StatusCode;
use reqwest::header::ACCEPT;
use tracing::debug;

use crate::client::GraylogClient;
use crate::models::LogsOptions;

impl GraylogClient {
  /// Fetch logs matching the query and return the raw response bytes
  pub async fn logs(&self, options: &LogsOptions) -> Result<Vec<u8>> {
    let range_type = match options.range_type.as_str() {
      "absolute" => "absolute",
      "relative" => "relative",
      other => {
        return Err(anyhow::anyhow!("Unsupported Graylog range type: {other}"));
      }
    };
    let url = format!("{}/api/search/universal/{}", self.base_url, range_type);
    debug!("Fetching Graylog logs: {}", options.query);

    let limit = options.limit.to_string();
    let filter = (!options.streams.is_empty()).then(|| format!("streams:{}", options.streams));

    let mut params: Vec<(&str, &str)> = vec![("query", options.query.as_str())];
    match range_type {
      "absolute" => {
        params.push(("from", options.from.as_str()));
        params.push(("to", options.to.as_str()));
      }
      _ => {
        params.push(("range", options.range.as_str()));
      }
    }
    if !options.sort.is_empty() {
      params.push(("sort", options.sort.as_str()));
    }
    params.push(("limit", limit.as_str()));
    if let Some(filter) = &filter {
      params.push(("filter", filter.as_str()));
    }

    let response = self
      .auth
      .apply(self.client.get(&url))
      .header(ACCEPT, "application/json")
      .query(&params)
      .send()
      .await
      .context("Failed to fetch Graylog logs")?;

    match response.status() {
      status if status.is_success() => Ok(
        response
          .bytes()
          .await
          .context("Failed to read Graylog response")?
          .to_vec(),
      ),
      StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(anyhow::anyhow!(
        "Authentication failed. Please check your Graylog credentials."
      )),
      StatusCode::BAD_REQUEST => Err(anyhow::anyhow!(
        "Graylog rejected the search query: {}",
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

#[cfg(test)]
mod tests {
  use serde_json::json;
  use wiremock::matchers::{basic_auth, method, path, query_param, query_param_is_missing};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;
  use crate::models::GraylogOptions;

  fn client_for(mock_server: &MockServer) -> GraylogClient {
    GraylogClient::new(&GraylogOptions {
      url: mock_server.uri(),
      timeout: 30,
      user: "reader".to_string(),
      password: "secret".to_string(),
      ..Default::default()
    })
    .unwrap()
  }

  #[tokio::test]
  async fn test_logs_absolute_range() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/api/search/universal/absolute"))
      .and(basic_auth("reader", "secret"))
      .and(query_param("query", "source:app-1"))
      .and(query_param("from", "2024-05-01 00:00:00"))
      .and(query_param("to", "2024-05-02 00:00:00"))
      .and(query_param("sort", "timestamp:desc"))
      .and(query_param("limit", "100"))
      .and(query_param("filter", "streams:5e2f1"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "total_results": 1,
          "messages": [{"message": {"source": "app-1"}}]
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let bytes = client
      .logs(&LogsOptions {
        streams: "5e2f1".to_string(),
        query: "source:app-1".to_string(),
        range_type: "absolute".to_string(),
        from: "2024-05-01 00:00:00".to_string(),
        to: "2024-05-02 00:00:00".to_string(),
        sort: "timestamp:desc".to_string(),
        limit: 100,
        ..Default::default()
      })
      .await?;

    let response: serde_json::Value = serde_json::from_slice(&bytes)?;
    assert_eq!(response["total_results"], 1);

    Ok(())
  }

  #[tokio::test]
  async fn test_logs_relative_range() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/api/search/universal/relative"))
      .and(query_param("query", "level:ERROR"))
      .and(query_param("range", "3600"))
      .and(query_param("limit", "50"))
      .and(query_param_is_missing("from"))
      .and(query_param_is_missing("to"))
      .and(query_param_is_missing("filter"))
      .respond_with(ResponseTemplate::new(200).set_body_json(json!({
          "total_results": 0,
          "messages": []
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    client
      .logs(&LogsOptions {
        query: "level:ERROR".to_string(),
        range_type: "relative".to_string(),
        range: "3600".to_string(),
        limit: 50,
        ..Default::default()
      })
      .await?;

    Ok(())
  }

  #[tokio::test]
  async fn test_logs_unsupported_range_type() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    let result = client
      .logs(&LogsOptions {
        query: "level:ERROR".to_string(),
        range_type: "keyword".to_string(),
        ..Default::default()
      })
      .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Unsupported Graylog range type"));
  }

  #[tokio::test]
  async fn test_logs_unauthorized() {
    let mock_server = MockServer::start().await;
    let client = client_for(&mock_server);

    Mock::given(method("GET"))
      .and(path("/api/search/universal/relative"))
      .respond_with(ResponseTemplate::new(401))
      .mount(&mock_server)
      .await;

    let result = client
      .logs(&LogsOptions {
        query: "level:ERROR".to_string(),
        range_type: "relative".to_string(),
        range: "300".to_string(),
        limit: 100,
        ..Default::default()
      })
      .await;

    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Authentication failed"));
  }
}
