//! # Content Resolution
//!
//! Option values that name a file path or an http(s) URL are transparently
//! replaced with the bytes they point to before transmission. Anything else
//! is passed through as literal content.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

/// Resolve an option value to its byte content.
///
/// A value naming an existing file resolves to the file's bytes, a value
/// starting with `http://` or `https://` resolves to the body of a GET
/// against it, and any other value resolves to its own bytes. An empty value
/// resolves to empty content.
pub async fn resolve(value: &str) -> Result<Vec<u8>> {
  if value.is_empty() {
    return Ok(Vec::new());
  }

  if Path::new(value).is_file() {
    debug!("Resolving content from file: {value}");
    return fs::read(value).with_context(|| format!("Failed to read content file {value}"));
  }

  if value.starts_with("http://") || value.starts_with("https://") {
    debug!("Resolving content from URL: {value}");
    let response = reqwest::get(value)
      .await
      .with_context(|| format!("Failed to fetch content from {value}"))?;
    if !response.status().is_success() {
      return Err(anyhow::anyhow!(
        "Failed to fetch content from {value}: HTTP {}",
        response.status()
      ));
    }
    let bytes = response
      .bytes()
      .await
      .with_context(|| format!("Failed to read content body from {value}"))?;
    return Ok(bytes.to_vec());
  }

  Ok(value.as_bytes().to_vec())
}

/// Resolve an option value to UTF-8 text
pub async fn resolve_string(value: &str) -> Result<String> {
  let bytes = resolve(value).await?;
  String::from_utf8(bytes).context("Resolved content is not valid UTF-8")
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use tempfile::NamedTempFile;
  use wiremock::matchers::{method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use super::*;

  #[tokio::test]
  async fn test_resolve_literal() -> anyhow::Result<()> {
    let content = resolve("project = OPS").await?;
    assert_eq!(content, b"project = OPS");
    Ok(())
  }

  #[tokio::test]
  async fn test_resolve_empty() -> anyhow::Result<()> {
    let content = resolve("").await?;
    assert!(content.is_empty());
    Ok(())
  }

  #[tokio::test]
  async fn test_resolve_file() -> anyhow::Result<()> {
    let mut file = NamedTempFile::new()?;
    file.write_all(b"description from a file")?;

    let value = file.path().to_string_lossy().to_string();
    let content = resolve(&value).await?;
    assert_eq!(content, b"description from a file");
    Ok(())
  }

  #[tokio::test]
  async fn test_resolve_url() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/pattern.jql"))
      .respond_with(ResponseTemplate::new(200).set_body_string("status = Open"))
      .mount(&mock_server)
      .await;

    let content = resolve(&format!("{}/pattern.jql", mock_server.uri())).await?;
    assert_eq!(content, b"status = Open");
    Ok(())
  }

  #[tokio::test]
  async fn test_resolve_url_failure() {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
      .and(path("/missing"))
      .respond_with(ResponseTemplate::new(404))
      .mount(&mock_server)
      .await;

    let result = resolve(&format!("{}/missing", mock_server.uri())).await;
    assert!(result.is_err());
  }

  #[tokio::test]
  async fn test_resolve_string() -> anyhow::Result<()> {
    let text = resolve_string("inline body").await?;
    assert_eq!(text, "inline body");
    Ok(())
  }
}
