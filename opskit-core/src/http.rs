//! # HTTP Client Construction
//!
//! Builds the `reqwest` client used by the vendor clients, applying the
//! configured request timeout and the optional certificate-check bypass.

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::Client;

/// Transport options shared by every vendor client
#[derive(Clone, Debug)]
pub struct HttpOptions {
  /// Request timeout in seconds, covering connect and read
  pub timeout_secs: u64,
  /// Skip TLS certificate verification
  pub insecure: bool,
}

/// Build an HTTP client from transport options
pub fn build_client(options: &HttpOptions) -> Result<Client> {
  let mut builder = Client::builder().timeout(Duration::from_secs(options.timeout_secs));
  if options.insecure {
    builder = builder.danger_accept_invalid_certs(true);
  }
  builder.build().context("Failed to build HTTP client")
}
