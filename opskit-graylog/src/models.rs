/// Connection options for the Graylog client
#[derive(Clone, Debug, Default)]
pub struct GraylogOptions {
  pub url: String,
  pub timeout: u64,
  pub insecure: bool,
  pub user: String,
  pub password: String,
  pub access_token: String,
}

/// Options for the universal log search
#[derive(Clone, Debug, Default)]
pub struct LogsOptions {
  /// Stream id restricting the search; empty searches all streams
  pub streams: String,
  /// Search query, already content-resolved
  pub query: String,
  /// `absolute` or `relative`
  pub range_type: String,
  /// Start of an absolute range
  pub from: String,
  /// End of an absolute range
  pub to: String,
  /// Relative range in seconds back from now
  pub range: String,
  pub sort: String,
  pub limit: u32,
}
