//! # Graylog Commands
//!
//! The Graylog command group: the universal log search with stream
//! filtering and absolute or relative time ranges.

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use opskit_core::content;
use opskit_core::output::{OutputOptions, print_error, write_output};
use opskit_graylog::{GraylogClient, GraylogOptions, LogsOptions};
use tokio::runtime::Runtime;
use tracing::debug;

/// Time-range flavor of the universal search
#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum RangeType {
  /// Explicit from/to timestamps
  Absolute,
  /// Seconds back from now
  Relative,
}

impl RangeType {
  fn as_str(self) -> &'static str {
    match self {
      RangeType::Absolute => "absolute",
      RangeType::Relative => "relative",
    }
  }
}

/// Arguments for the Graylog command group
#[derive(Args)]
pub struct GraylogArgs {
  #[command(flatten)]
  pub connection: ConnectionArgs,

  #[command(subcommand)]
  pub subcommand: GraylogSubcommands,
}

/// Connection, search, and output options shared by the Graylog actions
#[derive(Args, Clone)]
pub struct ConnectionArgs {
  /// Graylog base URL
  #[arg(long = "graylog-url", env = "GRAYLOG_URL", default_value = "", global = true)]
  pub url: String,

  /// Request timeout in seconds
  #[arg(long = "graylog-timeout", env = "GRAYLOG_TIMEOUT", default_value_t = 30, global = true)]
  pub timeout: u64,

  /// Skip TLS certificate verification
  #[arg(long = "graylog-insecure", env = "GRAYLOG_INSECURE", global = true)]
  pub insecure: bool,

  /// Graylog user for basic auth
  #[arg(long = "graylog-user", env = "GRAYLOG_USER", default_value = "", global = true)]
  pub user: String,

  /// Graylog password for basic auth
  #[arg(long = "graylog-password", env = "GRAYLOG_PASSWORD", default_value = "", global = true)]
  pub password: String,

  /// Graylog access token for bearer auth
  #[arg(
    long = "graylog-access-token",
    env = "GRAYLOG_ACCESS_TOKEN",
    default_value = "",
    global = true
  )]
  pub access_token: String,

  /// Stream id restricting the search
  #[arg(long = "graylog-streams", env = "GRAYLOG_STREAMS", default_value = "", global = true)]
  pub streams: String,

  /// Search query: inline text, file path, or URL
  #[arg(long = "graylog-query", env = "GRAYLOG_QUERY", default_value = "", global = true)]
  pub query: String,

  /// Time-range flavor
  #[arg(
    long = "graylog-range-type",
    env = "GRAYLOG_RANGE_TYPE",
    value_enum,
    ignore_case = true,
    default_value_t = RangeType::Absolute,
    global = true
  )]
  pub range_type: RangeType,

  /// Start of an absolute range
  #[arg(long = "graylog-from", env = "GRAYLOG_FROM", default_value = "", global = true)]
  pub from: String,

  /// End of an absolute range
  #[arg(long = "graylog-to", env = "GRAYLOG_TO", default_value = "", global = true)]
  pub to: String,

  /// Relative range in seconds back from now
  #[arg(long = "graylog-range", env = "GRAYLOG_RANGE", default_value = "", global = true)]
  pub range: String,

  /// Sort order, e.g. timestamp:desc
  #[arg(long = "graylog-sort", env = "GRAYLOG_SORT", default_value = "", global = true)]
  pub sort: String,

  /// Maximum number of messages
  #[arg(long = "graylog-limit", env = "GRAYLOG_LIMIT", default_value_t = 100, global = true)]
  pub limit: u32,

  /// Response output file; stdout when unset
  #[arg(long = "graylog-output", env = "GRAYLOG_OUTPUT", default_value = "", global = true)]
  pub output: String,

  /// JSON Pointer applied to the response before writing
  #[arg(
    long = "graylog-output-query",
    env = "GRAYLOG_OUTPUT_QUERY",
    default_value = "",
    global = true
  )]
  pub output_query: String,
}

impl ConnectionArgs {
  fn to_options(&self) -> GraylogOptions {
    GraylogOptions {
      url: self.url.clone(),
      timeout: self.timeout,
      insecure: self.insecure,
      user: self.user.clone(),
      password: self.password.clone(),
      access_token: self.access_token.clone(),
    }
  }

  fn to_output(&self) -> OutputOptions {
    OutputOptions {
      output: self.output.clone(),
      query: self.output_query.clone(),
    }
  }
}

/// Subcommands for the Graylog command group
#[derive(Subcommand)]
pub enum GraylogSubcommands {
  /// Getting logs
  Logs,
}

/// Execute a Graylog subcommand
pub fn execute(args: GraylogArgs) -> Result<()> {
  let rt = Runtime::new().context("Failed to create async runtime")?;

  rt.block_on(async {
    match args.subcommand {
      GraylogSubcommands::Logs => handle_logs(&args.connection).await,
    }
  })
}

async fn handle_logs(connection: &ConnectionArgs) -> Result<()> {
  debug!("Graylog getting logs...");

  let query = content::resolve_string(&connection.query)
    .await
    .context("Failed to resolve Graylog query")?;

  let client = GraylogClient::new(&connection.to_options())?;
  let logs_options = LogsOptions {
    streams: connection.streams.clone(),
    query,
    range_type: connection.range_type.as_str().to_string(),
    from: connection.from.clone(),
    to: connection.to.clone(),
    range: connection.range.clone(),
    sort: connection.sort.clone(),
    limit: connection.limit,
  };

  match client.logs(&logs_options).await {
    Ok(bytes) => write_output(&connection.to_output(), &bytes),
    Err(e) => {
      print_error(&format!("Failed to fetch logs: {e}"));
      Ok(())
    }
  }
}

#[cfg(test)]
mod tests {
  use clap::Parser;
  use opskit_test_utils::EnvVarGuard;

  use super::*;
  use crate::cli::{Cli, Commands};

  fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).expect("CLI arguments should parse")
  }

  #[test]
  fn test_graylog_range_type_default_and_env() {
    // Both cases share the guard so parallel tests don't race on the var
    let guard = EnvVarGuard::new("GRAYLOG_RANGE_TYPE");
    guard.remove();

    let cli = parse(&["opskit", "graylog", "logs"]);
    let Commands::Graylog(args) = cli.command else {
      panic!("expected graylog command");
    };
    assert!(matches!(args.connection.range_type, RangeType::Absolute));
    assert_eq!(args.connection.limit, 100);
    assert_eq!(args.connection.timeout, 30);

    guard.set("relative");
    let cli = parse(&["opskit", "graylog", "logs"]);
    let Commands::Graylog(args) = cli.command else {
      panic!("expected graylog command");
    };
    assert!(matches!(args.connection.range_type, RangeType::Relative));
  }

  #[test]
  fn test_graylog_rejects_unknown_range_type() {
    let result = Cli::try_parse_from(["opskit", "graylog", "--graylog-range-type", "keyword", "logs"]);
    assert!(result.is_err());
  }

  #[test]
  fn test_range_type_as_str() {
    assert_eq!(RangeType::Absolute.as_str(), "absolute");
    assert_eq!(RangeType::Relative.as_str(), "relative");
  }
}
