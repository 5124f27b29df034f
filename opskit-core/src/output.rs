//! # Output Handling
//!
//! Provides formatted terminal messages with colors and emojis, plus the
//! response output step shared by every subcommand: optional JSON Pointer
//! filtering and writing to stdout or a configured destination file.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;
use serde_json::Value;

/// Per-vendor output options
#[derive(Clone, Debug, Default)]
pub struct OutputOptions {
  /// Destination file path; empty means stdout
  pub output: String,
  /// JSON Pointer (RFC 6901) selecting the subtree to emit; empty means the
  /// raw response
  pub query: String,
}

/// Pass response bytes through the optional output query and write them to
/// the configured destination.
///
/// The query language itself is not interpreted here; evaluation is
/// delegated to `serde_json`'s pointer support. A pointer that matches
/// nothing is an error.
pub fn write_output(options: &OutputOptions, bytes: &[u8]) -> Result<()> {
  let rendered = if options.query.is_empty() {
    bytes.to_vec()
  } else {
    let value: Value = serde_json::from_slice(bytes).context("Response is not valid JSON")?;
    let selected = value
      .pointer(&options.query)
      .ok_or_else(|| anyhow::anyhow!("Output query {} matched nothing in the response", options.query))?;
    let mut rendered = serde_json::to_vec_pretty(selected).context("Failed to serialize filtered response")?;
    rendered.push(b'\n');
    rendered
  };

  if options.output.is_empty() {
    io::stdout()
      .write_all(&rendered)
      .context("Failed to write response to stdout")?;
    if !rendered.ends_with(b"\n") {
      println!();
    }
  } else {
    fs::write(&options.output, &rendered).with_context(|| format!("Failed to write response to {}", options.output))?;
  }
  Ok(())
}

/// Helper function to safely get an emoji or fallback to a default character
pub fn get_emoji_or_default(name: &str, default: &str) -> String {
  match emojis::get_by_shortcode(name) {
    Some(emoji) => emoji.to_string(),
    None => default.to_string(),
  }
}

/// Print a success message
pub fn print_success(message: &str) {
  let check = get_emoji_or_default("check_mark", "✓");
  println!("{} {}", check.green().bold(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
  let cross = get_emoji_or_default("cross_mark", "✗");
  eprintln!("{} {}", cross.red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
  let warning = get_emoji_or_default("warning", "⚠");
  println!("{} {}", warning.yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
  let info = get_emoji_or_default("information", "ℹ");
  println!("{} {}", info.blue().bold(), message);
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_write_output_to_file() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let destination = dir.path().join("response.json");
    let options = OutputOptions {
      output: destination.to_string_lossy().to_string(),
      query: String::new(),
    };

    write_output(&options, br#"{"key":"OPS-1"}"#)?;

    let written = fs::read(&destination)?;
    assert_eq!(written, br#"{"key":"OPS-1"}"#);
    Ok(())
  }

  #[test]
  fn test_write_output_with_query() -> anyhow::Result<()> {
    let dir = TempDir::new()?;
    let destination = dir.path().join("filtered.json");
    let options = OutputOptions {
      output: destination.to_string_lossy().to_string(),
      query: "/fields/summary".to_string(),
    };

    write_output(&options, br#"{"key":"OPS-1","fields":{"summary":"Broken pager"}}"#)?;

    let written = String::from_utf8(fs::read(&destination)?)?;
    assert_eq!(written.trim(), r#""Broken pager""#);
    Ok(())
  }

  #[test]
  fn test_write_output_query_matches_nothing() {
    let options = OutputOptions {
      output: String::new(),
      query: "/does/not/exist".to_string(),
    };

    let result = write_output(&options, br#"{"key":"OPS-1"}"#);
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("matched nothing"));
  }

  #[test]
  fn test_write_output_query_on_invalid_json() {
    let options = OutputOptions {
      output: String::new(),
      query: "/key".to_string(),
    };

    let result = write_output(&options, b"not json");
    assert!(result.is_err());
  }
}
