//! # Command Line Interface
//!
//! Defines the CLI structure and command handlers for the opskit tool: one
//! command group per vendor, with nested action subcommands that each map
//! to a single REST endpoint.

mod completion;
mod graylog;
mod jira;

use anyhow::Result;
use clap::builder::Styles;
use clap::builder::styling::AnsiColor;
use clap::{ArgAction, Parser, Subcommand};

/// Top-level CLI command for the opskit tool
#[derive(Parser)]
#[command(name = "opskit")]
#[command(author = env!("CARGO_PKG_AUTHORS"))]
#[command(about = "A command-line tool for SaaS ops endpoints")]
#[command(
  long_about = "Opskit exposes operations against external SaaS platforms as subcommands.\n\n\
        Each subcommand maps to one REST endpoint: options become the request,\n\
        the response is printed raw or reshaped by an output query. Every option\n\
        can also be set through a same-named environment variable; flags take\n\
        precedence when explicitly passed."
)]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(propagate_version = true)]
#[command(subcommand_required(true))]
#[command(disable_help_subcommand = true)]
#[command(max_term_width = 120)]
#[command(styles = Styles::styled()
    .header(AnsiColor::BrightGreen.on_default().bold().underline())
    .usage(AnsiColor::Green.on_default().bold())
    .literal(AnsiColor::BrightGreen.on_default().bold())
    .placeholder(AnsiColor::BrightWhite.on_default().italic())
    .valid(AnsiColor::Green.on_default())
    .invalid(AnsiColor::BrightRed.on_default().bold())
)]
pub struct Cli {
  /// Sets the level of verbosity (can be used multiple times)
  #[arg(
    short = 'v',
    long = "verbose",
    action = ArgAction::Count,
    long_help = "Sets the level of verbosity for tracing and logging output.\n\n\
             -v: Show info level messages\n\
             -vv: Show debug level messages\n\
             -vvv: Show trace level messages"
  )]
  pub verbose: u8,

  /// Subcommands
  #[command(subcommand)]
  pub command: Commands,
}

/// Subcommands for the opskit tool
#[derive(Subcommand)]
pub enum Commands {
  /// Jira tools
  #[command(long_about = "Interact with Jira issues and Insight assets.\n\n\
            This command group provides functionality for creating, updating,\n\
            commenting on, and transitioning issues, plus JQL issue search and\n\
            paginated AQL asset search.")]
  Jira(jira::JiraArgs),

  /// Graylog tools
  #[command(long_about = "Interact with the Graylog log-management system.\n\n\
            This command group provides the universal log search with stream\n\
            filtering and absolute or relative time ranges.")]
  Graylog(graylog::GraylogArgs),

  /// Generate shell completions
  #[command(long_about = "Generates shell completion scripts for opskit commands.\n\n\
            This command generates completion scripts that provide tab completion\n\
            for opskit commands and options in your shell. Supported shells include\n\
            bash, zsh, and fish.")]
  Completion(completion::CompletionArgs),
}

/// Dispatch a parsed CLI invocation to its command handler
pub fn handle_cli(cli: Cli) -> Result<()> {
  match cli.command {
    Commands::Jira(args) => jira::execute(args),
    Commands::Graylog(args) => graylog::execute(args),
    Commands::Completion(args) => completion::execute(args),
  }
}
