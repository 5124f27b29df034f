//! # Completion Command
//!
//! Generates shell completion scripts for bash, zsh, and fish.

use std::io;

use anyhow::Result;
use clap::{Args, CommandFactory};
use clap_complete::{Shell, generate};
use opskit_core::print_error;

use crate::cli::Cli;

/// Command for generating shell completions
#[derive(Args)]
pub struct CompletionArgs {
  /// Shell to generate completions for
  #[arg(required = true, value_parser = ["bash", "zsh", "fish"])]
  pub shell: String,
}

/// Execute the completion command
pub fn execute(args: CompletionArgs) -> Result<()> {
  let shell = parse_shell(&args.shell)?;
  let mut cmd = Cli::command();
  let app_name = cmd.get_name().to_string();

  generate(shell, &mut cmd, app_name, &mut io::stdout());

  Ok(())
}

/// Parse a shell string into a Shell enum
fn parse_shell(shell_str: &str) -> Result<Shell> {
  match shell_str.to_lowercase().as_str() {
    "bash" => Ok(Shell::Bash),
    "zsh" => Ok(Shell::Zsh),
    "fish" => Ok(Shell::Fish),
    _ => {
      print_error(&format!("Unsupported shell: {shell_str}"));
      println!("Supported shells: bash, zsh, fish");
      Err(anyhow::anyhow!("Unsupported shell: {}", shell_str))
    }
  }
}
