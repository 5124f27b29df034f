//! End-to-end tests for the opskit binary surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_vendor_commands() {
  let mut cmd = Command::cargo_bin("opskit").unwrap();
  cmd
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("jira"))
    .stdout(predicate::str::contains("graylog"));
}

#[test]
fn test_requires_subcommand() {
  let mut cmd = Command::cargo_bin("opskit").unwrap();
  cmd.assert().failure();
}

#[test]
fn test_jira_setup_error_is_fatal() {
  // Without a configured URL, client construction fails before any request
  let mut cmd = Command::cargo_bin("opskit").unwrap();
  cmd
    .env_remove("JIRA_URL")
    .args(["jira", "issue", "search", "--jira-issue-search-pattern", "project=X"])
    .assert()
    .failure()
    .stderr(predicate::str::contains("Invalid Jira URL"));
}

#[test]
fn test_completion_generates_script() {
  let mut cmd = Command::cargo_bin("opskit").unwrap();
  cmd
    .args(["completion", "bash"])
    .assert()
    .success()
    .stdout(predicate::str::contains("opskit"));
}
