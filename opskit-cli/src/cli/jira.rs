//! # Jira Commands
//!
//! The Jira command group: issue creation, update, comments, attachments,
//! transitions, JQL issue search, and paginated AQL asset search. Each
//! action resolves its file/URL-valued options, invokes one client method,
//! and passes the response through the shared output step.

use std::path::Path;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};
use opskit_core::content;
use opskit_core::output::{OutputOptions, print_error, write_output};
use opskit_jira::{
  AddAttachmentOptions, AddCommentOptions, IssueCreateOptions, IssueOptions, JiraClient, JiraOptions,
  SearchAssetsOptions, SearchIssuesOptions,
};
use tokio::runtime::Runtime;
use tracing::debug;

/// Arguments for the Jira command group
#[derive(Args)]
pub struct JiraArgs {
  #[command(flatten)]
  pub connection: ConnectionArgs,

  #[command(subcommand)]
  pub subcommand: JiraSubcommands,
}

/// Connection and output options shared by every Jira action
#[derive(Args, Clone)]
pub struct ConnectionArgs {
  /// Jira base URL
  #[arg(long = "jira-url", env = "JIRA_URL", default_value = "", global = true)]
  pub url: String,

  /// Request timeout in seconds
  #[arg(long = "jira-timeout", env = "JIRA_TIMEOUT", default_value_t = 30, global = true)]
  pub timeout: u64,

  /// Skip TLS certificate verification
  #[arg(long = "jira-insecure", env = "JIRA_INSECURE", global = true)]
  pub insecure: bool,

  /// Jira user for basic auth
  #[arg(long = "jira-user", env = "JIRA_USER", default_value = "", global = true)]
  pub user: String,

  /// Jira password for basic auth
  #[arg(long = "jira-password", env = "JIRA_PASSWORD", default_value = "", global = true)]
  pub password: String,

  /// Jira personal access token for bearer auth
  #[arg(long = "jira-access-token", env = "JIRA_ACCESS_TOKEN", default_value = "", global = true)]
  pub access_token: String,

  /// Response output file; stdout when unset
  #[arg(long = "jira-output", env = "JIRA_OUTPUT", default_value = "", global = true)]
  pub output: String,

  /// JSON Pointer applied to the response before writing
  #[arg(long = "jira-output-query", env = "JIRA_OUTPUT_QUERY", default_value = "", global = true)]
  pub output_query: String,
}

impl ConnectionArgs {
  fn to_options(&self) -> JiraOptions {
    JiraOptions {
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

/// Subcommands for the Jira command group
#[derive(Subcommand)]
pub enum JiraSubcommands {
  /// Issue methods
  Issue(IssueArgs),

  /// Assets methods
  Assets(AssetsArgs),
}

/// Arguments for the issue subcommand group
#[derive(Args)]
pub struct IssueArgs {
  #[command(flatten)]
  pub common: IssueCommonArgs,

  #[command(subcommand)]
  pub action: IssueAction,
}

/// Options shared by the issue actions
#[derive(Args, Clone)]
pub struct IssueCommonArgs {
  /// Issue id or key
  #[arg(long = "jira-issue-id-or-key", env = "JIRA_ISSUE_ID_OR_KEY", default_value = "", global = true)]
  pub id_or_key: String,

  /// Issue summary
  #[arg(long = "jira-issue-summary", env = "JIRA_ISSUE_SUMMARY", default_value = "", global = true)]
  pub summary: String,

  /// Issue description: inline text, file path, or URL
  #[arg(
    long = "jira-issue-description",
    env = "JIRA_ISSUE_DESCRIPTION",
    default_value = "",
    global = true
  )]
  pub description: String,

  /// Custom-field overrides as a JSON object: inline text, file path, or URL
  #[arg(
    long = "jira-issue-custom-fields",
    env = "JIRA_ISSUE_CUSTOM_FIELDS",
    default_value = "",
    global = true
  )]
  pub custom_fields: String,

  /// Issue labels
  #[arg(
    long = "jira-issue-labels",
    env = "JIRA_ISSUE_LABELS",
    value_delimiter = ',',
    global = true
  )]
  pub labels: Vec<String>,
}

/// Actions on issues
#[derive(Subcommand)]
pub enum IssueAction {
  /// Create issue
  Create(IssueCreateArgs),

  /// Issue add comment
  AddComment(AddCommentArgs),

  /// Issue add attachment
  AddAttachment(AddAttachmentArgs),

  /// Issue update
  Update,

  /// Transitions change
  ChangeTransitions(ChangeTransitionsArgs),

  /// Search issue
  Search(IssueSearchArgs),
}

/// Options specific to issue creation
#[derive(Args, Clone)]
pub struct IssueCreateArgs {
  /// Project key for the new issue
  #[arg(long = "jira-issue-project-key", env = "JIRA_ISSUE_PROJECT_KEY", default_value = "")]
  pub project_key: String,

  /// Issue type name
  #[arg(long = "jira-issue-type", env = "JIRA_ISSUE_TYPE", default_value = "")]
  pub issue_type: String,

  /// Priority name
  #[arg(long = "jira-issue-priority", env = "JIRA_ISSUE_PRIORITY", default_value = "")]
  pub priority: String,

  /// Assignee name
  #[arg(long = "jira-issue-assignee", env = "JIRA_ISSUE_ASSIGNEE", default_value = "")]
  pub assignee: String,

  /// Reporter name
  #[arg(long = "jira-issue-reporter", env = "JIRA_ISSUE_REPORTER", default_value = "")]
  pub reporter: String,
}

/// Options for adding a comment
#[derive(Args, Clone)]
pub struct AddCommentArgs {
  /// Comment body: inline text, file path, or URL
  #[arg(long = "jira-issue-comment-body", env = "JIRA_ISSUE_COMMENT_BODY", default_value = "")]
  pub body: String,
}

/// Options for uploading an attachment
#[derive(Args, Clone)]
pub struct AddAttachmentArgs {
  /// Attachment content: file path, URL, or inline text
  #[arg(
    long = "jira-issue-attachment-file",
    env = "JIRA_ISSUE_ATTACHMENT_FILE",
    default_value = ""
  )]
  pub file: String,

  /// Attachment file name; defaults to the file's base name
  #[arg(
    long = "jira-issue-attachment-name",
    env = "JIRA_ISSUE_ATTACHMENT_NAME",
    default_value = ""
  )]
  pub name: String,
}

/// Options for the transitions change
#[derive(Args, Clone)]
pub struct ChangeTransitionsArgs {
  /// Transition id to apply: inline text, file path, or URL
  #[arg(long = "jira-issue-status", env = "JIRA_ISSUE_STATUS", default_value = "")]
  pub status: String,
}

/// Options for the JQL issue search
#[derive(Args, Clone)]
pub struct IssueSearchArgs {
  /// JQL search pattern: inline text, file path, or URL
  #[arg(
    long = "jira-issue-search-pattern",
    env = "JIRA_ISSUE_SEARCH_PATTERN",
    default_value = ""
  )]
  pub pattern: String,

  /// Maximum number of results
  #[arg(
    long = "jira-issue-search-max-results",
    env = "JIRA_ISSUE_SEARCH_MAX_RESULTS",
    default_value_t = 50
  )]
  pub max_results: u32,
}

/// Arguments for the assets subcommand group
#[derive(Args)]
pub struct AssetsArgs {
  #[command(flatten)]
  pub search: AssetsSearchArgs,

  #[command(subcommand)]
  pub action: AssetsAction,
}

/// Options for the AQL asset search
#[derive(Args, Clone)]
pub struct AssetsSearchArgs {
  /// AQL search pattern: inline text, file path, or URL
  #[arg(
    long = "jira-assets-search-pattern",
    env = "JIRA_ASSETS_SEARCH_PATTERN",
    default_value = "",
    global = true
  )]
  pub pattern: String,

  /// Results per page
  #[arg(
    long = "jira-assets-search-results-per-page",
    env = "JIRA_ASSETS_SEARCH_RESULT_PER_PAGE",
    default_value_t = 50,
    global = true
  )]
  pub results_per_page: u32,
}

/// Actions on assets
#[derive(Subcommand)]
pub enum AssetsAction {
  /// Search assets
  Search,
}

/// Execute a Jira subcommand
pub fn execute(args: JiraArgs) -> Result<()> {
  let rt = Runtime::new().context("Failed to create async runtime")?;

  rt.block_on(async {
    let options = args.connection.to_options();
    let output = args.connection.to_output();

    match args.subcommand {
      JiraSubcommands::Issue(issue_args) => match issue_args.action {
        IssueAction::Create(create) => handle_issue_create(&options, &output, &issue_args.common, &create).await,
        IssueAction::AddComment(comment) => handle_add_comment(&options, &output, &issue_args.common, &comment).await,
        IssueAction::AddAttachment(attachment) => {
          handle_add_attachment(&options, &output, &issue_args.common, &attachment).await
        }
        IssueAction::Update => handle_issue_update(&options, &output, &issue_args.common).await,
        IssueAction::ChangeTransitions(transition) => {
          handle_change_transitions(&options, &output, &issue_args.common, &transition).await
        }
        IssueAction::Search(search) => handle_issue_search(&options, &output, &search).await,
      },
      JiraSubcommands::Assets(assets_args) => match assets_args.action {
        AssetsAction::Search => handle_assets_search(&options, &output, &assets_args.search).await,
      },
    }
  })
}

/// Resolve the shared issue options, loading file/URL-valued fields
async fn resolve_issue_options(common: &IssueCommonArgs) -> Result<IssueOptions> {
  let description = content::resolve_string(&common.description)
    .await
    .context("Failed to resolve issue description")?;
  let custom_fields = content::resolve_string(&common.custom_fields)
    .await
    .context("Failed to resolve custom fields")?;

  Ok(IssueOptions {
    id_or_key: common.id_or_key.clone(),
    summary: common.summary.clone(),
    description,
    custom_fields,
    status: String::new(),
    labels: common.labels.iter().filter(|label| !label.is_empty()).cloned().collect(),
  })
}

/// Default the attachment name to the file's base name when unset
fn attachment_name(file: &str, name: &str) -> String {
  if !name.is_empty() {
    return name.to_string();
  }
  let path = Path::new(file);
  if path.is_file() {
    if let Some(base) = path.file_name() {
      return base.to_string_lossy().to_string();
    }
  }
  name.to_string()
}

async fn handle_issue_create(
  options: &JiraOptions,
  output: &OutputOptions,
  common: &IssueCommonArgs,
  create: &IssueCreateArgs,
) -> Result<()> {
  debug!("Jira creating issue...");

  let issue = resolve_issue_options(common).await?;
  let create = IssueCreateOptions {
    project_key: create.project_key.clone(),
    issue_type: create.issue_type.clone(),
    priority: create.priority.clone(),
    assignee: create.assignee.clone(),
    reporter: create.reporter.clone(),
  };

  let client = JiraClient::new(options)?;
  match client.create_issue(&issue, &create).await {
    Ok(bytes) => write_output(output, &bytes),
    Err(e) => {
      print_error(&format!("Failed to create issue: {e}"));
      Ok(())
    }
  }
}

async fn handle_add_comment(
  options: &JiraOptions,
  output: &OutputOptions,
  common: &IssueCommonArgs,
  comment: &AddCommentArgs,
) -> Result<()> {
  debug!("Jira issue adding comment...");

  let issue = resolve_issue_options(common).await?;
  let body = content::resolve_string(&comment.body)
    .await
    .context("Failed to resolve comment body")?;

  let client = JiraClient::new(options)?;
  match client.add_comment(&issue, &AddCommentOptions { body }).await {
    Ok(bytes) => write_output(output, &bytes),
    Err(e) => {
      print_error(&format!("Failed to add comment to issue {}: {e}", issue.id_or_key));
      Ok(())
    }
  }
}

async fn handle_add_attachment(
  options: &JiraOptions,
  output: &OutputOptions,
  common: &IssueCommonArgs,
  attachment: &AddAttachmentArgs,
) -> Result<()> {
  debug!("Jira issue adding attachment...");

  let issue = resolve_issue_options(common).await?;

  // The name must be derived before resolution replaces the path with bytes
  let name = attachment_name(&attachment.file, &attachment.name);
  let file = content::resolve(&attachment.file)
    .await
    .context("Failed to resolve attachment content")?;

  let client = JiraClient::new(options)?;
  match client.add_attachment(&issue, &AddAttachmentOptions { file, name }).await {
    Ok(bytes) => write_output(output, &bytes),
    Err(e) => {
      print_error(&format!("Failed to attach file to issue {}: {e}", issue.id_or_key));
      Ok(())
    }
  }
}

async fn handle_issue_update(options: &JiraOptions, output: &OutputOptions, common: &IssueCommonArgs) -> Result<()> {
  debug!("Jira issue updating...");

  let issue = resolve_issue_options(common).await?;

  let client = JiraClient::new(options)?;
  match client.update_issue(&issue).await {
    Ok(bytes) => write_output(output, &bytes),
    Err(e) => {
      print_error(&format!("Failed to update issue {}: {e}", issue.id_or_key));
      Ok(())
    }
  }
}

async fn handle_change_transitions(
  options: &JiraOptions,
  output: &OutputOptions,
  common: &IssueCommonArgs,
  transition: &ChangeTransitionsArgs,
) -> Result<()> {
  debug!("Jira issue changing transitions...");

  let mut issue = resolve_issue_options(common).await?;
  issue.status = content::resolve_string(&transition.status)
    .await
    .context("Failed to resolve transition id")?;

  let client = JiraClient::new(options)?;
  match client.transition_issue(&issue).await {
    Ok(bytes) => write_output(output, &bytes),
    Err(e) => {
      print_error(&format!("Failed to transition issue {}: {e}", issue.id_or_key));
      Ok(())
    }
  }
}

async fn handle_issue_search(options: &JiraOptions, output: &OutputOptions, search: &IssueSearchArgs) -> Result<()> {
  debug!("Jira issue searching...");

  let search_pattern = content::resolve_string(&search.pattern)
    .await
    .context("Failed to resolve search pattern")?;

  let client = JiraClient::new(options)?;
  let search_options = SearchIssuesOptions {
    search_pattern,
    max_results: search.max_results,
  };
  match client.search_issues(&search_options).await {
    Ok(bytes) => write_output(output, &bytes),
    Err(e) => {
      print_error(&format!("Failed to search issues: {e}"));
      Ok(())
    }
  }
}

async fn handle_assets_search(options: &JiraOptions, output: &OutputOptions, search: &AssetsSearchArgs) -> Result<()> {
  debug!("Jira assets searching...");

  let search_pattern = content::resolve_string(&search.pattern)
    .await
    .context("Failed to resolve search pattern")?;

  let client = JiraClient::new(options)?;
  let search_options = SearchAssetsOptions {
    search_pattern,
    result_per_page: search.results_per_page,
  };
  match client.search_assets(&search_options).await {
    Ok(bytes) => write_output(output, &bytes),
    Err(e) => {
      print_error(&format!("Failed to search assets: {e}"));
      Ok(())
    }
  }
}
