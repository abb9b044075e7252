//! Rnotify CLI - notify the team reviewers of a pull request
//!
//! Fetches the requested team reviewers of a GitHub pull request and posts
//! a templated comment mentioning them. Built for GitHub Actions, so every
//! flag can also come from the environment.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use rnotify_core::{NotifierConfig, ReviewerNotifier, Secrets};
use rnotify_github::GitHubHost;

/// Notify the requested team reviewers of a pull request
#[derive(Parser, Debug)]
#[command(name = "rnotify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Pull request number to comment on
    #[arg(long, env = "GITHUB_PR_NUMBER")]
    pr_number: Option<String>,

    /// Repository in owner/name form
    #[arg(long, env = "GITHUB_REPOSITORY")]
    repo: Option<String>,

    /// GitHub token (falls back to GITHUB_TOKEN, then the secrets file)
    #[arg(long, env = "INPUT_GITHUB_TOKEN", hide_env_values = true)]
    token: Option<String>,

    /// Comment template; {{mentions}} is replaced with the reviewer mentions
    #[arg(long, env = "INPUT_COMMENT_TEMPLATE")]
    comment_template: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        println!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let token = resolve_token(cli.token)?;

    let config = NotifierConfig::new(
        token,
        cli.repo.as_deref().unwrap_or_default(),
        cli.pr_number.as_deref().unwrap_or_default(),
        cli.comment_template,
    )?;

    if cli.verbose {
        tracing::info!(
            repo = %config.repo,
            pr_number = config.pr_number,
            "Configuration loaded"
        );
    }

    println!(
        "Fetching reviewers for PR #{} in {}...",
        config.pr_number, config.repo
    );

    let host = GitHubHost::new(config.token.clone())?;
    let notifier = ReviewerNotifier::new(config, host);
    let count = notifier.run().await?;

    println!("Notification sent to {} reviewers.", count);

    Ok(())
}

/// Resolve the GitHub token
///
/// Priority: --token / INPUT_GITHUB_TOKEN, then GITHUB_TOKEN, then the
/// secrets file. An empty value counts as unset.
fn resolve_token(flag: Option<String>) -> anyhow::Result<String> {
    if let Some(token) = flag {
        let token = token.trim().to_string();
        if !token.is_empty() {
            return Ok(token);
        }
    }

    let secrets = Secrets::load()?;
    secrets.github_token().ok_or_else(|| {
        anyhow::anyhow!(
            "GitHub token is required. Pass --token, set INPUT_GITHUB_TOKEN or \
             GITHUB_TOKEN, or add the token to ~/.config/rnotify/secrets.toml"
        )
    })
}
