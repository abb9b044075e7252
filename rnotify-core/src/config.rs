//! Run configuration for the reviewer notifier
//!
//! Configuration is assembled at the process boundary (CLI flags and
//! environment variables) and validated here before any network call.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Identifier of a GitHub repository, `owner/name`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    /// Parse a repository identifier
    ///
    /// Supported formats:
    /// - owner/name
    /// - https://github.com/owner/name
    /// - git@github.com:owner/name.git
    pub fn parse(input: &str) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Err(Error::Config("repository is required".to_string()));
        }

        // HTTPS URL: https://github.com/owner/name
        if input.starts_with("https://") || input.starts_with("http://") {
            let url = url::Url::parse(input)
                .map_err(|e| Error::Config(format!("Invalid repository URL: {}", e)))?;
            let path = url.path().trim_start_matches('/').trim_end_matches(".git");
            return Self::from_parts(path.splitn(3, '/'), input);
        }

        // SSH URL: git@github.com:owner/name.git
        if input.starts_with("git@") {
            if let Some(path) = input.split(':').nth(1) {
                let path = path.trim_end_matches(".git");
                return Self::from_parts(path.splitn(3, '/'), input);
            }
            return Err(Error::Config(format!("Invalid SSH URL: {}", input)));
        }

        // Shorthand: owner/name, exactly one separator
        Self::from_parts(input.trim_end_matches(".git").split('/'), input)
    }

    fn from_parts<'a>(parts: impl Iterator<Item = &'a str>, input: &str) -> Result<Self> {
        let parts: Vec<&str> = parts.collect();
        match parts.as_slice() {
            [owner, name] if !owner.is_empty() && !name.is_empty() => Ok(Self {
                owner: (*owner).to_string(),
                name: (*name).to_string(),
            }),
            _ => Err(Error::Config(format!(
                "Invalid repository format: {}. Expected owner/name",
                input
            ))),
        }
    }

    /// Repository owner, the part mentions are scoped to
    pub fn owner(&self) -> &str {
        &self.owner
    }

    /// Repository name
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Validated configuration for one notifier run
#[derive(Debug, Clone)]
pub struct NotifierConfig {
    /// GitHub personal access token
    pub token: String,
    /// Target repository
    pub repo: RepoId,
    /// Pull request number to comment on
    pub pr_number: u64,
    /// Comment template, may be empty
    pub comment_template: String,
}

impl NotifierConfig {
    /// Build a validated configuration
    ///
    /// Fails when the token, repository, or pull-request number is missing,
    /// empty, or malformed. The template is optional.
    pub fn new(
        token: impl Into<String>,
        repo: &str,
        pr_number: &str,
        comment_template: Option<String>,
    ) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(Error::Config("github token is required".to_string()));
        }

        let repo = RepoId::parse(repo)?;

        let pr_number = pr_number.trim();
        if pr_number.is_empty() {
            return Err(Error::Config("pull request number is required".to_string()));
        }
        let pr_number: u64 = pr_number.parse().map_err(|_| {
            Error::Config(format!("Invalid pull request number: {}", pr_number))
        })?;

        Ok(Self {
            token,
            repo,
            pr_number,
            comment_template: comment_template.unwrap_or_default(),
        })
    }
}
