//! GitHub API host using octocrab

use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, info};

use rnotify_core::{PullRequestHost, PullRequestSnapshot, RepoId, TeamRef};

use crate::{Error, Result};

/// GitHub implementation of the pull-request host capability
pub struct GitHubHost {
    client: Octocrab,
}

impl GitHubHost {
    /// Create a host authenticated with a personal access token
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let client = Octocrab::builder()
            .personal_token(token.into())
            .build()
            .map_err(|e| Error::Auth(format!("Failed to create GitHub client: {}", e)))?;

        Ok(Self { client })
    }

    /// Wrap an existing octocrab client
    pub fn from_client(client: Octocrab) -> Self {
        Self { client }
    }

    async fn get_pull_request(&self, repo: &RepoId, number: u64) -> Result<PullRequestSnapshot> {
        debug!(%repo, number, "Fetching pull request");

        let pr = self
            .client
            .pulls(repo.owner(), repo.name())
            .get(number)
            .await
            .map_err(|e| match &e {
                octocrab::Error::GitHub { source, .. }
                    if source.message.contains("Not Found") =>
                {
                    Error::PrNotFound(number)
                }
                _ => Error::Api(e),
            })?;

        let snapshot = PullRequestSnapshot {
            number: pr.number,
            title: pr.title.unwrap_or_default(),
            requested_teams: pr.requested_teams.map(|teams| {
                teams
                    .into_iter()
                    .map(|team| TeamRef { slug: team.slug })
                    .collect()
            }),
        };

        info!(
            number,
            teams = snapshot.teams().len(),
            "Fetched pull request"
        );

        Ok(snapshot)
    }

    async fn create_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<()> {
        debug!(%repo, number, body_len = body.len(), "Posting comment");

        self.client
            .issues(repo.owner(), repo.name())
            .create_comment(number, body)
            .await
            .map_err(Error::Api)?;

        Ok(())
    }
}

#[async_trait]
impl PullRequestHost for GitHubHost {
    async fn fetch_pull_request(
        &self,
        repo: &RepoId,
        number: u64,
    ) -> rnotify_core::Result<PullRequestSnapshot> {
        Ok(self.get_pull_request(repo, number).await?)
    }

    async fn post_comment(
        &self,
        repo: &RepoId,
        number: u64,
        body: &str,
    ) -> rnotify_core::Result<()> {
        Ok(self.create_comment(repo, number, body).await?)
    }
}

impl std::fmt::Debug for GitHubHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GitHubHost").finish_non_exhaustive()
    }
}
