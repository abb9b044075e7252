//! Team reviewer mention formatting

use serde::{Deserialize, Serialize};

/// A team requested as reviewer on a pull request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRef {
    /// Team slug, unique within the repository owner's organization
    pub slug: String,
}

impl TeamRef {
    /// Create a team reference from a slug
    pub fn new(slug: impl Into<String>) -> Self {
        Self { slug: slug.into() }
    }
}

/// Read-only view of the pull-request data the notifier needs
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequestSnapshot {
    /// PR number
    pub number: u64,
    /// PR title
    pub title: String,
    /// Teams requested as reviewers, in API order; `None` when the host
    /// omits the field entirely
    pub requested_teams: Option<Vec<TeamRef>>,
}

impl PullRequestSnapshot {
    /// The requested teams, treating an absent field as empty
    pub fn teams(&self) -> &[TeamRef] {
        self.requested_teams.as_deref().unwrap_or_default()
    }
}

/// Format team mentions as `@{owner}/{slug}`, preserving input order
pub fn team_mentions(owner: &str, teams: &[TeamRef]) -> Vec<String> {
    teams
        .iter()
        .map(|team| format!("@{}/{}", owner, team.slug))
        .collect()
}
