//! Reviewer notification driver

use async_trait::async_trait;
use tracing::{debug, info};

use crate::config::{NotifierConfig, RepoId};
use crate::mention::{team_mentions, PullRequestSnapshot};
use crate::template;
use crate::Result;

/// Capability trait for the pull-request hosting platform
///
/// The notifier only needs two operations: one read, one write. Failures
/// propagate to the caller untranslated; implementations perform no retry.
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// Fetch the pull-request snapshot
    async fn fetch_pull_request(&self, repo: &RepoId, number: u64)
        -> Result<PullRequestSnapshot>;

    /// Post a comment on the pull request
    async fn post_comment(&self, repo: &RepoId, number: u64, body: &str) -> Result<()>;
}

/// Notifies the requested team reviewers of a pull request by posting a
/// templated comment that mentions them
pub struct ReviewerNotifier<H: PullRequestHost> {
    config: NotifierConfig,
    host: H,
}

impl<H: PullRequestHost> ReviewerNotifier<H> {
    /// Create a notifier for a validated configuration and host
    pub fn new(config: NotifierConfig, host: H) -> Self {
        Self { config, host }
    }

    /// Run one notification: fetch, format, post
    ///
    /// Returns the number of team reviewers mentioned. The run is strictly
    /// sequential and terminates on the first host error; re-running posts
    /// a duplicate comment.
    pub async fn run(&self) -> Result<usize> {
        let repo = &self.config.repo;
        let number = self.config.pr_number;

        info!(%repo, number, "Fetching reviewers for pull request");
        let snapshot = self.host.fetch_pull_request(repo, number).await?;

        let mentions = team_mentions(repo.owner(), snapshot.teams());
        let body = template::render(&self.config.comment_template, &mentions.join(" "));
        debug!(teams = mentions.len(), body_len = body.len(), "Rendered comment body");

        info!(%repo, number, "Posting comment to pull request");
        self.host.post_comment(repo, number, &body).await?;

        info!(count = mentions.len(), "Notification sent");
        Ok(mentions.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mention::TeamRef;
    use crate::Error;
    use std::sync::Mutex;

    /// Records host calls and serves a canned snapshot
    struct RecordingHost {
        requested_teams: Option<Vec<TeamRef>>,
        posted: Mutex<Vec<String>>,
        fetches: Mutex<Vec<(String, u64)>>,
    }

    impl RecordingHost {
        fn with_teams(slugs: &[&str]) -> Self {
            Self {
                requested_teams: Some(slugs.iter().map(|slug| TeamRef::new(*slug)).collect()),
                posted: Mutex::new(Vec::new()),
                fetches: Mutex::new(Vec::new()),
            }
        }

        fn without_teams_field() -> Self {
            Self {
                requested_teams: None,
                posted: Mutex::new(Vec::new()),
                fetches: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl PullRequestHost for RecordingHost {
        async fn fetch_pull_request(
            &self,
            repo: &RepoId,
            number: u64,
        ) -> Result<PullRequestSnapshot> {
            self.fetches
                .lock()
                .unwrap()
                .push((repo.to_string(), number));
            Ok(PullRequestSnapshot {
                number,
                title: "Test PR".to_string(),
                requested_teams: self.requested_teams.clone(),
            })
        }

        async fn post_comment(&self, _repo: &RepoId, _number: u64, body: &str) -> Result<()> {
            self.posted.lock().unwrap().push(body.to_string());
            Ok(())
        }
    }

    /// Fails every fetch; post must never be reached after a failed fetch
    struct FailingHost {
        posted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl PullRequestHost for FailingHost {
        async fn fetch_pull_request(
            &self,
            _repo: &RepoId,
            _number: u64,
        ) -> Result<PullRequestSnapshot> {
            Err(Error::Config("boom".to_string()))
        }

        async fn post_comment(&self, _repo: &RepoId, _number: u64, body: &str) -> Result<()> {
            self.posted.lock().unwrap().push(body.to_string());
            Ok(())
        }
    }

    fn config(template: &str) -> NotifierConfig {
        NotifierConfig::new("token", "owner/repo", "123", Some(template.to_string())).unwrap()
    }

    #[tokio::test]
    async fn test_posts_comment_with_single_team() {
        let host = RecordingHost::with_teams(&["team-a"]);
        let notifier = ReviewerNotifier::new(config("cc: {{mentions}}"), host);

        let count = notifier.run().await.unwrap();

        assert_eq!(count, 1);
        let posted = notifier.host.posted.lock().unwrap();
        assert_eq!(posted.as_slice(), ["cc: @owner/team-a"]);
    }

    #[tokio::test]
    async fn test_posts_comment_with_multiple_teams() {
        let host = RecordingHost::with_teams(&["team-a", "team-b"]);
        let notifier = ReviewerNotifier::new(config("cc: {{mentions}}"), host);

        let count = notifier.run().await.unwrap();

        assert_eq!(count, 2);
        let posted = notifier.host.posted.lock().unwrap();
        assert_eq!(posted.as_slice(), ["cc: @owner/team-a @owner/team-b"]);
    }

    #[tokio::test]
    async fn test_posts_comment_with_no_teams() {
        let host = RecordingHost::with_teams(&[]);
        let notifier = ReviewerNotifier::new(config("cc: {{mentions}}"), host);

        let count = notifier.run().await.unwrap();

        assert_eq!(count, 0);
        let posted = notifier.host.posted.lock().unwrap();
        assert_eq!(posted.as_slice(), ["cc: "]);
    }

    #[tokio::test]
    async fn test_absent_teams_field_behaves_like_empty() {
        let host = RecordingHost::without_teams_field();
        let notifier = ReviewerNotifier::new(config("cc: {{mentions}}"), host);

        let count = notifier.run().await.unwrap();

        assert_eq!(count, 0);
        let posted = notifier.host.posted.lock().unwrap();
        assert_eq!(posted.as_slice(), ["cc: "]);
    }

    #[tokio::test]
    async fn test_template_without_placeholder_posted_verbatim() {
        let host = RecordingHost::with_teams(&["team-a"]);
        let notifier = ReviewerNotifier::new(config("This is a test comment."), host);

        let count = notifier.run().await.unwrap();

        // Count reflects the mention list even when mentions are dropped
        assert_eq!(count, 1);
        let posted = notifier.host.posted.lock().unwrap();
        assert_eq!(posted.as_slice(), ["This is a test comment."]);
    }

    #[tokio::test]
    async fn test_multiline_template() {
        let host = RecordingHost::with_teams(&["team-a"]);
        let notifier =
            ReviewerNotifier::new(config("This is a test comment.\ncc: {{mentions}}\n"), host);

        notifier.run().await.unwrap();

        let posted = notifier.host.posted.lock().unwrap();
        assert_eq!(posted.as_slice(), ["This is a test comment.\ncc: @owner/team-a\n"]);
    }

    #[tokio::test]
    async fn test_fetch_targets_configured_repo_and_number() {
        let host = RecordingHost::with_teams(&["team-a"]);
        let notifier = ReviewerNotifier::new(config("cc: {{mentions}}"), host);

        notifier.run().await.unwrap();

        let fetches = notifier.host.fetches.lock().unwrap();
        assert_eq!(fetches.as_slice(), [("owner/repo".to_string(), 123)]);
    }

    #[tokio::test]
    async fn test_fetch_failure_skips_post() {
        let host = FailingHost {
            posted: Mutex::new(Vec::new()),
        };
        let notifier = ReviewerNotifier::new(config("cc: {{mentions}}"), host);

        let result = notifier.run().await;

        assert!(result.is_err());
        assert!(notifier.host.posted.lock().unwrap().is_empty());
    }
}
