//! Rnotify Core - Core library for reviewer-notify
//!
//! This crate provides the reviewer-notification logic: configuration
//! validation, mention formatting, comment templating, and the notifier
//! driver. Network access is abstracted behind the [`PullRequestHost`]
//! capability trait so the core stays testable without a real API.

pub mod config;
pub mod error;
pub mod mention;
pub mod notifier;
pub mod secrets;
pub mod template;

pub use config::{NotifierConfig, RepoId};
pub use error::{Error, Result};
pub use mention::{PullRequestSnapshot, TeamRef};
pub use notifier::{PullRequestHost, ReviewerNotifier};
pub use secrets::Secrets;
