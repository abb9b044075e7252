//! Rnotify GitHub - GitHub integration for reviewer-notify
//!
//! This crate implements the [`rnotify_core::PullRequestHost`] capability
//! on top of the GitHub REST API via octocrab.

mod client;
mod error;

pub use client::GitHubHost;
pub use error::{Error, Result};
