//! Error types for reviewer-notify

use thiserror::Error;

/// Result type alias for reviewer-notify operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for reviewer-notify operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error, detected before any network call
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failure surfaced by the pull-request host; passed through untranslated
    #[error("{0}")]
    Host(Box<dyn std::error::Error + Send + Sync + 'static>),
}

impl Error {
    /// Wrap a host-side failure without altering its message
    pub fn host<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Error::Host(Box::new(err))
    }
}
