//! Error types for the Forkify client.
//!
//! This module defines the centralized error type [`ForkifyError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors are never retried inside the crate. They propagate to the caller, and the
//! presentation layer ([`crate::app::Controller`]) turns them into view messages.

use thiserror::Error;

/// The main error type for Forkify operations.
///
/// The first three variants form the taxonomy surfaced by the state store:
/// network failures, timeouts, and malformed upload input. The remaining
/// variants cover the local collaborators (storage, configuration, I/O).
///
/// # Examples
///
/// ```
/// use forkify::ForkifyError;
///
/// let err = ForkifyError::Timeout(10);
/// assert_eq!(err.to_string(), "Request took too long! Timeout after 10 second(s)");
/// ```
#[derive(Debug, Error)]
pub enum ForkifyError {
    /// Network failure or non-2xx response from the recipe API.
    ///
    /// For non-2xx responses the string is `"<api message> (<status code>)"`.
    /// A recipe that does not exist surfaces here too; the API answers it
    /// with a non-2xx status and the client does not distinguish it.
    #[error("{0}")]
    Fetch(String),

    /// Request exceeded the configured deadline, in seconds.
    #[error("Request took too long! Timeout after {0} second(s)")]
    Timeout(u64),

    /// Malformed upload input (ingredient line or numeric form field).
    #[error("{0}")]
    Format(String),

    /// Servings value outside the accepted range (must be at least 1).
    #[error("Invalid number of servings: {0}")]
    InvalidServings(i64),

    /// Lookup of a local entity (bookmark, view) failed.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bookmark storage could not be read, parsed or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ForkifyError {
    /// Returns `true` for errors produced by the HTTP collaborator.
    #[must_use]
    pub const fn is_network(&self) -> bool {
        matches!(self, Self::Fetch(_) | Self::Timeout(_))
    }
}

impl From<reqwest::Error> for ForkifyError {
    fn from(err: reqwest::Error) -> Self {
        Self::Fetch(err.to_string())
    }
}

/// A specialized `Result` type for Forkify operations.
pub type Result<T> = std::result::Result<T, ForkifyError>;
