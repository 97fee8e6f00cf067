//! Error types for the GitHub contents client.

use thiserror::Error;

/// Result type for GitHub contents operations.
pub type Result<T> = std::result::Result<T, GithubContentsError>;

/// GitHub contents client errors.
#[derive(Debug, Error)]
pub enum GithubContentsError {
    /// Network error (connection failed, timeout)
    #[error("Network error: {0}")]
    Network(String),

    /// API error (non-2xx response; a stale sha on write surfaces here)
    #[error("GitHub API error ({status}): {body}")]
    Api { status: u16, body: String },

    /// The contents API returned an encoding other than base64
    #[error("Unexpected GitHub content encoding: {0}")]
    UnexpectedEncoding(String),

    /// Content payload could not be decoded to UTF-8 text
    #[error("Decode error: {0}")]
    Decode(String),
}
