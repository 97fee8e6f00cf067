//! Wire types for the GitHub contents API.

use serde::{Deserialize, Serialize};

/// Response payload for `GET /repos/{repo}/contents/{path}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContentFileResponse {
    pub sha: String,
    /// Base64-encoded file body; GitHub may wrap it with newlines.
    pub content: String,
    pub encoding: String,
}

/// Request payload for `PUT /repos/{repo}/contents/{path}`.
#[derive(Debug, Clone, Serialize)]
pub struct PutFileRequest {
    pub message: String,
    /// Base64-encoded file body.
    pub content: String,
    /// Blob sha of the file being replaced; GitHub rejects the write if stale.
    pub sha: String,
}

/// A decoded repository file plus the blob sha required to update it.
#[derive(Debug, Clone)]
pub struct RepoFile {
    pub sha: String,
    pub content: String,
}
