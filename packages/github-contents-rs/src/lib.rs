//! Minimal GitHub contents API client.
//!
//! Reads and conditionally writes a single repository file through the
//! `repos/{repo}/contents/{path}` endpoint. Writes carry the blob sha of the
//! file they replace, so a concurrent edit makes GitHub reject the update
//! instead of silently overwriting it.
//!
//! # Example
//!
//! ```rust,ignore
//! use github_contents::{GithubContentsClient, GithubContentsOptions};
//!
//! let client = GithubContentsClient::new(GithubContentsOptions {
//!     token: token,
//!     repo: "owner/repo".into(),
//!     path: "README.md".into(),
//!     api_base_url: "https://api.github.com".into(),
//! });
//!
//! let file = client.get_file().await?;
//! client.put_file("new content", &file.sha, "update README").await?;
//! ```

pub mod error;
pub mod models;

pub use error::{GithubContentsError, Result};
pub use models::{ContentFileResponse, PutFileRequest, RepoFile};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::Client;
use tracing::{debug, warn};

const GITHUB_API_VERSION: &str = "2022-11-28";
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

#[derive(Debug, Clone)]
pub struct GithubContentsOptions {
    /// Token with contents read/write permission on the target repo.
    pub token: String,
    /// Repository in `owner/repo` form.
    pub repo: String,
    /// File path within the repository, e.g. `README.md`.
    pub path: String,
    /// API base URL, normally `https://api.github.com`.
    pub api_base_url: String,
}

#[derive(Debug, Clone)]
pub struct GithubContentsClient {
    options: GithubContentsOptions,
    http_client: Client,
}

impl GithubContentsClient {
    pub fn new(options: GithubContentsOptions) -> Self {
        Self {
            options,
            http_client: Client::new(),
        }
    }

    /// Fetch the configured file, decoded to UTF-8 text, plus its blob sha.
    pub async fn get_file(&self) -> Result<RepoFile> {
        let url = self.contents_url();

        let response = self
            .http_client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.options.token))
            .header("Accept", GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "GitHub contents fetch failed");
                GithubContentsError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "GitHub contents API error");
            return Err(GithubContentsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let file: ContentFileResponse = response
            .json()
            .await
            .map_err(|e| GithubContentsError::Decode(e.to_string()))?;

        if file.encoding != "base64" {
            return Err(GithubContentsError::UnexpectedEncoding(file.encoding));
        }

        let content = decode_base64_content(&file.content)?;

        debug!(repo = %self.options.repo, path = %self.options.path, sha = %file.sha, "Fetched file");

        Ok(RepoFile {
            sha: file.sha,
            content,
        })
    }

    /// Replace the configured file's content.
    ///
    /// `sha` must be the blob sha returned by a prior [`get_file`]; GitHub
    /// rejects the write when it no longer matches the file's current blob.
    ///
    /// [`get_file`]: GithubContentsClient::get_file
    pub async fn put_file(&self, new_content: &str, sha: &str, message: &str) -> Result<()> {
        let url = self.contents_url();

        let request = PutFileRequest {
            message: message.to_string(),
            content: encode_base64_content(new_content),
            sha: sha.to_string(),
        };

        let response = self
            .http_client
            .put(&url)
            .header("Authorization", format!("Bearer {}", self.options.token))
            .header("Accept", GITHUB_ACCEPT)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "GitHub contents update failed");
                GithubContentsError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(status = %status, body = %body, "GitHub contents API error");
            return Err(GithubContentsError::Api {
                status: status.as_u16(),
                body,
            });
        }

        debug!(repo = %self.options.repo, path = %self.options.path, "Updated file");

        Ok(())
    }

    fn contents_url(&self) -> String {
        format!(
            "{}/repos/{}/contents/{}",
            self.options.api_base_url,
            self.options.repo,
            encode_path(&self.options.path)
        )
    }
}

/// Percent-encode each path segment, preserving `/` separators.
fn encode_path(path: &str) -> String {
    path.split('/')
        .map(|seg| urlencoding::encode(seg).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// Decode a contents API base64 payload, which may be wrapped with newlines.
fn decode_base64_content(content: &str) -> Result<String> {
    let stripped = content.replace('\n', "");
    let bytes = STANDARD
        .decode(stripped)
        .map_err(|e| GithubContentsError::Decode(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| GithubContentsError::Decode(e.to_string()))
}

fn encode_base64_content(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}
