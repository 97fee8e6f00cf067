use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Sync configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct SyncConfig {
    pub github_token: String,
    /// Target repository in `owner/repo` form
    pub repo: String,
    /// Path of the synced document inside the repository
    pub path: String,
    pub github_api_base_url: String,
    /// Site origin used to build job and company links
    pub site_base_url: String,
}

impl SyncConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            github_token: env::var("README_SYNC_GITHUB_TOKEN")
                .context("README_SYNC_GITHUB_TOKEN must be set")?,
            repo: env::var("README_SYNC_REPO")
                .context("README_SYNC_REPO must be set (expected: owner/repo)")?,
            path: env::var("README_SYNC_PATH").unwrap_or_else(|_| "README.md".to_string()),
            github_api_base_url: env::var("README_SYNC_GITHUB_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.github.com".to_string()),
            site_base_url: env::var("README_SYNC_SITE_URL")
                .unwrap_or_else(|_| "https://didtheyghost.me".to_string()),
        })
    }
}
