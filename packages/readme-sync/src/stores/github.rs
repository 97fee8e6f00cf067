//! GitHub-backed document store.
//!
//! Wraps the contents-API client behind [`BaseDocumentStore`]. The change
//! token is the file's blob sha: GitHub rejects a PUT whose sha no longer
//! matches, which is exactly the lost-update protection the sync needs.

use async_trait::async_trait;
use github_contents::{GithubContentsClient, GithubContentsOptions};

use crate::config::SyncConfig;
use crate::error::{Result, SyncError};
use crate::traits::BaseDocumentStore;
use crate::types::RepoDocument;

pub struct GithubDocumentStore {
    client: GithubContentsClient,
}

impl GithubDocumentStore {
    pub fn new(client: GithubContentsClient) -> Self {
        Self { client }
    }

    pub fn from_config(config: &SyncConfig) -> Self {
        Self::new(GithubContentsClient::new(GithubContentsOptions {
            token: config.github_token.clone(),
            repo: config.repo.clone(),
            path: config.path.clone(),
            api_base_url: config.github_api_base_url.clone(),
        }))
    }
}

#[async_trait]
impl BaseDocumentStore for GithubDocumentStore {
    async fn fetch_document(&self) -> Result<RepoDocument> {
        let file = self
            .client
            .get_file()
            .await
            .map_err(|e| SyncError::Store(Box::new(e)))?;

        Ok(RepoDocument {
            content: file.content,
            change_token: file.sha,
        })
    }

    async fn store_document(
        &self,
        new_content: &str,
        change_token: &str,
        message: &str,
    ) -> Result<()> {
        self.client
            .put_file(new_content, change_token, message)
            .await
            .map_err(|e| SyncError::Store(Box::new(e)))
    }
}
