//! The sync orchestrator: export, render, merge, conditional write.

use std::sync::Arc;

use tracing::{debug, info};

use crate::error::Result;
use crate::table::merge::merge_jobs_table;
use crate::table::render::{desired_row, DesiredRow};
use crate::traits::{BaseDocumentStore, BaseJobExporter};
use crate::types::SyncOutcome;

/// Orchestrates one full README sync run.
///
/// Stateless between runs: every call re-fetches both the export and the
/// document. Concurrent runs are not coordinated here; the store's change
/// token is what protects against lost updates.
pub struct ReadmeSync {
    exporter: Arc<dyn BaseJobExporter>,
    store: Arc<dyn BaseDocumentStore>,
    site_base_url: String,
}

impl ReadmeSync {
    pub fn new(
        exporter: Arc<dyn BaseJobExporter>,
        store: Arc<dyn BaseDocumentStore>,
        site_base_url: impl Into<String>,
    ) -> Self {
        let site_base_url = site_base_url.into().trim_end_matches('/').to_string();
        Self {
            exporter,
            store,
            site_base_url,
        }
    }

    /// Run one sync. Skips the write when the merged document is
    /// byte-identical to the current one.
    pub async fn sync(&self) -> Result<SyncOutcome> {
        let jobs = self.exporter.export_verified_jobs().await?;
        info!(exported = jobs.len(), "Fetched verified jobs for README sync");

        let desired: Vec<DesiredRow> = jobs
            .iter()
            .map(|job| desired_row(job, &self.site_base_url))
            .collect();

        let document = self.store.fetch_document().await?;

        let outcome = merge_jobs_table(&document.content, &desired)?;

        if !outcome.changed {
            info!(exported = jobs.len(), "README already up to date, skipping write");
            return Ok(SyncOutcome {
                did_change: false,
                exported_count: jobs.len(),
                commit_message: None,
            });
        }

        debug!(
            old_len = document.content.len(),
            new_len = outcome.next_readme.len(),
            "README table content changed"
        );

        let commit_message = format!(
            "sync(readme): update SG internship tech verified jobs ({})",
            jobs.len()
        );

        self.store
            .store_document(&outcome.next_readme, &document.change_token, &commit_message)
            .await?;

        info!(exported = jobs.len(), commit_message = %commit_message, "README synced");

        Ok(SyncOutcome {
            did_change: true,
            exported_count: jobs.len(),
            commit_message: Some(commit_message),
        })
    }
}
