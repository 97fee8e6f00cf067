//! Core data types shared across the sync pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One verified job posting selected for publication.
///
/// Produced by the export collaborator already filtered (verified status,
/// Singapore, internship, tech track) and sorted newest-created-first.
/// Field names follow the site's export JSON, so a snapshot deserializes
/// directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRecord {
    pub job_posting_id: String,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub apply_url: Option<String>,
    pub company_id: String,
    pub company_name: String,
}

/// The synced document plus the token required to write it back.
#[derive(Debug, Clone)]
pub struct RepoDocument {
    pub content: String,
    /// Opaque optimistic-concurrency token (the blob sha for GitHub). Must
    /// be echoed on write; the store rejects the write when it is stale.
    pub change_token: String,
}

/// Summary of one sync run.
#[derive(Debug, Clone, Serialize)]
pub struct SyncOutcome {
    pub did_change: bool,
    pub exported_count: usize,
    /// Set only when a write happened.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit_message: Option<String>,
}
