//! Snapshot-file exporter.
//!
//! Reads a JSON array of export records, the same shape the site's export
//! query produces. Lets the sync run from a CI artifact without a live
//! database connection.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::{Result, SyncError};
use crate::traits::BaseJobExporter;
use crate::types::ExportRecord;

pub struct JsonFileExporter {
    path: PathBuf,
}

impl JsonFileExporter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BaseJobExporter for JsonFileExporter {
    async fn export_verified_jobs(&self) -> Result<Vec<ExportRecord>> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SyncError::Export(Box::new(e)))?;

        let mut records: Vec<ExportRecord> =
            serde_json::from_str(&raw).map_err(|e| SyncError::Export(Box::new(e)))?;

        // Uphold the exporter contract regardless of file order
        records.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(records)
    }
}
