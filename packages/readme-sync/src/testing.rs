//! Mock collaborators for exercising the sync without a real job export
//! or GitHub calls.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use chrono::{DateTime, Utc};

use crate::error::{Result, SyncError};
use crate::traits::{BaseDocumentStore, BaseJobExporter};
use crate::types::{ExportRecord, RepoDocument};

/// A mock exporter returning a configured record set.
#[derive(Default)]
pub struct MockJobExporter {
    records: Arc<RwLock<Vec<ExportRecord>>>,
    failure: Arc<RwLock<Option<String>>>,
}

impl MockJobExporter {
    /// Create a mock exporter with no records.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the records every export call returns.
    pub fn with_records(self, records: Vec<ExportRecord>) -> Self {
        *self.records.write().unwrap() = records;
        self
    }

    /// Make every export call fail with the given message.
    pub fn with_failure(self, message: impl Into<String>) -> Self {
        *self.failure.write().unwrap() = Some(message.into());
        self
    }
}

#[async_trait]
impl BaseJobExporter for MockJobExporter {
    async fn export_verified_jobs(&self) -> Result<Vec<ExportRecord>> {
        if let Some(message) = self.failure.read().unwrap().clone() {
            return Err(SyncError::Export(message.into()));
        }
        Ok(self.records.read().unwrap().clone())
    }
}

/// Record of a write made to the mock store.
#[derive(Debug, Clone)]
pub struct StoreCall {
    pub new_content: String,
    pub change_token: String,
    pub message: String,
}

/// A mock document store serving one in-memory document.
#[derive(Default)]
pub struct MockDocumentStore {
    document: Arc<RwLock<Option<RepoDocument>>>,
    store_calls: Arc<RwLock<Vec<StoreCall>>>,
    fetch_failure: Arc<RwLock<Option<String>>>,
    store_failure: Arc<RwLock<Option<String>>>,
}

impl MockDocumentStore {
    /// Create a mock store with no document configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve this content under the given change token.
    pub fn with_document(self, content: impl Into<String>, change_token: impl Into<String>) -> Self {
        *self.document.write().unwrap() = Some(RepoDocument {
            content: content.into(),
            change_token: change_token.into(),
        });
        self
    }

    /// Make every read fail with the given message.
    pub fn with_fetch_failure(self, message: impl Into<String>) -> Self {
        *self.fetch_failure.write().unwrap() = Some(message.into());
        self
    }

    /// Make every write fail with the given message, e.g. to simulate a
    /// stale change token.
    pub fn with_store_failure(self, message: impl Into<String>) -> Self {
        *self.store_failure.write().unwrap() = Some(message.into());
        self
    }

    /// Get all writes made to this mock.
    pub fn store_calls(&self) -> Vec<StoreCall> {
        self.store_calls.read().unwrap().clone()
    }

    /// Whether any write happened.
    pub fn stored(&self) -> bool {
        !self.store_calls.read().unwrap().is_empty()
    }
}

#[async_trait]
impl BaseDocumentStore for MockDocumentStore {
    async fn fetch_document(&self) -> Result<RepoDocument> {
        if let Some(message) = self.fetch_failure.read().unwrap().clone() {
            return Err(SyncError::Store(message.into()));
        }
        self.document
            .read()
            .unwrap()
            .clone()
            .ok_or_else(|| SyncError::Store("no document configured".into()))
    }

    async fn store_document(
        &self,
        new_content: &str,
        change_token: &str,
        message: &str,
    ) -> Result<()> {
        if let Some(failure) = self.store_failure.read().unwrap().clone() {
            return Err(SyncError::Store(failure.into()));
        }
        self.store_calls.write().unwrap().push(StoreCall {
            new_content: new_content.to_string(),
            change_token: change_token.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}

/// Build an export record with sensible defaults for tests.
pub fn export_record(
    job_posting_id: &str,
    company_name: &str,
    created_at: DateTime<Utc>,
) -> ExportRecord {
    ExportRecord {
        job_posting_id: job_posting_id.to_string(),
        title: format!("{company_name} Intern"),
        created_at,
        apply_url: None,
        company_id: "9b2f1c44-7f86-4da8-9e31-1f2a3b4c5d6e".to_string(),
        company_name: company_name.to_string(),
    }
}
