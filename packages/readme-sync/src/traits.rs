// Trait definitions for the sync collaborators
//
// These are INFRASTRUCTURE traits only - no merge logic. The table engine
// stays pure; everything that touches a database or the network sits behind
// one of these seams.
//
// Naming convention: Base* for trait names (e.g., BaseJobExporter)

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{ExportRecord, RepoDocument};

// =============================================================================
// Job Exporter Trait
// =============================================================================

#[async_trait]
pub trait BaseJobExporter: Send + Sync {
    /// Export the verified postings selected for publication,
    /// newest-created-first
    async fn export_verified_jobs(&self) -> Result<Vec<ExportRecord>>;
}

// =============================================================================
// Document Store Trait
// =============================================================================

#[async_trait]
pub trait BaseDocumentStore: Send + Sync {
    /// Read the target document and its current change token
    async fn fetch_document(&self) -> Result<RepoDocument>;

    /// Write `new_content`, conditioned on `change_token` still matching
    /// the stored document
    async fn store_document(
        &self,
        new_content: &str,
        change_token: &str,
        message: &str,
    ) -> Result<()>;
}
