//! README Jobs Table Sync
//!
//! Publishes the site's verified Singapore internship tech postings into an
//! anchor-delimited Markdown table in an external README, while preserving
//! the rows community contributors added by hand.
//!
//! # Design Philosophy
//!
//! **"The README is shared ground"**
//!
//! - Machine rows are regenerated from the export on every run
//! - Community rows are preserved, lightly normalized, never deleted
//! - Malformed content is kept or visibly marked, never an error
//! - The write is skipped when nothing changed, so automation stays quiet
//! - A change token guards the write against concurrent edits
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use readme_sync::exporters::JsonFileExporter;
//! use readme_sync::stores::GithubDocumentStore;
//! use readme_sync::{ReadmeSync, SyncConfig};
//!
//! let config = SyncConfig::from_env()?;
//! let exporter = Arc::new(JsonFileExporter::new("export.json"));
//! let store = Arc::new(GithubDocumentStore::from_config(&config));
//!
//! let sync = ReadmeSync::new(exporter, store, config.site_base_url.clone());
//! let outcome = sync.sync().await?;
//! println!("changed: {}", outcome.did_change);
//! ```
//!
//! # Modules
//!
//! - [`table`] - pure table engine: anchors, parsing, normalization, rendering, merge
//! - [`traits`] - collaborator seams (BaseJobExporter, BaseDocumentStore)
//! - [`exporters`] / [`stores`] - snapshot-file exporter and GitHub-backed store
//! - [`sync`] - the orchestrator
//! - [`testing`] - mock implementations for testing

pub mod config;
pub mod dates;
pub mod error;
pub mod exporters;
pub mod stores;
pub mod sync;
pub mod table;
pub mod testing;
pub mod traits;
pub mod types;

// Re-export core types at crate root
pub use config::SyncConfig;
pub use error::{Result, SyncError};
pub use sync::ReadmeSync;
pub use table::{
    extract_anchored_block, merge_jobs_table, parse_block, AnchoredBlock, DesiredRow,
    MergeOutcome, JOBS_TABLE_END, JOBS_TABLE_START,
};
pub use traits::{BaseDocumentStore, BaseJobExporter};
pub use types::{ExportRecord, RepoDocument, SyncOutcome};
