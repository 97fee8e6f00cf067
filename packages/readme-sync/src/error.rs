//! Typed errors for the sync engine.
//!
//! Uses `thiserror` for library errors (not `anyhow`) so callers can tell
//! the operator mistake apart from collaborator failures.

use thiserror::Error;

use crate::table::{JOBS_TABLE_END, JOBS_TABLE_START};

/// Errors that can occur during a sync run.
///
/// Malformed table content is never an error: unparsable rows and cells are
/// preserved or visibly marked instead, so one bad hand-edit cannot wedge
/// the sync.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The target document lacks the table anchors, or they are out of
    /// order. The anchors are placed by hand exactly once; the sync never
    /// repairs them, so retrying without fixing the document cannot help.
    #[error(
        "target document is missing the jobs table anchors ({} / {})",
        JOBS_TABLE_START,
        JOBS_TABLE_END
    )]
    MissingAnchors,

    /// The export collaborator failed
    #[error("job export failed: {0}")]
    Export(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The document store failed on read or conditional write. A stale
    /// change token on write surfaces here.
    #[error("document store error: {0}")]
    Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Result type alias for sync operations.
pub type Result<T> = std::result::Result<T, SyncError>;
