//! Anchor-delimited block location.
//!
//! The managed table lives between two literal HTML-comment anchors placed
//! in the target document once, by hand. Everything outside the anchors is
//! preserved byte-for-byte; the sync only ever rewrites what sits between
//! them.

use crate::error::{Result, SyncError};

/// Literal marking the start of the managed block.
pub const JOBS_TABLE_START: &str = "<!-- JOBS_TABLE_START -->";
/// Literal marking the end of the managed block.
pub const JOBS_TABLE_END: &str = "<!-- JOBS_TABLE_END -->";

/// A document split at its anchors.
///
/// `before` ends with the start anchor and `after` begins with the end
/// anchor, so `before + block + after` reproduces the input exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnchoredBlock<'a> {
    pub before: &'a str,
    pub block: &'a str,
    pub after: &'a str,
}

/// Split a document at the first occurrence of each anchor.
///
/// Fails with [`SyncError::MissingAnchors`] when either literal is absent
/// or the end anchor comes before the start anchor. That is an operator
/// error in the target document, not a retryable fault.
pub fn extract_anchored_block(document: &str) -> Result<AnchoredBlock<'_>> {
    let (start_idx, end_idx) = match (document.find(JOBS_TABLE_START), document.find(JOBS_TABLE_END))
    {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return Err(SyncError::MissingAnchors),
    };

    let block_start = start_idx + JOBS_TABLE_START.len();

    Ok(AnchoredBlock {
        before: &document[..block_start],
        block: &document[block_start..end_idx],
        after: &document[end_idx..],
    })
}
