//! The anchored jobs table: locate, parse, normalize, render, merge.
//!
//! Everything in this module is pure. The orchestrator in [`crate::sync`]
//! wires these functions to the collaborators that do I/O.

pub mod anchors;
pub mod merge;
pub mod normalize;
pub mod parse;
pub mod render;

pub use anchors::{extract_anchored_block, AnchoredBlock, JOBS_TABLE_END, JOBS_TABLE_START};
pub use merge::{merge_jobs_table, MergeOutcome};
pub use normalize::{normalize_community_row, NormalizedCommunityRow, INVALID_DATE_MARKER};
pub use parse::{parse_block, split_row_cells, ExistingRow, ParsedBlock};
pub use render::{
    desired_row, escape_pipes, render_table, sanitize_href, DesiredRow, DEFAULT_HEADER_LINES,
    NO_APPLY_PLACEHOLDER, UTM_PARAMS,
};
