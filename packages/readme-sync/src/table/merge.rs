//! The merge engine: combine machine rows built from the export with
//! community rows preserved from the document, in one deterministically
//! ordered table.
//!
//! Pure string-in string-out. No I/O, no clock reads; identical inputs
//! always produce identical output.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

use crate::error::Result;
use crate::table::anchors::extract_anchored_block;
use crate::table::normalize::normalize_community_row;
use crate::table::parse::parse_block;
use crate::table::render::{escape_pipes, render_row_line, render_table, DesiredRow};

/// Who owns a merged row. Community rows win timestamp ties against machine
/// rows, so the ordering falls out of the variant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum RowKind {
    Community,
    Machine,
}

struct MergedRow {
    line: String,
    kind: RowKind,
    sort_ts: Option<DateTime<Utc>>,
    index: usize,
}

/// Result of a merge: the next document text and whether it differs from
/// the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub next_readme: String,
    pub changed: bool,
}

/// Merge the desired machine rows into the document's anchored table.
///
/// Machine rows are rebuilt from `desired` and every existing machine row
/// is discarded, so removals and edits on the site propagate. Community
/// rows are normalized and preserved. The text outside the anchors is
/// untouched.
pub fn merge_jobs_table(readme: &str, desired: &[DesiredRow]) -> Result<MergeOutcome> {
    let anchored = extract_anchored_block(readme)?;
    let parsed = parse_block(anchored.block);

    let mut rows: Vec<MergedRow> = Vec::with_capacity(desired.len() + parsed.rows.len());

    for (index, row) in desired.iter().enumerate() {
        rows.push(MergedRow {
            line: row.to_line(),
            kind: RowKind::Machine,
            sort_ts: Some(row.created_at),
            index,
        });
    }

    let community_rows = parsed.rows.iter().filter(|row| row.job_posting_id.is_none());
    for (index, row) in community_rows.enumerate() {
        let normalized = normalize_community_row(&row.cells);
        let escaped: Vec<String> = normalized.cells.iter().map(|cell| escape_pipes(cell)).collect();
        rows.push(MergedRow {
            line: render_row_line(&escaped),
            kind: RowKind::Community,
            sort_ts: normalized.added_at,
            index,
        });
    }

    rows.sort_by(compare_rows);

    let row_lines: Vec<String> = rows.into_iter().map(|row| row.line).collect();
    let next_block = render_table(&parsed.header_lines, &row_lines);

    let next_readme = format!("{}{}{}", anchored.before, next_block, anchored.after);
    let changed = next_readme != readme;

    Ok(MergeOutcome { next_readme, changed })
}

/// Newest first; undated rows after every dated row; community beats
/// machine on equal timestamps; original position breaks remaining ties.
fn compare_rows(a: &MergedRow, b: &MergedRow) -> Ordering {
    let by_ts = match (a.sort_ts, b.sort_ts) {
        (Some(ts_a), Some(ts_b)) => ts_b.cmp(&ts_a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    };

    by_ts
        .then_with(|| a.kind.cmp(&b.kind))
        .then_with(|| a.index.cmp(&b.index))
}
