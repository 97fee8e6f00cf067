//! Community row normalization.
//!
//! Community rows are preserved, not regenerated, so normalization touches
//! exactly two cells: a bare application URL becomes the styled button, and
//! the date cell is re-rendered to the canonical display form or visibly
//! marked when it cannot be parsed. Everything else passes through
//! untouched, which is what makes repeated runs converge to a fixed point.

use chrono::{DateTime, Utc};

use crate::dates::{format_added_date, parse_added_date};
use crate::table::render::{button_anchor, sanitize_href};

/// Column count of the canonical table: company, role, track, application,
/// date added. Shorter community rows are padded up to this; longer ones
/// keep their extra cells.
pub(crate) const EXPECTED_CELLS: usize = 5;

const APPLY_CELL_INDEX: usize = 3;
const DATE_CELL_INDEX: usize = 4;

/// Prefix marking a date cell that could not be parsed. Cells already
/// carrying it are left alone on later runs, so the marker is applied at
/// most once.
pub const INVALID_DATE_MARKER: &str = "\u{26a0}\u{fe0f} invalid date:";

/// A community row with its normalized cells and the instant it sorts by.
#[derive(Debug, Clone)]
pub struct NormalizedCommunityRow {
    pub cells: Vec<String>,
    /// `None` when the date cell did not parse; such rows sort after every
    /// dated row.
    pub added_at: Option<DateTime<Utc>>,
}

/// Normalize one community row's cells.
pub fn normalize_community_row(cells: &[String]) -> NormalizedCommunityRow {
    let mut cells: Vec<String> = cells.to_vec();
    if cells.len() < EXPECTED_CELLS {
        cells.resize(EXPECTED_CELLS, String::new());
    }

    cells[APPLY_CELL_INDEX] = normalize_apply_cell(&cells[APPLY_CELL_INDEX]);

    let (date_cell, added_at) = normalize_date_cell(&cells[DATE_CELL_INDEX]);
    cells[DATE_CELL_INDEX] = date_cell;

    NormalizedCommunityRow { cells, added_at }
}

/// A bare URL becomes the styled Apply button. Anything already styled, or
/// not a URL at all (like the `-` placeholder), is left alone.
fn normalize_apply_cell(cell: &str) -> String {
    let trimmed = cell.trim();
    if is_bare_url(trimmed) {
        button_anchor("Apply", "apply", &sanitize_href(trimmed))
    } else {
        cell.to_string()
    }
}

fn is_bare_url(text: &str) -> bool {
    (text.starts_with("http://") || text.starts_with("https://"))
        && !text.contains('<')
        && !text.contains('[')
        && !text.chars().any(char::is_whitespace)
}

fn normalize_date_cell(cell: &str) -> (String, Option<DateTime<Utc>>) {
    let trimmed = cell.trim();

    // Marked on a previous run; do not wrap the marker again
    if trimmed.starts_with(INVALID_DATE_MARKER) {
        return (cell.to_string(), None);
    }

    match parse_added_date(trimmed) {
        Some(instant) => (format_added_date(instant), Some(instant)),
        None => (format!("{INVALID_DATE_MARKER} \"{trimmed}\""), None),
    }
}
