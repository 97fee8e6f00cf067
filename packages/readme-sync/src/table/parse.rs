//! Markdown table parsing and row classification.
//!
//! The block between the anchors holds one pipe-delimited table. Header and
//! separator lines are captured verbatim for reuse, data rows are split
//! into cells with `\|` treated as a literal pipe, and each data row is
//! classified machine or community by whether a job posting id can be
//! extracted from its track cell.

use lazy_static::lazy_static;
use regex::Regex;
use uuid::Uuid;

lazy_static! {
    // Current column names plus the legacy set still found in older tables
    static ref HEADER_CELL_REGEX: Regex =
        Regex::new(r"(?i)^(company|role|track|application|apply|date added|added)$").unwrap();

    // |---|, |:---:| and friends
    static ref SEPARATOR_CELL_REGEX: Regex = Regex::new(r"^:?-+:?$").unwrap();

    // Job detail path segment carrying the posting id
    static ref TRACK_ID_REGEX: Regex = Regex::new(r"/job/([0-9a-fA-F-]{36})").unwrap();
}

/// Index of the track column. Both the machine renderer and community
/// contributors put the job detail link there, so the posting id stays
/// discoverable at a fixed position without a dedicated id column.
const TRACK_CELL_INDEX: usize = 2;

/// A data row found in the existing document.
#[derive(Debug, Clone)]
pub struct ExistingRow {
    pub raw_line: String,
    pub cells: Vec<String>,
    /// Extracted posting id; `None` marks a community row.
    pub job_posting_id: Option<String>,
}

/// The parsed block: header and separator lines verbatim, data rows, and
/// whatever else was in there.
#[derive(Debug, Clone, Default)]
pub struct ParsedBlock {
    pub header_lines: Vec<String>,
    pub rows: Vec<ExistingRow>,
    /// Blank and prose lines, in order. Captured for completeness; the
    /// renderer does not re-emit them.
    pub other_lines: Vec<String>,
}

/// Parse the anchored block into headers, data rows, and everything else.
pub fn parse_block(block: &str) -> ParsedBlock {
    let mut parsed = ParsedBlock::default();

    for line in block.split('\n') {
        let trimmed = line.trim();

        if trimmed.is_empty() || !is_table_row_line(trimmed) {
            parsed.other_lines.push(line.to_string());
            continue;
        }

        let cells = split_row_cells(trimmed);

        let looks_like_header = cells.iter().any(|cell| HEADER_CELL_REGEX.is_match(cell));
        let looks_like_separator = cells.iter().all(|cell| SEPARATOR_CELL_REGEX.is_match(cell));

        if looks_like_header || looks_like_separator {
            parsed.header_lines.push(trimmed.to_string());
            continue;
        }

        let job_posting_id = extract_job_posting_id(&cells);
        parsed.rows.push(ExistingRow {
            raw_line: trimmed.to_string(),
            cells,
            job_posting_id,
        });
    }

    parsed
}

/// A table row starts and ends with `|` and has at least one interior cell.
fn is_table_row_line(line: &str) -> bool {
    line.starts_with('|') && line.ends_with('|') && line.matches('|').count() >= 2
}

/// Split a table row line into trimmed cell strings.
///
/// A `|` preceded by an odd-length run of backslashes is literal cell
/// content and the escaping backslash is consumed; after an even-length run
/// it delimits cells and the backslashes stay in the content.
pub fn split_row_cells(line: &str) -> Vec<String> {
    let trimmed = line.trim();
    let interior = trimmed
        .strip_prefix('|')
        .and_then(|rest| rest.strip_suffix('|'))
        .unwrap_or(trimmed);

    let mut cells = Vec::new();
    let mut current = String::new();
    let mut backslashes = 0usize;

    for ch in interior.chars() {
        match ch {
            '\\' => backslashes += 1,
            '|' => {
                if backslashes % 2 == 1 {
                    flush_backslashes(&mut current, backslashes - 1);
                    current.push('|');
                } else {
                    flush_backslashes(&mut current, backslashes);
                    cells.push(current.trim().to_string());
                    current.clear();
                }
                backslashes = 0;
            }
            _ => {
                flush_backslashes(&mut current, backslashes);
                backslashes = 0;
                current.push(ch);
            }
        }
    }

    flush_backslashes(&mut current, backslashes);
    cells.push(current.trim().to_string());

    cells
}

fn flush_backslashes(target: &mut String, count: usize) {
    for _ in 0..count {
        target.push('\\');
    }
}

/// Pull the job posting id out of a row's track cell.
///
/// The captured token must also parse as a real UUID; look-alike garbage
/// classifies the row as community so it is preserved rather than
/// regenerated away.
pub fn extract_job_posting_id(cells: &[String]) -> Option<String> {
    let track_cell = cells.get(TRACK_CELL_INDEX)?;
    let captured = TRACK_ID_REGEX.captures(track_cell)?.get(1)?.as_str();
    Uuid::parse_str(captured).ok()?;
    Some(captured.to_string())
}
