//! Rendering: canonical rows from export records, and the table block
//! itself.
//!
//! Machine rows are regenerated from scratch on every run, so everything
//! here must be deterministic; the no-op write guarantee rests on it.

use chrono::{DateTime, Utc};

use crate::dates::format_added_date;
use crate::types::ExportRecord;

/// Query string appended to internal links so site analytics can attribute
/// traffic coming from the synced table.
pub const UTM_PARAMS: &str = "utm_source=github&utm_medium=readme&utm_campaign=sg-intern-tech";

/// Placeholder for postings without an external application link.
pub const NO_APPLY_PLACEHOLDER: &str = "-";

/// Header and separator emitted when the existing document has none to
/// reuse.
pub const DEFAULT_HEADER_LINES: [&str; 2] = [
    "| Company | Role | Track | Application | Date Added |",
    "|---|---|---|---|---:|",
];

const BUTTON_WIDTH: u32 = 220;

/// A table row fully derived from one export record.
///
/// Cells are stored in final rendered form. `created_at` is kept alongside
/// so ordering never depends on re-parsing the rendered date.
#[derive(Debug, Clone)]
pub struct DesiredRow {
    pub company_markdown: String,
    pub role_markdown: String,
    pub track_markdown: String,
    pub apply_markdown: String,
    pub added_markdown: String,
    pub created_at: DateTime<Utc>,
}

impl DesiredRow {
    /// The row's rendered table line.
    pub fn to_line(&self) -> String {
        format!(
            "| {} | {} | {} | {} | {} |",
            self.company_markdown,
            self.role_markdown,
            self.track_markdown,
            self.apply_markdown,
            self.added_markdown
        )
    }
}

/// Build the canonical row for one export record. Pure.
///
/// `base_url` must not end with a slash; [`crate::sync::ReadmeSync`] strips
/// it once at construction.
pub fn desired_row(job: &ExportRecord, base_url: &str) -> DesiredRow {
    let track_href = format!("{base_url}/job/{}?{UTM_PARAMS}", job.job_posting_id);
    let company_href = format!("{base_url}/company/{}?{UTM_PARAMS}", job.company_id);

    let apply_markdown = match job.apply_url.as_deref() {
        Some(url) => button_anchor("Apply", "apply", &sanitize_href(url)),
        None => NO_APPLY_PLACEHOLDER.to_string(),
    };

    DesiredRow {
        company_markdown: format!("[{}]({company_href})", escape_pipes(&job.company_name)),
        role_markdown: escape_pipes(&job.title),
        track_markdown: button_anchor("Track", "track", &track_href),
        apply_markdown,
        added_markdown: format_added_date(job.created_at),
        created_at: job.created_at,
    }
}

/// A styled button: an image link served from the repo's `readme-buttons/`
/// directory, wrapped in a plain anchor.
pub(crate) fn button_anchor(label: &str, button: &str, href: &str) -> String {
    format!(
        "<a href=\"{href}\"><img alt=\"{label}\" src=\"readme-buttons/{button}.svg\" width=\"{BUTTON_WIDTH}\" /></a>"
    )
}

/// Escape the table delimiter so cell content can carry it.
pub fn escape_pipes(text: &str) -> String {
    text.replace('|', "\\|")
}

/// Make an untrusted URL safe inside a double-quoted href attribute in a
/// table cell: the delimiter is percent-encoded and the HTML attribute
/// characters are entity-escaped, ampersand first.
pub fn sanitize_href(url: &str) -> String {
    url.replace('|', "%7C")
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Join final-form cells into one table line.
pub fn render_row_line(cells: &[String]) -> String {
    format!("| {} |", cells.join(" | "))
}

/// Render the managed block: a leading blank line, header and separator,
/// one line per row, a trailing blank line.
///
/// Existing header lines are reused verbatim when at least a header and a
/// separator were found, keeping hand-tuned column alignment; otherwise the
/// fixed default pair is emitted.
pub fn render_table(header_lines: &[String], row_lines: &[String]) -> String {
    let mut lines: Vec<String> = Vec::with_capacity(row_lines.len() + 4);

    lines.push(String::new());
    if header_lines.len() >= 2 {
        lines.extend(header_lines.iter().cloned());
    } else {
        lines.extend(DEFAULT_HEADER_LINES.iter().map(|line| line.to_string()));
    }
    lines.extend(row_lines.iter().cloned());
    lines.push(String::new());

    lines.join("\n")
}
