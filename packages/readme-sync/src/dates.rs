//! Date parsing and rendering for the jobs table.
//!
//! The table displays dates as `DD Mon YYYY` in Singapore time. Community
//! contributors hand-enter dates in either ISO `YYYY-MM-DD` or the display
//! form, and both parse back. Singapore has no DST, so a fixed +08:00
//! offset stands in for the tz database.

use chrono::{DateTime, FixedOffset, NaiveDate, TimeZone, Utc};

/// Render format, e.g. `01 Jun 2024`.
const DISPLAY_FORMAT: &str = "%d %b %Y";
/// Parse format; `%B` also accepts the abbreviated month name.
const PARSE_DISPLAY_FORMAT: &str = "%d %B %Y";
const ISO_FORMAT: &str = "%Y-%m-%d";

/// UTC+8, the offset the table renders in.
pub fn singapore_offset() -> FixedOffset {
    FixedOffset::east_opt(8 * 3600).expect("+08:00 is a valid offset and should never fail")
}

/// Render an instant as `DD Mon YYYY` in Singapore time.
pub fn format_added_date(instant: DateTime<Utc>) -> String {
    instant
        .with_timezone(&singapore_offset())
        .format(DISPLAY_FORMAT)
        .to_string()
}

/// Parse a hand-entered date cell.
///
/// Accepts ISO `YYYY-MM-DD` first, then the display form `DD Mon YYYY`
/// (abbreviated or full month name, any case). Returns the instant the row
/// sorts by: midnight Singapore time on that date. `None` when the text is
/// not a recognizable date.
pub fn parse_added_date(text: &str) -> Option<DateTime<Utc>> {
    let trimmed = text.trim();
    let date = NaiveDate::parse_from_str(trimmed, ISO_FORMAT)
        .or_else(|_| NaiveDate::parse_from_str(trimmed, PARSE_DISPLAY_FORMAT))
        .ok()?;
    singapore_midnight(date)
}

fn singapore_midnight(date: NaiveDate) -> Option<DateTime<Utc>> {
    let midnight = date.and_hms_opt(0, 0, 0)?;
    let local = singapore_offset().from_local_datetime(&midnight).single()?;
    Some(local.with_timezone(&Utc))
}
