//! End-to-end merge scenarios against realistic README documents.

use chrono::{DateTime, TimeZone, Utc};
use readme_sync::table::{desired_row, split_row_cells};
use readme_sync::{merge_jobs_table, ExportRecord, SyncError, JOBS_TABLE_END, JOBS_TABLE_START};

const BASE_URL: &str = "https://site.example";

fn record(
    job_posting_id: &str,
    company_name: &str,
    title: &str,
    created_at: DateTime<Utc>,
    apply_url: Option<&str>,
) -> ExportRecord {
    ExportRecord {
        job_posting_id: job_posting_id.to_string(),
        title: title.to_string(),
        created_at,
        apply_url: apply_url.map(|url| url.to_string()),
        company_id: "9b2f1c44-7f86-4da8-9e31-1f2a3b4c5d6e".to_string(),
        company_name: company_name.to_string(),
    }
}

// =============================================================================
// Concrete scenario: one community row, one exported posting
// =============================================================================

fn community_readme() -> String {
    format!(
        "# didtheyghost.me\n\nVerified SG internship tech jobs.\n\n{JOBS_TABLE_START}\n\
         | Company | Role | Track | Application | Date Added |\n\
         |---|---|---|---|---:|\n\
         | Acme | SWE | [TRACK](https://x/job/abc) | https://acme.com/apply | 2024-01-01 |\n\
         {JOBS_TABLE_END}\n\nMaintained automatically.\n"
    )
}

fn beta_co_export() -> Vec<readme_sync::DesiredRow> {
    let beta = record(
        "11111111-1111-1111-1111-111111111111",
        "Beta Co",
        "Backend Intern",
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        None,
    );
    vec![desired_row(&beta, BASE_URL)]
}

#[test]
fn test_merge_adds_machine_row_above_preserved_community_row() {
    let outcome = merge_jobs_table(&community_readme(), &beta_co_export()).unwrap();

    assert!(outcome.changed);

    // Machine row: exported posting, placeholder apply cell, display date
    let beta_line = format!(
        "| [Beta Co]({BASE_URL}/company/9b2f1c44-7f86-4da8-9e31-1f2a3b4c5d6e?utm_source=github&utm_medium=readme&utm_campaign=sg-intern-tech) \
         | Backend Intern \
         | <a href=\"{BASE_URL}/job/11111111-1111-1111-1111-111111111111?utm_source=github&utm_medium=readme&utm_campaign=sg-intern-tech\"><img alt=\"Track\" src=\"readme-buttons/track.svg\" width=\"220\" /></a> \
         | - \
         | 01 Jun 2024 |"
    );
    assert!(outcome.next_readme.contains(&beta_line));

    // Community row: track link kept, bare apply URL styled, date re-rendered
    let acme_line = "| Acme | SWE | [TRACK](https://x/job/abc) \
                     | <a href=\"https://acme.com/apply\"><img alt=\"Apply\" src=\"readme-buttons/apply.svg\" width=\"220\" /></a> \
                     | 01 Jan 2024 |";
    assert!(outcome.next_readme.contains(acme_line));

    // Newer machine row sorts above the community row
    let beta_at = outcome.next_readme.find("Beta Co").unwrap();
    let acme_at = outcome.next_readme.find("| Acme |").unwrap();
    assert!(beta_at < acme_at);
}

#[test]
fn test_rerunning_the_merge_on_its_own_output_is_a_no_op() {
    let first = merge_jobs_table(&community_readme(), &beta_co_export()).unwrap();
    let second = merge_jobs_table(&first.next_readme, &beta_co_export()).unwrap();

    assert!(!second.changed);
    assert_eq!(second.next_readme, first.next_readme);
}

#[test]
fn test_document_missing_the_end_anchor_raises_missing_anchors() {
    let readme = format!("# Jobs\n\n{JOBS_TABLE_START}\n| a | b | c |\n");
    let result = merge_jobs_table(&readme, &beta_co_export());
    assert!(matches!(result, Err(SyncError::MissingAnchors)));
}

// =============================================================================
// Properties
// =============================================================================

#[test]
fn test_text_outside_the_anchors_is_byte_identical() {
    let readme = community_readme();
    let outcome = merge_jobs_table(&readme, &beta_co_export()).unwrap();

    let prefix_end = readme.find(JOBS_TABLE_START).unwrap() + JOBS_TABLE_START.len();
    let suffix_start = readme.find(JOBS_TABLE_END).unwrap();

    assert!(outcome.next_readme.starts_with(&readme[..prefix_end]));
    assert!(outcome.next_readme.ends_with(&readme[suffix_start..]));
}

#[test]
fn test_stale_machine_rows_are_replaced_wholesale() {
    // Yesterday's render of the same posting, with a title that has since
    // been corrected on the site
    let stale = record(
        "11111111-1111-1111-1111-111111111111",
        "Beta Co",
        "Bakend Intern",
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        None,
    );
    let stale_line = desired_row(&stale, BASE_URL).to_line();
    let readme = format!("{JOBS_TABLE_START}\n{stale_line}\n{JOBS_TABLE_END}");

    let current = record(
        "11111111-1111-1111-1111-111111111111",
        "Beta Co",
        "Backend Intern",
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        None,
    );
    let current_row = desired_row(&current, BASE_URL);
    let outcome = merge_jobs_table(&readme, &[current_row.clone()]).unwrap();

    assert!(outcome.next_readme.contains(&current_row.to_line()));
    assert!(!outcome.next_readme.contains("Bakend"));
    assert!(!outcome.next_readme.contains("01 May 2024"));
}

#[test]
fn test_removed_postings_disappear_while_community_rows_survive() {
    let old = record(
        "11111111-1111-1111-1111-111111111111",
        "Gone Co",
        "Expired Intern",
        Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        None,
    );
    let old_line = desired_row(&old, BASE_URL).to_line();
    let readme = format!(
        "{JOBS_TABLE_START}\n{old_line}\n| Indie Co | Intern | - | - | 2024-04-01 |\n{JOBS_TABLE_END}"
    );

    let outcome = merge_jobs_table(&readme, &[]).unwrap();

    assert!(!outcome.next_readme.contains("Gone Co"));
    assert!(outcome.next_readme.contains("Indie Co"));
}

#[test]
fn test_sort_interleaves_community_rows_by_date() {
    let t1 = record(
        "11111111-1111-1111-1111-111111111111",
        "First Co",
        "Intern",
        Utc.with_ymd_and_hms(2024, 6, 9, 12, 0, 0).unwrap(),
        None,
    );
    let t2 = record(
        "22222222-2222-4222-8222-222222222222",
        "Second Co",
        "Intern",
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
        None,
    );
    let t3 = record(
        "33333333-3333-4333-8333-333333333333",
        "Third Co",
        "Intern",
        Utc.with_ymd_and_hms(2024, 5, 20, 12, 0, 0).unwrap(),
        None,
    );
    let desired = vec![
        desired_row(&t1, BASE_URL),
        desired_row(&t2, BASE_URL),
        desired_row(&t3, BASE_URL),
    ];

    // One community row dated between T1 and T2, one with no usable date
    let readme = format!(
        "{JOBS_TABLE_START}\n\
         | Between Co | Intern | - | - | 2024-06-05 |\n\
         | Undated Co | Intern | - | - | soon |\n\
         {JOBS_TABLE_END}"
    );

    let outcome = merge_jobs_table(&readme, &desired).unwrap();

    let positions: Vec<usize> = ["First Co", "Between Co", "Second Co", "Third Co", "Undated Co"]
        .iter()
        .map(|needle| outcome.next_readme.find(needle).unwrap())
        .collect();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn test_escaped_company_name_round_trips_through_the_splitter() {
    let piped = record(
        "11111111-1111-1111-1111-111111111111",
        "Pipe|Works",
        "Intern",
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        None,
    );
    let row = desired_row(&piped, BASE_URL);

    assert!(row.company_markdown.contains("Pipe\\|Works"));

    let cells = split_row_cells(&row.to_line());
    assert_eq!(cells.len(), 5);
    assert!(cells[0].contains("Pipe|Works"));
    assert!(!cells[0].contains('\\'));
}
