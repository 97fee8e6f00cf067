//! Integration tests for the sync orchestrator with mock collaborators.

use std::sync::Arc;

use chrono::{TimeZone, Utc};
use readme_sync::testing::{export_record, MockDocumentStore, MockJobExporter};
use readme_sync::{ReadmeSync, SyncError, JOBS_TABLE_END, JOBS_TABLE_START};

const BASE_URL: &str = "https://site.example";

fn readme_with_block(block: &str) -> String {
    format!("# didtheyghost.me\n\n{JOBS_TABLE_START}{block}{JOBS_TABLE_END}\n\nFooter.\n")
}

// =============================================================================
// Tests: full sync runs
// =============================================================================

#[tokio::test]
async fn test_sync_writes_merged_table_with_commit_message() {
    let exporter = Arc::new(MockJobExporter::new().with_records(vec![
        export_record(
            "11111111-1111-1111-1111-111111111111",
            "Beta Co",
            Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
        ),
        export_record(
            "22222222-2222-4222-8222-222222222222",
            "Acme",
            Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap(),
        ),
    ]));
    let store = Arc::new(
        MockDocumentStore::new().with_document(readme_with_block("\n"), "blob-sha-1"),
    );

    let sync = ReadmeSync::new(exporter, store.clone(), BASE_URL);
    let outcome = sync.sync().await.unwrap();

    assert!(outcome.did_change);
    assert_eq!(outcome.exported_count, 2);
    assert_eq!(
        outcome.commit_message.as_deref(),
        Some("sync(readme): update SG internship tech verified jobs (2)")
    );

    let calls = store.store_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].change_token, "blob-sha-1");
    assert_eq!(calls[0].message, "sync(readme): update SG internship tech verified jobs (2)");

    let beta_at = calls[0].new_content.find("Beta Co").unwrap();
    let acme_at = calls[0].new_content.find("Acme").unwrap();
    assert!(beta_at < acme_at);
}

#[tokio::test]
async fn test_second_sync_over_synced_document_does_not_write() {
    let records = vec![export_record(
        "11111111-1111-1111-1111-111111111111",
        "Beta Co",
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    )];

    let store = Arc::new(
        MockDocumentStore::new().with_document(readme_with_block("\n"), "blob-sha-1"),
    );
    let sync = ReadmeSync::new(
        Arc::new(MockJobExporter::new().with_records(records.clone())),
        store.clone(),
        BASE_URL,
    );
    let first = sync.sync().await.unwrap();
    assert!(first.did_change);

    let synced = store.store_calls()[0].new_content.clone();
    let store = Arc::new(MockDocumentStore::new().with_document(synced, "blob-sha-2"));
    let sync = ReadmeSync::new(
        Arc::new(MockJobExporter::new().with_records(records)),
        store.clone(),
        BASE_URL,
    );
    let second = sync.sync().await.unwrap();

    assert!(!second.did_change);
    assert_eq!(second.exported_count, 1);
    assert_eq!(second.commit_message, None);
    assert!(!store.stored());
}

#[tokio::test]
async fn test_community_rows_survive_a_full_sync() {
    let exporter = Arc::new(MockJobExporter::new().with_records(vec![export_record(
        "11111111-1111-1111-1111-111111111111",
        "Beta Co",
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    )]));
    let block = "\n| Indie Co | Intern | [site](https://indie.example) | https://indie.example/apply | 2024-01-01 |\n";
    let store = Arc::new(
        MockDocumentStore::new().with_document(readme_with_block(block), "blob-sha-1"),
    );

    let sync = ReadmeSync::new(exporter, store.clone(), BASE_URL);
    sync.sync().await.unwrap();

    let written = &store.store_calls()[0].new_content;
    assert!(written.contains("Indie Co"));
    assert!(written.contains(
        "<a href=\"https://indie.example/apply\"><img alt=\"Apply\" src=\"readme-buttons/apply.svg\" width=\"220\" /></a>"
    ));
    assert!(written.contains("01 Jan 2024"));
}

// =============================================================================
// Tests: failure paths
// =============================================================================

#[tokio::test]
async fn test_missing_anchors_surface_without_a_write() {
    let exporter = Arc::new(MockJobExporter::new());
    let store = Arc::new(MockDocumentStore::new().with_document("# No anchors here\n", "blob-sha-1"));

    let sync = ReadmeSync::new(exporter, store.clone(), BASE_URL);
    let result = sync.sync().await;

    assert!(matches!(result, Err(SyncError::MissingAnchors)));
    assert!(!store.stored());
}

#[tokio::test]
async fn test_stale_change_token_surfaces_as_store_error() {
    let exporter = Arc::new(MockJobExporter::new().with_records(vec![export_record(
        "11111111-1111-1111-1111-111111111111",
        "Beta Co",
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    )]));
    let store = Arc::new(
        MockDocumentStore::new()
            .with_document(readme_with_block("\n"), "blob-sha-1")
            .with_store_failure("409: README.md does not match blob-sha-1"),
    );

    let sync = ReadmeSync::new(exporter, store, BASE_URL);
    let result = sync.sync().await;

    match result {
        Err(SyncError::Store(source)) => {
            assert!(source.to_string().contains("409"));
        }
        other => panic!("expected store error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_fetch_failure_surfaces_as_store_error() {
    let exporter = Arc::new(MockJobExporter::new());
    let store = Arc::new(MockDocumentStore::new().with_fetch_failure("503 from contents API"));

    let sync = ReadmeSync::new(exporter, store, BASE_URL);
    let result = sync.sync().await;

    assert!(matches!(result, Err(SyncError::Store(_))));
}
