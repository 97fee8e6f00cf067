//! README sync CLI.
//!
//! Runs one sync from a JSON export snapshot into the configured GitHub
//! README. Prints a single JSON result line for the calling automation.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use readme_sync::exporters::JsonFileExporter;
use readme_sync::stores::GithubDocumentStore;
use readme_sync::{ReadmeSync, SyncConfig};

#[derive(Parser)]
#[command(name = "sync_readme")]
#[command(about = "Sync verified job postings into the README jobs table")]
struct Cli {
    /// JSON snapshot of the export query (array of export records)
    #[arg(long)]
    export: PathBuf,
}

#[derive(Serialize)]
struct Response {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    did_change: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    exported_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    commit_message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn output(resp: Response) {
    println!("{}", serde_json::to_string(&resp).unwrap());
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,readme_sync=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();

    let cli = Cli::parse();

    let config = SyncConfig::from_env().context("Failed to load sync configuration")?;

    let exporter = Arc::new(JsonFileExporter::new(cli.export));
    let store = Arc::new(GithubDocumentStore::from_config(&config));
    let sync = ReadmeSync::new(exporter, store, config.site_base_url.clone());

    match sync.sync().await {
        Ok(outcome) => {
            output(Response {
                success: true,
                did_change: Some(outcome.did_change),
                exported_count: Some(outcome.exported_count),
                commit_message: outcome.commit_message,
                error: None,
            });
        }
        Err(e) => {
            output(Response {
                success: false,
                did_change: None,
                exported_count: None,
                commit_message: None,
                error: Some(e.to_string()),
            });
        }
    }

    Ok(())
}
