//! CLI argument parsing and the offline `reconcile` subcommand.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use serde_json::json;

use jobboard_cms::parse_collection;
use jobboard_core::{reconcile, JobDetail, JobId, JobSummary};

/// Job board backend: CMS-backed listings, reconciled job details, application forwarding.
#[derive(Parser, Debug)]
#[command(name = "jobboard", version, about)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server (default).
    Serve,
    /// Pick the detail record for a job id from two local JSON collections.
    Reconcile {
        /// Summary collection: a JSON array or a CMS `{"data": [...]}` envelope.
        #[arg(long)]
        summaries: PathBuf,
        /// Detail collection, same formats as `--summaries`.
        #[arg(long)]
        details: PathBuf,
        /// Summary id to resolve.
        #[arg(long, allow_hyphen_values = true)]
        id: JobId,
    },
}

fn read_collection<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<Vec<T>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    parse_collection(&text).with_context(|| format!("parsing {}", path.display()))
}

/// Run the reconciler over two files and describe the outcome as JSON.
pub fn reconcile_files(
    summaries_path: &Path,
    details_path: &Path,
    id: JobId,
) -> anyhow::Result<serde_json::Value> {
    let summaries: Vec<JobSummary> = read_collection(summaries_path)?;
    let details: Vec<JobDetail> = read_collection(details_path)?;

    let Some(matched) = reconcile(id, &summaries, &details) else {
        anyhow::bail!("{} contains no detail records", details_path.display());
    };

    Ok(json!({
        "requested_id": id,
        "matched_by": matched.strategy,
        "job": matched.detail,
    }))
}
