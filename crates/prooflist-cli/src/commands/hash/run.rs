//! Hash command: Scan paths, hash them batch by batch, print a page

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use prooflist_core::export::default_export_filename;
use prooflist_core::ingest::{DropOutcome, DropZone, DropZoneView};
use prooflist_core::notice::{Notice, Notifier, TracingNotifier};
use prooflist_core::pipeline::{DiskFile, HashPipeline, PipelineConfig, PipelineError};
use prooflist_core::scanner::Scanner;
use prooflist_core::session::HashSession;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use super::observer::ProgressLogger;
use super::render::render_output;
use crate::commands::types::HashArgs;

/// The terminal has no drop target to highlight
struct TraceView;

impl DropZoneView for TraceView {
    fn set_active(&mut self, active: bool) {
        debug!("Drop target active: {}", active);
    }
}

/// Run the hash command
///
/// # Errors
/// Returns an error if `--page` is out of range or the CSV cannot be written.
pub async fn run(args: &HashArgs) -> Result<()> {
    let notifier: Arc<dyn Notifier> = Arc::new(TracingNotifier);
    let mut session = hash_paths(args, notifier).await?;

    if let Some(page) = args.page {
        if !session.go_to_page(page) {
            bail!(
                "Page {} is out of range (1-{})",
                page,
                session.page_state().total_pages
            );
        }
    }

    print!("{}", render_output(&session, args)?);

    if let Some(target) = &args.csv {
        let path = target.clone().unwrap_or_else(|| {
            PathBuf::from(format!(
                "{}.csv",
                default_export_filename(&chrono::Local::now())
            ))
        });
        write_csv(&session, &path)?;
    }

    Ok(())
}

/// Scan every path into its own batch, in argument order
#[must_use]
pub fn collect_batches(args: &HashArgs) -> Vec<Vec<DiskFile>> {
    args.paths
        .iter()
        .map(|path| {
            let files: Vec<_> = Scanner::new(path)
                .skip_hidden(args.skip_hidden)
                .respect_ignore(!args.no_ignore)
                .scan()
                .collect();
            if files.is_empty() {
                warn!("No files found under {}", path.display());
            }
            files
        })
        .collect()
}

/// Hash every path argument and return the filled session.
///
/// Each batch goes through a drop zone into a channel, the same route a
/// dropped file set takes, and is ingested once the previous one finished.
///
/// # Errors
/// Returns an error if the drop zone could not hand a batch to the session.
pub async fn hash_paths(args: &HashArgs, notifier: Arc<dyn Notifier>) -> Result<HashSession> {
    let config = PipelineConfig::default().with_max_batch_size(args.max_batch_size);
    let pipeline = HashPipeline::new(config, notifier);
    let mut session = HashSession::new(pipeline.clone(), args.page_size);

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut zone = DropZone::new(pipeline.clone(), tx, TraceView, pipeline.notifier());

    let mut forwarded = 0;
    for files in collect_batches(args) {
        match zone.simulate_drop(files) {
            DropOutcome::Accepted { count } => {
                debug!("Queued batch of {} files", count);
                forwarded += 1;
            }
            DropOutcome::NoFiles => {}
            DropOutcome::Busy => bail!("Drop zone reported busy before hashing started"),
        }
    }
    drop(zone.teardown());

    let mut progress = ProgressLogger::new();
    while let Some(files) = rx.recv().await {
        match session.ingest(files, &mut progress).await {
            Ok(summary) => {
                for failure in &summary.failures {
                    warn!("Skipped {}", failure.file_name());
                    debug!("{}", failure);
                }
            }
            Err(PipelineError::LimitReached { limit }) => {
                debug!("Batch rejected, result list holds {} files", limit);
            }
            Err(e) => return Err(e).context("Hashing batch failed"),
        }
    }

    info!(
        "{} batches, {} results",
        forwarded,
        session.pipeline().len()
    );
    Ok(session)
}

/// Write the CSV export of every result to `path`
///
/// # Errors
/// Returns an error if the file cannot be written.
pub fn write_csv(session: &HashSession, path: &Path) -> Result<()> {
    std::fs::write(path, session.csv())
        .with_context(|| format!("Failed to write CSV to {}", path.display()))?;
    session
        .pipeline()
        .notifier()
        .notify(Notice::success("File downloaded successfully!"));
    info!("Wrote {} results to {}", session.pipeline().len(), path.display());
    Ok(())
}
