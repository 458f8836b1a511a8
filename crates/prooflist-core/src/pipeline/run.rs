//! The hashing pipeline itself

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use super::config::PipelineConfig;
use super::digest::sha256_hex;
use super::error::{FileError, PipelineError};
use super::file::FileSource;
use super::model::{ExportRow, FileResult, ResultId};
use super::names::split_file_name;
use super::progress::{BatchObserver, BatchSummary, Progress};
use crate::notice::{Notice, Notifier, TracingNotifier};

/// Cloneable handle to a single result list and its busy flag.
///
/// Clones share state, so a drop target can ask [`HashPipeline::is_busy`]
/// while another holder is awaiting [`HashPipeline::submit_batch`].
#[derive(Clone)]
pub struct HashPipeline {
    shared: Arc<Shared>,
}

struct Shared {
    config: PipelineConfig,
    notifier: Arc<dyn Notifier>,
    busy: AtomicBool,
    batch_total: AtomicUsize,
    batch_processed: AtomicUsize,
    results: Mutex<Vec<FileResult>>,
}

/// Holds the busy flag for the lifetime of a batch
struct BusyGuard<'a> {
    shared: &'a Shared,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.shared.batch_total.store(0, Ordering::Release);
        self.shared.batch_processed.store(0, Ordering::Release);
        self.shared.busy.store(false, Ordering::Release);
    }
}

impl Default for HashPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default(), Arc::new(TracingNotifier))
    }
}

impl std::fmt::Debug for HashPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HashPipeline")
            .field("config", &self.shared.config)
            .field("busy", &self.is_busy())
            .field("len", &self.len())
            .finish()
    }
}

impl HashPipeline {
    /// Create a pipeline with an empty result list
    #[must_use]
    pub fn new(config: PipelineConfig, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            shared: Arc::new(Shared {
                config,
                notifier,
                busy: AtomicBool::new(false),
                batch_total: AtomicUsize::new(0),
                batch_processed: AtomicUsize::new(0),
                results: Mutex::new(Vec::new()),
            }),
        }
    }

    /// The notifier this pipeline reports to
    #[must_use]
    pub fn notifier(&self) -> Arc<dyn Notifier> {
        Arc::clone(&self.shared.notifier)
    }

    /// Whether a batch is in flight
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.shared.busy.load(Ordering::Acquire)
    }

    /// `(processed, total)` of the in-flight batch, `None` when idle
    #[must_use]
    pub fn batch_progress(&self) -> Option<(usize, usize)> {
        if !self.is_busy() {
            return None;
        }
        Some((
            self.shared.batch_processed.load(Ordering::Acquire),
            self.shared.batch_total.load(Ordering::Acquire),
        ))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.results().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.results().is_empty()
    }

    /// Snapshot of all results in insertion order
    #[must_use]
    pub fn snapshot(&self) -> Vec<FileResult> {
        self.results().clone()
    }

    /// Ordered `(hash, name, extension)` rows for export
    #[must_use]
    pub fn export_rows(&self) -> Vec<ExportRow> {
        self.results().iter().map(ExportRow::from).collect()
    }

    /// Remove one result. Returns `false` (and changes nothing) if the id is unknown.
    pub fn remove_by_id(&self, id: &ResultId) -> bool {
        let mut results = self.results();
        match results.iter().position(|r| &r.id == id) {
            Some(index) => {
                results.remove(index);
                debug!("Removed result {}", id);
                true
            }
            None => false,
        }
    }

    /// Drop every result.
    ///
    /// # Errors
    /// Returns [`PipelineError::Busy`] while a batch is in flight.
    pub fn clear(&self) -> Result<(), PipelineError> {
        if self.is_busy() {
            return Err(PipelineError::Busy);
        }
        self.results().clear();
        debug!("Cleared all results");
        Ok(())
    }

    /// Hash `files` in order and append a result for each readable one.
    ///
    /// The input is truncated to the free capacity. A file that cannot be
    /// read is reported and skipped without stopping the batch.
    ///
    /// # Errors
    /// Returns [`PipelineError::Busy`] if another batch is running and
    /// [`PipelineError::LimitReached`] if the result list is already full.
    pub async fn submit_batch<F, O>(
        &self,
        mut files: Vec<F>,
        observer: &mut O,
    ) -> Result<BatchSummary, PipelineError>
    where
        F: FileSource,
        O: BatchObserver + ?Sized,
    {
        let guard = self.claim()?;

        let requested = files.len();
        let limit = self.shared.config.max_batch_size;
        let current = self.len();

        if current + requested > limit {
            let free = limit.saturating_sub(current);
            if free == 0 {
                self.notify(Notice::error(format!(
                    "Maximum limit of {limit} files reached. Please clear existing files first."
                )));
                return Err(PipelineError::LimitReached { limit });
            }
            self.notify(Notice::warning(format!(
                "Only processing first {free} files. Maximum limit is {limit} files."
            )));
            files.truncate(free);
        }

        let mut summary = BatchSummary {
            requested,
            accepted: files.len(),
            ..BatchSummary::default()
        };

        if files.is_empty() {
            return Ok(summary);
        }

        let total = files.len();
        self.shared.batch_total.store(total, Ordering::Release);
        info!("Hashing {} files", total);

        for (index, file) in files.iter().enumerate() {
            observer.on_progress(&Progress::hashing(index, total, file.name()));
            debug!(
                "Processing file {}/{}: {} ({} bytes)",
                index + 1,
                total,
                file.name(),
                file.size()
            );

            match hash_file(file).await {
                Ok(result) => {
                    debug!("Hash calculated for {}: {}...", file.name(), &result.hash[..8]);
                    self.results().push(result);
                    summary.hashed += 1;
                }
                Err(e) => {
                    debug!("Skipping file: {}", e);
                    self.notify(Notice::error(format!("Error processing {}", file.name())));
                    summary.failures.push(e);
                }
            }

            let processed = index + 1;
            self.shared
                .batch_processed
                .store(processed, Ordering::Release);
            observer.on_progress(&Progress::finished(processed, total));

            let yield_every = self.shared.config.yield_every;
            if yield_every > 0 && processed % yield_every == 0 && processed < total {
                tokio::task::yield_now().await;
            }
        }

        drop(guard);

        info!(
            "Batch complete: {} hashed, {} failed, {} results total",
            summary.hashed,
            summary.failed(),
            self.len()
        );
        self.notify(Notice::success(format!(
            "Successfully processed {} file{}!",
            total,
            if total > 1 { "s" } else { "" }
        )));
        observer.on_complete();

        Ok(summary)
    }

    fn claim(&self) -> Result<BusyGuard<'_>, PipelineError> {
        if self
            .shared
            .busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            self.notify(Notice::warning(
                "Files are already being processed. Please wait...",
            ));
            return Err(PipelineError::Busy);
        }
        Ok(BusyGuard {
            shared: &self.shared,
        })
    }

    fn notify(&self, notice: Notice) {
        self.shared.notifier.notify(notice);
    }

    fn results(&self) -> MutexGuard<'_, Vec<FileResult>> {
        self.shared
            .results
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

async fn hash_file<F: FileSource>(file: &F) -> Result<FileResult, FileError> {
    let bytes = file.read().await.map_err(|source| FileError::Read {
        name: file.name().to_string(),
        source,
    })?;
    let hash = sha256_hex(&bytes);
    let (name, extension) = split_file_name(file.name());

    Ok(FileResult {
        id: ResultId::generate(),
        name,
        extension,
        hash,
    })
}
