//! Batch progress reporting on the log

use prooflist_core::pipeline::{BatchObserver, Progress, ProgressPhase};
use tracing::{debug, info};

/// Logs per-file progress at debug level and a line per completed batch
#[derive(Debug, Default)]
pub struct ProgressLogger {
    last: Option<Progress>,
    completed: usize,
}

impl ProgressLogger {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent progress event
    #[must_use]
    pub fn last(&self) -> Option<&Progress> {
        self.last.as_ref()
    }

    /// Number of batches that ran to completion
    #[must_use]
    pub fn completed(&self) -> usize {
        self.completed
    }
}

impl BatchObserver for ProgressLogger {
    fn on_progress(&mut self, progress: &Progress) {
        if let ProgressPhase::Hashing { file } = &progress.phase {
            debug!(
                "[{}/{}] {:.0}% {}",
                progress.processed + 1,
                progress.total,
                progress.percent(),
                file
            );
        }
        self.last = Some(progress.clone());
    }

    fn on_complete(&mut self) {
        self.completed += 1;
        if let Some(progress) = &self.last {
            info!("Hashed {} of {} files", progress.processed, progress.total);
        }
    }
}
