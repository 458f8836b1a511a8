//! Batch progress reporting

use super::error::FileError;

/// Label shown between two files while more work remains
pub const NEXT_FILE_LABEL: &str = "Processing next file...";

/// Where a batch stands when a progress event is emitted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressPhase {
    /// About to hash the named file
    Hashing { file: String },
    /// A file finished and more remain
    Between,
    /// Every file in the batch has been attempted
    Complete,
}

/// A progress event: `0 <= processed <= total`, monotonic within a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progress {
    pub processed: usize,
    pub total: usize,
    pub phase: ProgressPhase,
}

impl Progress {
    pub(crate) fn hashing(processed: usize, total: usize, file: &str) -> Self {
        Self {
            processed,
            total,
            phase: ProgressPhase::Hashing {
                file: file.to_string(),
            },
        }
    }

    pub(crate) fn finished(processed: usize, total: usize) -> Self {
        let phase = if processed < total {
            ProgressPhase::Between
        } else {
            ProgressPhase::Complete
        };
        Self {
            processed,
            total,
            phase,
        }
    }

    /// Text describing the current file slot
    #[must_use]
    pub fn current_label(&self) -> &str {
        match &self.phase {
            ProgressPhase::Hashing { file } => file,
            ProgressPhase::Between => NEXT_FILE_LABEL,
            ProgressPhase::Complete => "",
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == ProgressPhase::Complete
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.processed)
    }

    /// Completion percentage in `0.0..=100.0`
    #[must_use]
    pub fn percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.processed as f64 * 100.0 / self.total as f64
        }
    }
}

/// Receives progress and completion of a batch.
///
/// Both methods default to no-ops.
pub trait BatchObserver {
    fn on_progress(&mut self, _progress: &Progress) {}
    fn on_complete(&mut self) {}
}

/// Observer that ignores everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl BatchObserver for SilentObserver {}

/// Observer built from a progress closure and a completion closure
pub struct Callbacks<P, C> {
    on_progress: P,
    on_complete: Option<C>,
}

/// Pair a progress closure with a completion closure
pub fn callbacks<P, C>(on_progress: P, on_complete: C) -> Callbacks<P, C>
where
    P: FnMut(&Progress),
    C: FnOnce(),
{
    Callbacks {
        on_progress,
        on_complete: Some(on_complete),
    }
}

impl<P, C> BatchObserver for Callbacks<P, C>
where
    P: FnMut(&Progress),
    C: FnOnce(),
{
    fn on_progress(&mut self, progress: &Progress) {
        (self.on_progress)(progress);
    }

    fn on_complete(&mut self) {
        if let Some(on_complete) = self.on_complete.take() {
            on_complete();
        }
    }
}

/// Outcome of an accepted batch
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Files offered by the caller
    pub requested: usize,
    /// Files kept after applying the result cap
    pub accepted: usize,
    /// Files that produced a result
    pub hashed: usize,
    /// Files that were skipped, in batch order
    pub failures: Vec<FileError>,
}

impl BatchSummary {
    /// Whether the cap forced part of the input to be dropped
    #[must_use]
    pub fn truncated(&self) -> bool {
        self.accepted < self.requested
    }

    #[must_use]
    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}
