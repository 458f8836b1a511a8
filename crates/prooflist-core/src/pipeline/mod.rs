//! Pipeline module: Sequential SHA-256 hashing of file batches
//!
//! Owns the ordered result list, enforces the cumulative size cap and
//! guarantees that at most one batch is in flight at a time.

mod config;
mod digest;
mod error;
mod file;
mod model;
mod names;
mod progress;
mod run;

pub use config::{PipelineConfig, MAX_BATCH_SIZE, YIELD_EVERY};
pub use digest::sha256_hex;
pub use error::{FileError, PipelineError};
pub use file::{DiskFile, FileSource, MemoryFile};
pub use model::{ExportRow, FileResult, ResultId};
pub use names::{normalize_file_name, split_file_name};
pub use progress::{
    callbacks, BatchObserver, BatchSummary, Callbacks, Progress, ProgressPhase, SilentObserver,
};
pub use run::HashPipeline;

#[cfg(test)]
pub(crate) mod tests;
