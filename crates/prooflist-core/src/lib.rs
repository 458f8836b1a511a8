//! prooflist-core: Core library for batch SHA-256 proof lists
//!
//! Files arrive either through a drop target or an explicit selection,
//! are hashed one after another, and land in an ordered result list that
//! is presented a page at a time.
//!
//! # Components
//!
//! - [`ingest`] - nested drag-and-drop state machine feeding file sets to a sink
//! - [`pipeline`] - single-flight hashing pipeline owning the result list
//! - [`window`] - pagination over the growing result list
//! - [`session`] - wiring of the three above, the way a front-end drives them
//! - [`export`] - CSV and plain-text renderings of the result list
//! - [`scanner`] - directory walking for callers that start from paths
//! - [`notice`] - success, warning and error signals for the user

pub mod export;
pub mod ingest;
pub mod notice;
pub mod pipeline;
pub mod scanner;
pub mod session;
pub mod window;

// Re-export commonly used types
pub use ingest::{DataItem, DataTransfer, DragEvent, DropOutcome, DropZone};
pub use notice::{Notice, NoticeLevel, Notifier, TracingNotifier};
pub use pipeline::{
    BatchObserver, BatchSummary, DiskFile, FileResult, FileSource, HashPipeline, MemoryFile,
    PipelineConfig, PipelineError, Progress, ResultId,
};
pub use scanner::Scanner;
pub use session::{HashSession, PageView};
pub use window::{PageLink, PageSize, Paginator};
