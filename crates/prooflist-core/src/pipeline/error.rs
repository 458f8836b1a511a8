//! Pipeline errors

use std::io;

use thiserror::Error;

/// Reasons a whole batch submission is refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PipelineError {
    #[error("a batch is already being processed")]
    Busy,

    #[error("maximum limit of {limit} files reached")]
    LimitReached { limit: usize },
}

/// Failure of a single file inside a batch
#[derive(Debug, Error)]
pub enum FileError {
    #[error("failed to read {name}: {source}")]
    Read {
        name: String,
        #[source]
        source: io::Error,
    },
}

impl FileError {
    /// Name of the file that failed
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self {
            Self::Read { name, .. } => name,
        }
    }
}
