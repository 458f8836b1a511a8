//! Test doubles for pipeline tests

use std::io;
use std::sync::Arc;

use futures::future::{self, BoxFuture};
use futures::FutureExt;
use tokio::sync::Notify;

use crate::notice::NoticeLog;
use crate::pipeline::{
    BatchObserver, FileSource, HashPipeline, MemoryFile, PipelineConfig, Progress,
};

/// A file whose read always fails
pub struct FailingFile {
    pub name: String,
}

impl FailingFile {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl FileSource for FailingFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        0
    }

    fn read(&self) -> BoxFuture<'_, io::Result<Vec<u8>>> {
        future::ready(Err(io::Error::new(
            io::ErrorKind::PermissionDenied,
            "read denied",
        )))
        .boxed()
    }
}

/// A file whose read parks until the gate is opened
pub struct GatedFile {
    pub name: String,
    pub gate: Arc<Notify>,
}

impl FileSource for GatedFile {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        4
    }

    fn read(&self) -> BoxFuture<'_, io::Result<Vec<u8>>> {
        let gate = Arc::clone(&self.gate);
        async move {
            gate.notified().await;
            Ok(b"slow".to_vec())
        }
        .boxed()
    }
}

/// Either kind of test file, so one batch can mix them
pub enum TestFile {
    Ok(MemoryFile),
    Failing(FailingFile),
}

impl FileSource for TestFile {
    fn name(&self) -> &str {
        match self {
            Self::Ok(f) => f.name(),
            Self::Failing(f) => f.name(),
        }
    }

    fn size(&self) -> u64 {
        match self {
            Self::Ok(f) => f.size(),
            Self::Failing(f) => f.size(),
        }
    }

    fn read(&self) -> BoxFuture<'_, io::Result<Vec<u8>>> {
        match self {
            Self::Ok(f) => f.read(),
            Self::Failing(f) => f.read(),
        }
    }
}

/// Observer that records everything it sees
#[derive(Default)]
pub struct RecordingObserver {
    pub events: Vec<Progress>,
    pub completions: usize,
}

impl BatchObserver for RecordingObserver {
    fn on_progress(&mut self, progress: &Progress) {
        self.events.push(progress.clone());
    }

    fn on_complete(&mut self) {
        self.completions += 1;
    }
}

pub fn pipeline_with_log(config: PipelineConfig) -> (HashPipeline, Arc<NoticeLog>) {
    let log = Arc::new(NoticeLog::new());
    let pipeline = HashPipeline::new(config, log.clone());
    (pipeline, log)
}

pub fn numbered_files(count: usize) -> Vec<MemoryFile> {
    (0..count)
        .map(|i| MemoryFile::new(format!("file{i}.txt"), format!("content {i}")))
        .collect()
}
