//! Test doubles for drop zone tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::ingest::{DropZone, DropZoneView};
use crate::notice::NoticeLog;
use crate::pipeline::MemoryFile;

/// View that records every visual change it is asked to apply
#[derive(Debug, Default)]
pub struct RecordingView {
    pub changes: Vec<bool>,
}

impl RecordingView {
    pub fn applied(&self) -> usize {
        self.changes.iter().filter(|c| **c).count()
    }

    pub fn cleared(&self) -> usize {
        self.changes.iter().filter(|c| !**c).count()
    }
}

impl DropZoneView for RecordingView {
    fn set_active(&mut self, active: bool) {
        self.changes.push(active);
    }
}

pub type TestZone = DropZone<
    MemoryFile,
    Box<dyn Fn() -> bool>,
    UnboundedSender<Vec<MemoryFile>>,
    RecordingView,
>;

pub struct Harness {
    pub zone: TestZone,
    pub busy: Arc<AtomicBool>,
    pub dropped: UnboundedReceiver<Vec<MemoryFile>>,
    pub log: Arc<NoticeLog>,
}

impl Harness {
    pub fn new() -> Self {
        let busy = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&busy);
        let (tx, rx) = mpsc::unbounded_channel();
        let log = Arc::new(NoticeLog::new());
        let zone = DropZone::new(
            Box::new(move || flag.load(Ordering::SeqCst)) as Box<dyn Fn() -> bool>,
            tx,
            RecordingView::default(),
            log.clone(),
        );
        Self {
            zone,
            busy,
            dropped: rx,
            log,
        }
    }

    pub fn set_busy(&self, busy: bool) {
        self.busy.store(busy, Ordering::SeqCst);
    }

    /// Every file set the sink has received so far
    pub fn drained(&mut self) -> Vec<Vec<MemoryFile>> {
        let mut sets = Vec::new();
        while let Ok(files) = self.dropped.try_recv() {
            sets.push(files);
        }
        sets
    }
}

pub fn files(names: &[&str]) -> Vec<MemoryFile> {
    names
        .iter()
        .map(|name| MemoryFile::new(*name, name.as_bytes()))
        .collect()
}
