//! The drop zone state machine

use std::marker::PhantomData;
use std::sync::Arc;

use tracing::debug;

use super::sink::{BusyProbe, DropSink};
use super::transfer::{DataTransfer, DragEvent};
use super::view::DropZoneView;
use crate::notice::{Notice, Notifier};

/// Warning shown when files are dropped during a batch
pub const WAIT_FOR_PROCESSING: &str = "Please wait for current processing to complete";

/// Effect reported back for a drag-over
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    Copy,
}

/// What a drop did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The file set was forwarded to the sink
    Accepted { count: usize },
    /// Rejected because a batch is in flight
    Busy,
    /// The payload held no files
    NoFiles,
}

/// Drop target wrapping a busy probe, a file sink and a view.
///
/// `counter` tracks nested enter/leave pairs so that moving between child
/// elements does not flicker the active visuals.
pub struct DropZone<F, B, S, V> {
    counter: u32,
    busy: B,
    sink: S,
    view: V,
    notifier: Arc<dyn Notifier>,
    _files: PhantomData<fn(Vec<F>)>,
}

impl<F, B, S, V> DropZone<F, B, S, V>
where
    B: BusyProbe,
    S: DropSink<F>,
    V: DropZoneView,
{
    #[must_use]
    pub fn new(busy: B, sink: S, view: V, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            counter: 0,
            busy,
            sink,
            view,
            notifier,
            _files: PhantomData,
        }
    }

    pub fn on_drag_enter(&mut self) {
        if self.busy.is_busy() {
            return;
        }
        self.counter += 1;
        debug!("Drag enter, counter {}", self.counter);
        if self.counter == 1 {
            self.view.set_active(true);
        }
    }

    pub fn on_drag_leave(&mut self) {
        if self.busy.is_busy() {
            return;
        }
        if self.counter == 0 {
            debug!("Drag leave with counter already at 0");
            return;
        }
        self.counter -= 1;
        debug!("Drag leave, counter {}", self.counter);
        if self.counter == 0 {
            self.view.set_active(false);
        }
    }

    /// Suppress default handling so a drop is allowed
    pub fn on_drag_over(&mut self) -> DropEffect {
        DropEffect::Copy
    }

    pub fn on_drop(&mut self, transfer: DataTransfer<F>) -> DropOutcome {
        self.reset();

        if self.busy.is_busy() {
            self.notifier.notify(Notice::warning(WAIT_FOR_PROCESSING));
            return DropOutcome::Busy;
        }

        let files = transfer.into_files();
        if files.is_empty() {
            debug!("Drop carried no files");
            return DropOutcome::NoFiles;
        }

        self.forward(files)
    }

    /// Feed a file set as if it had been dropped, bypassing extraction
    pub fn simulate_drop(&mut self, files: Vec<F>) -> DropOutcome {
        if self.busy.is_busy() {
            self.notifier.notify(Notice::warning(WAIT_FOR_PROCESSING));
            return DropOutcome::Busy;
        }
        if files.is_empty() {
            return DropOutcome::NoFiles;
        }
        self.forward(files)
    }

    /// Dispatch one event. Only drops produce an outcome.
    pub fn handle(&mut self, event: DragEvent<F>) -> Option<DropOutcome> {
        match event {
            DragEvent::Enter => self.on_drag_enter(),
            DragEvent::Leave => self.on_drag_leave(),
            DragEvent::Over => {
                self.on_drag_over();
            }
            DragEvent::Drop(transfer) => return Some(self.on_drop(transfer)),
        }
        None
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.counter > 0
    }

    #[must_use]
    pub fn counter(&self) -> u32 {
        self.counter
    }

    /// Force the counter to 0 and clear the visuals
    pub fn reset(&mut self) {
        self.counter = 0;
        self.view.set_active(false);
    }

    /// Detach from the target, leaving it in its idle state
    pub fn teardown(mut self) -> V {
        self.reset();
        self.view
    }

    pub fn set_sink(&mut self, sink: S) {
        self.sink = sink;
    }

    pub fn set_busy_probe(&mut self, busy: B) {
        self.busy = busy;
    }

    #[must_use]
    pub fn view(&self) -> &V {
        &self.view
    }

    fn forward(&mut self, files: Vec<F>) -> DropOutcome {
        let count = files.len();
        debug!("Forwarding {} dropped files", count);
        self.sink.files_dropped(files);
        DropOutcome::Accepted { count }
    }
}
