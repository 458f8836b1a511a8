//! Collaborators of the drop zone: busy probe and file sink

use tokio::sync::mpsc::UnboundedSender;

/// Answers whether the consumer of dropped files is currently busy
pub trait BusyProbe {
    fn is_busy(&self) -> bool;
}

impl<T: Fn() -> bool> BusyProbe for T {
    fn is_busy(&self) -> bool {
        self()
    }
}

/// Receives an accepted file set
pub trait DropSink<F> {
    fn files_dropped(&mut self, files: Vec<F>);
}

/// Hands each file set to an async consumer
impl<F> DropSink<F> for UnboundedSender<Vec<F>> {
    fn files_dropped(&mut self, files: Vec<F>) {
        if self.send(files).is_err() {
            tracing::warn!("Dropped files discarded: receiver has gone away");
        }
    }
}

/// Adapts a closure into a [`DropSink`]
pub struct FnSink<C>(pub C);

impl<F, C: FnMut(Vec<F>)> DropSink<F> for FnSink<C> {
    fn files_dropped(&mut self, files: Vec<F>) {
        (self.0)(files);
    }
}
