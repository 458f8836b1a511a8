//! Ingest module: Drag-and-drop input state machine
//!
//! Tracks nested enter/leave notifications over a drop target with a
//! counter, drives the target's "active" visuals, and forwards dropped file
//! sets to a sink. Events are ignored while the hashing side is busy.

mod sink;
mod transfer;
mod view;
mod zone;

pub use sink::{BusyProbe, DropSink, FnSink};
pub use transfer::{DataItem, DataTransfer, DragEvent, ItemKind};
pub use view::{ClassList, DropZoneOptions, DropZoneView};
pub use zone::{DropEffect, DropOutcome, DropZone, WAIT_FOR_PROCESSING};

#[cfg(test)]
mod tests;
