//! Domain models for liftcheck
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`ChecklistItem`] - One named safety check with its evaluation rule
//! - [`Reading`] - A sensor value captured in a snapshot
//! - [`ItemResult`] - The outcome of evaluating one item
//! - [`InspectionReport`] - The immutable record of a full inspection run

mod checklist;
mod item;
mod reading;
mod report;
mod result;

pub use checklist::Checklist;
pub use item::{Category, CheckKind, ChecklistItem, Criticality, ThresholdBand};
pub use reading::{Reading, ReadingSnapshot, ReadingValue};
pub use report::{InspectionReport, Verdict};
pub use result::{ItemResult, ItemStatus};
