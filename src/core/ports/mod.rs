//! Port traits (interfaces) for external dependencies
//!
//! These traits define the boundaries between the evaluation engine and
//! external systems (sensor hardware, report rendering, historical storage).
//!
//! Implementations live in the `adapters` module.
//!
//! ## Design Principle
//!
//! The engine depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap implementations without changing business logic
//! - **Clarity**: Clear boundaries between layers

mod history_store;
mod reading_provider;
mod report_sink;

pub use history_store::{HistoryEntry, HistoryStore};
pub use reading_provider::{ReadingProvider, SensorError};
pub use report_sink::ReportSink;
