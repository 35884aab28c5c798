//! Report sink port
//!
//! Defines the interface for collaborators that consume a finished report.

use crate::core::models::InspectionReport;

/// Consumer of a finished inspection report
///
/// Implementations render to the terminal, serialize to JSON, or forward to
/// other destinations. Sinks receive the report as a read-only value and
/// never mutate it.
pub trait ReportSink: Send + Sync {
    /// Emit the report to this sink's destination
    fn emit(&self, report: &InspectionReport) -> anyhow::Result<()>;
}
