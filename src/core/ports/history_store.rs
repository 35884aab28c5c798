//! History store port
//!
//! Defines the interface for append-only historical persistence of reports.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{InspectionReport, ItemStatus, Verdict};

/// A summary row for one stored inspection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Elevator that was inspected
    pub elevator_id: String,
    /// When the inspection ran
    pub timestamp: DateTime<Utc>,
    /// Overall verdict
    pub verdict: Verdict,
    /// Number of passing results
    pub passed: usize,
    /// Number of warning results
    pub warnings: usize,
    /// Number of critical results
    pub critical: usize,
    /// Number of unknown results
    pub unknown: usize,
}

impl From<&InspectionReport> for HistoryEntry {
    fn from(report: &InspectionReport) -> Self {
        Self {
            elevator_id: report.elevator_id.clone(),
            timestamp: report.timestamp,
            verdict: report.verdict,
            passed: report.count(ItemStatus::Pass),
            warnings: report.count(ItemStatus::Warning),
            critical: report.count(ItemStatus::Critical),
            unknown: report.count(ItemStatus::Unknown),
        }
    }
}

/// Append-only storage for inspection reports
///
/// Reports are keyed by (elevator id, timestamp); stored reports are never
/// rewritten.
pub trait HistoryStore: Send + Sync {
    /// Append a finished report to the store
    fn append(&self, report: &InspectionReport) -> anyhow::Result<()>;

    /// List stored inspections for an elevator, most recent first
    fn list(&self, elevator_id: &str) -> anyhow::Result<Vec<HistoryEntry>>;
}
