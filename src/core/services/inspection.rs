//! The inspection run driver
//!
//! Evaluates every checklist item against a snapshot captured before this
//! function is called, aggregates the results, and assembles the report.
//! Pure over its inputs; all I/O happens at the collaborator boundary.

use crate::core::models::{Checklist, InspectionReport, ReadingSnapshot};

use super::{aggregate, evaluate};

/// Run a full inspection over a checklist and a readings snapshot
///
/// Results are produced in checklist order. The run always yields a complete
/// report; items without readings surface as unknown rather than aborting.
#[must_use]
pub fn run_inspection(
    checklist: &Checklist,
    snapshot: &ReadingSnapshot,
    elevator_id: &str,
) -> InspectionReport {
    log::info!(
        "inspecting elevator {elevator_id}: {} item(s), {} reading(s)",
        checklist.len(),
        snapshot.len()
    );

    let results: Vec<_> = checklist.items.iter().map(|item| evaluate(item, snapshot)).collect();
    let outcome = aggregate(&results, checklist.escalation_tolerance);

    InspectionReport::new(elevator_id, results, outcome)
}
