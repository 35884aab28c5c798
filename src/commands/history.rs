//! Show stored inspections for an elevator

use liftcheck::adapters::history::FileHistoryStore;
use liftcheck::core::ports::HistoryStore;
use liftcheck::output::{HistoryEntryInfo, HistoryListResult, OutputMode};

/// List stored inspections, most recent first
pub fn history(elevator_id: &str, limit: usize, mode: OutputMode) -> anyhow::Result<()> {
    let store = FileHistoryStore::default_location();
    let entries = store.list(elevator_id)?;

    let entries = entries
        .into_iter()
        .take(limit)
        .map(|entry| HistoryEntryInfo {
            timestamp: entry.timestamp.to_rfc3339(),
            verdict: entry.verdict.to_string(),
            passed: entry.passed,
            warnings: entry.warnings,
            critical: entry.critical,
            unknown: entry.unknown,
        })
        .collect();

    let result = HistoryListResult {
        elevator_id: elevator_id.to_string(),
        entries,
    };
    result.render(mode);
    Ok(())
}
