//! File-based history store
//!
//! Append-only storage for finished reports. Each elevator gets a JSON-lines
//! file under the history directory; a stored line is never rewritten.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

use crate::core::models::InspectionReport;
use crate::core::ports::{HistoryEntry, HistoryStore};
use crate::paths;

/// JSON-lines history store rooted at a directory
#[derive(Debug, Clone)]
pub struct FileHistoryStore {
    root: PathBuf,
}

impl FileHistoryStore {
    /// Create a store rooted at the given directory
    #[must_use]
    pub const fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create a store at the default user-level location
    #[must_use]
    pub fn default_location() -> Self {
        Self::new(paths::history_dir())
    }

    fn file_for(&self, elevator_id: &str) -> PathBuf {
        // Elevator ids come from the CLI; keep them filesystem-safe
        let safe: String = elevator_id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.root.join(format!("{safe}.jsonl"))
    }
}

impl HistoryStore for FileHistoryStore {
    fn append(&self, report: &InspectionReport) -> anyhow::Result<()> {
        fs::create_dir_all(&self.root)?;
        let path = self.file_for(&report.elevator_id);
        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;
        let line = serde_json::to_string(report)?;
        writeln!(file, "{line}")?;
        log::debug!("stored inspection for {} at {}", report.elevator_id, path.display());
        Ok(())
    }

    fn list(&self, elevator_id: &str) -> anyhow::Result<Vec<HistoryEntry>> {
        let path = self.file_for(elevator_id);
        if !path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&path)?;
        let mut entries = Vec::new();
        for line in content.lines().filter(|l| !l.trim().is_empty()) {
            let report: InspectionReport = serde_json::from_str(line)?;
            entries.push(HistoryEntry::from(&report));
        }

        // Most recent first
        entries.reverse();
        Ok(entries)
    }
}
