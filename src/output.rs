//! Output formatting for human and JSON modes
//!
//! This module provides structured output that can be rendered either as
//! human-readable text or machine-parseable JSON. Report rendering itself
//! lives in the render adapters; these types cover the remaining commands.

use serde::Serialize;

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// Result of a checklist listing operation
#[derive(Debug, Serialize)]
pub struct ChecklistListResult {
    /// Escalation tolerance configured for the checklist
    pub escalation_tolerance: usize,
    /// Items in checklist order
    pub items: Vec<ChecklistItemInfo>,
}

/// Information about one checklist item
#[derive(Debug, Serialize)]
pub struct ChecklistItemInfo {
    /// Item id (e.g., `motor_temp`)
    pub id: String,
    /// Human-readable name
    pub name: String,
    /// Check type: sensor-threshold, boolean-check, manual
    pub kind: String,
    /// Equipment category
    pub category: String,
    /// Severity weight
    pub criticality: String,
    /// Sensor read by this item, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sensor_id: Option<String>,
}

/// Result of a history listing operation
#[derive(Debug, Serialize)]
pub struct HistoryListResult {
    /// Elevator the history belongs to
    pub elevator_id: String,
    /// Stored inspections, most recent first
    pub entries: Vec<HistoryEntryInfo>,
}

/// Summary of one stored inspection
#[derive(Debug, Serialize)]
pub struct HistoryEntryInfo {
    /// When the inspection ran (RFC3339)
    pub timestamp: String,
    /// Overall verdict
    pub verdict: String,
    /// Number of passing results
    pub passed: usize,
    /// Number of warning results
    pub warnings: usize,
    /// Number of critical results
    pub critical: usize,
    /// Number of unknown results
    pub unknown: usize,
}

/// Generic operation result for simple commands
#[derive(Debug, Serialize)]
pub struct OperationResult {
    /// Whether the operation succeeded
    pub success: bool,
    /// Human-readable message
    pub message: String,
}

impl ChecklistListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        println!("Checklist ({} items, tolerance {}):\n", self.items.len(), self.escalation_tolerance);
        for item in &self.items {
            println!("  [{}] {} ({})", item.criticality.to_uppercase(), item.name, item.kind);
            match &item.sensor_id {
                Some(sensor) => println!("  ID: {}  sensor: {sensor}  category: {}\n", item.id, item.category),
                None => println!("  ID: {}  category: {}\n", item.id, item.category),
            }
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl HistoryListResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => self.render_human(),
            OutputMode::Json => self.render_json(),
        }
    }

    fn render_human(&self) {
        if self.entries.is_empty() {
            println!("No stored inspections for {}.", self.elevator_id);
            return;
        }

        println!("Inspections for {}:\n", self.elevator_id);
        for entry in &self.entries {
            println!("  {}  {}", entry.timestamp, entry.verdict);
            println!(
                "          {} passed, {} warnings, {} critical, {} unknown\n",
                entry.passed, entry.warnings, entry.critical, entry.unknown
            );
        }
    }

    fn render_json(&self) {
        println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
    }
}

impl OperationResult {
    /// Render the result based on output mode
    pub fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.message),
            OutputMode::Json => {
                println!("{}", serde_json::to_string_pretty(self).unwrap_or_default());
            },
        }
    }
}
