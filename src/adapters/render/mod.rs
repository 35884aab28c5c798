//! Report rendering sinks
//!
//! Two renderers cover the CLI's output modes: colored human-readable text
//! and machine-parseable JSON. Both are read-only consumers of the report.

use colored::Colorize;

use crate::core::models::{InspectionReport, ItemStatus, Verdict};
use crate::core::ports::ReportSink;

/// Renders a report as human-readable colored text
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl TextRenderer {
    /// Create a text renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportSink for TextRenderer {
    fn emit(&self, report: &InspectionReport) -> anyhow::Result<()> {
        println!(
            "Inspection report for elevator {} ({})\n",
            report.elevator_id.bold(),
            report.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        );

        for result in &report.results {
            let status = match result.status {
                ItemStatus::Pass => format!("{}", "PASS".green()),
                ItemStatus::Warning => format!("{}", "WARNING".yellow()),
                ItemStatus::Critical => format!("{}", "CRITICAL".red().bold()),
                ItemStatus::Unknown => format!("{}", "UNKNOWN".dimmed()),
            };
            println!("  [{status}] {}", result.name);
            println!("          {}\n", result.explanation);
        }

        let verdict = match report.verdict {
            Verdict::Safe => format!("{}", "SAFE".green().bold()),
            Verdict::Caution => format!("{}", "CAUTION".yellow().bold()),
            Verdict::Unsafe => format!("{}", "UNSAFE".red().bold()),
        };
        println!("Verdict: {verdict}");
        println!("{}", report.verdict.action_required());

        if !report.recommendations.is_empty() {
            println!("\nRecommendations:");
            for recommendation in &report.recommendations {
                println!("  - {recommendation}");
            }
        }

        Ok(())
    }
}

/// Renders a report as pretty-printed JSON on stdout
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRenderer;

impl JsonRenderer {
    /// Create a JSON renderer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportSink for JsonRenderer {
    fn emit(&self, report: &InspectionReport) -> anyhow::Result<()> {
        println!("{}", serde_json::to_string_pretty(report)?);
        Ok(())
    }
}
