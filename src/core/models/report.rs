//! The immutable inspection report record
//!
//! Pure data assembly: no evaluation logic lives here. The report is handed
//! to rendering and storage collaborators as a read-only value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{ItemResult, ItemStatus};
use crate::core::services::AggregateOutcome;

/// Overall safety classification for an inspection run
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    /// All checks passed
    Safe,
    /// Warnings or unknowns present; schedule maintenance
    Caution,
    /// Critical issues present; take the elevator out of service
    Unsafe,
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Safe => write!(f, "SAFE"),
            Self::Caution => write!(f, "CAUTION"),
            Self::Unsafe => write!(f, "UNSAFE"),
        }
    }
}

impl Verdict {
    /// The action an operator should take for this verdict
    #[must_use]
    pub const fn action_required(self) -> &'static str {
        match self {
            Self::Safe => "Regular maintenance schedule can be followed.",
            Self::Caution => "Schedule maintenance soon to address findings.",
            Self::Unsafe => {
                "Immediate maintenance required. Elevator should not be used until fixed."
            },
        }
    }
}

/// The immutable record of one inspection run
///
/// Results appear in checklist order. A re-inspection produces a wholly new
/// report; nothing mutates an existing one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InspectionReport {
    /// Elevator that was inspected
    pub elevator_id: String,

    /// When the report was assembled
    pub timestamp: DateTime<Utc>,

    /// Per-item results, in checklist order
    pub results: Vec<ItemResult>,

    /// Overall safety verdict
    pub verdict: Verdict,

    /// One recommendation per non-passing item, in checklist order
    pub recommendations: Vec<String>,
}

impl InspectionReport {
    /// Assemble a report from evaluated results and the aggregated outcome
    #[must_use]
    pub fn new(
        elevator_id: impl Into<String>,
        results: Vec<ItemResult>,
        outcome: AggregateOutcome,
    ) -> Self {
        Self {
            elevator_id: elevator_id.into(),
            timestamp: Utc::now(),
            results,
            verdict: outcome.verdict,
            recommendations: outcome.recommendations,
        }
    }

    /// Count results with the given status
    #[must_use]
    pub fn count(&self, status: ItemStatus) -> usize {
        self.results.iter().filter(|r| r.status == status).count()
    }
}
