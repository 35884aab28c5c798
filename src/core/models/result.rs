//! Per-item evaluation results

use serde::{Deserialize, Serialize};

use super::{Criticality, ReadingValue};

/// Outcome of evaluating a single checklist item
///
/// Ordered by severity: `Pass < Unknown < Warning < Critical`. The aggregated
/// verdict is monotone in this ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemStatus {
    /// Reading is inside the safe operating range
    Pass,
    /// No reading available, or the item awaits manual inspection
    Unknown,
    /// Reading breaches a warning boundary
    Warning,
    /// Reading breaches a critical boundary, or a safety check failed
    Critical,
}

impl ItemStatus {
    /// Whether this status should surface a recommendation
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        !matches!(self, Self::Pass)
    }
}

impl std::fmt::Display for ItemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pass => write!(f, "PASS"),
            Self::Warning => write!(f, "WARNING"),
            Self::Critical => write!(f, "CRITICAL"),
            Self::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

impl std::str::FromStr for ItemStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pass" => Ok(Self::Pass),
            "warning" => Ok(Self::Warning),
            "critical" => Ok(Self::Critical),
            "unknown" => Ok(Self::Unknown),
            _ => Err(format!("Invalid status: {s}. Use: pass, warning, critical, unknown")),
        }
    }
}

/// The outcome of evaluating one checklist item against the snapshot
///
/// Created once per item per run; never updated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemResult {
    /// Id of the checklist item this result belongs to
    pub item_id: String,

    /// Human-readable item name, carried over for rendering
    pub name: String,

    /// Evaluation status
    pub status: ItemStatus,

    /// The value that was observed, if any reading was available
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observed: Option<ReadingValue>,

    /// Human-readable explanation of the status
    pub explanation: String,

    /// Criticality inherited from the item
    pub criticality: Criticality,
}
