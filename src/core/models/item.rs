//! Checklist item model
//!
//! An item declares: "Measure this, and here is the band it must stay in."
//! Items are polymorphic over their evaluation rule via [`CheckKind`], so the
//! evaluator can dispatch exhaustively on a closed set of check types.

use serde::{Deserialize, Serialize};

/// Equipment category a checklist item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Motors, brakes, cables, rails
    Mechanical,
    /// Control panels, wiring, power
    Electrical,
    /// Emergency systems, door interlocks
    Safety,
    /// Shaft, car frame, counterweight
    Structural,
    /// Anything that doesn't fit the above
    #[default]
    Other,
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Mechanical => write!(f, "mechanical"),
            Self::Electrical => write!(f, "electrical"),
            Self::Safety => write!(f, "safety"),
            Self::Structural => write!(f, "structural"),
            Self::Other => write!(f, "other"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mechanical" => Ok(Self::Mechanical),
            "electrical" => Ok(Self::Electrical),
            "safety" => Ok(Self::Safety),
            "structural" => Ok(Self::Structural),
            "other" => Ok(Self::Other),
            _ => Err(format!(
                "Invalid category: {s}. Use: mechanical, electrical, safety, structural, other"
            )),
        }
    }
}

/// Severity weight attached to a checklist item
///
/// Used by the aggregator to bias the overall verdict: a critical breach on a
/// high-criticality item is immediately unsafe, while the same breach on a
/// low-criticality item may only warrant caution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Criticality {
    /// Comfort/cosmetic checks
    Low,
    /// Important but not immediately dangerous
    #[default]
    Medium,
    /// Failure endangers passengers
    High,
}

impl std::fmt::Display for Criticality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Criticality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid criticality: {s}. Use: low, medium, high")),
        }
    }
}

/// Warning/critical numeric boundaries bracketing a safe operating range
///
/// All boundaries are optional, but at least one must be set and the ones
/// present must be monotonically ordered:
/// `min_critical <= min_warning <= max_warning <= max_critical`.
/// Ordering is validated at configuration-load time, never at evaluation time.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ThresholdBand {
    /// Below or at this value the reading is critical
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_critical: Option<f64>,

    /// Below or at this value the reading is a warning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_warning: Option<f64>,

    /// Above or at this value the reading is a warning
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_warning: Option<f64>,

    /// Above or at this value the reading is critical
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_critical: Option<f64>,
}

impl ThresholdBand {
    /// Whether any boundary is defined
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.min_critical.is_none()
            && self.min_warning.is_none()
            && self.max_warning.is_none()
            && self.max_critical.is_none()
    }

    /// Whether the boundaries that are present are monotonically ordered
    ///
    /// Expected order: `min_critical <= min_warning <= max_warning <= max_critical`.
    #[must_use]
    pub fn is_ordered(&self) -> bool {
        let present: Vec<f64> = [self.min_critical, self.min_warning, self.max_warning, self.max_critical]
            .into_iter()
            .flatten()
            .collect();
        present.windows(2).all(|w| w[0] <= w[1])
    }
}

/// How a checklist item is evaluated
///
/// A tagged variant rather than a trait hierarchy, so the evaluator stays
/// exhaustive and statically checkable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum CheckKind {
    /// Compare a numeric sensor reading against a threshold band
    SensorThreshold {
        /// Sensor to read from the snapshot
        sensor_id: String,
        /// Boundaries the reading is compared against
        thresholds: ThresholdBand,
    },

    /// A go/no-go sensor: true passes, false is a critical failure
    BooleanCheck {
        /// Sensor to read from the snapshot
        sensor_id: String,
    },

    /// Requires a human-supplied override; unknown until one is provided
    Manual,
}

/// One named safety check with its evaluation rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Unique identifier (e.g., `motor_temp`)
    pub id: String,

    /// Human-readable name (e.g., "Motor Temperature")
    pub name: String,

    /// Equipment category
    pub category: Category,

    /// Severity weight for aggregation
    pub criticality: Criticality,

    /// Evaluation rule
    #[serde(flatten)]
    pub kind: CheckKind,
}

impl ChecklistItem {
    /// Create a sensor-threshold item
    #[must_use]
    pub fn sensor(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        criticality: Criticality,
        sensor_id: impl Into<String>,
        thresholds: ThresholdBand,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            criticality,
            kind: CheckKind::SensorThreshold {
                sensor_id: sensor_id.into(),
                thresholds,
            },
        }
    }

    /// Create a boolean-check item
    #[must_use]
    pub fn boolean(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        criticality: Criticality,
        sensor_id: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            criticality,
            kind: CheckKind::BooleanCheck {
                sensor_id: sensor_id.into(),
            },
        }
    }

    /// Create a manual-inspection item
    #[must_use]
    pub fn manual(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        criticality: Criticality,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category,
            criticality,
            kind: CheckKind::Manual,
        }
    }
}
