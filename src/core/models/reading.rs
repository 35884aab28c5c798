//! Sensor readings and the per-run snapshot
//!
//! Readings are fetched once per inspection run as a consistent snapshot, so
//! every item evaluation observes the same sensor state. Absence of a reading
//! is a first-class outcome, not an error.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::ItemStatus;

/// A single sensor value
///
/// Numeric values feed threshold checks, booleans feed go/no-go checks, and
/// overrides carry a human-supplied status for manual inspection items.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReadingValue {
    /// A go/no-go sensor state
    Bool(bool),
    /// A measured quantity (temperature, vibration, speed, ...)
    Numeric(f64),
    /// A human-supplied status for a manual item, passed through verbatim
    Override(ItemStatus),
}

impl std::fmt::Display for ReadingValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Numeric(v) => write!(f, "{v}"),
            Self::Override(s) => write!(f, "{s}"),
        }
    }
}

/// A sensor value with the time it was captured
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    /// The captured value
    pub value: ReadingValue,
    /// When the value was captured
    pub timestamp: DateTime<Utc>,
}

impl Reading {
    /// Create a reading captured now
    #[must_use]
    pub fn now(value: ReadingValue) -> Self {
        Self {
            value,
            timestamp: Utc::now(),
        }
    }

    /// Create a numeric reading captured now
    #[must_use]
    pub fn numeric(value: f64) -> Self {
        Self::now(ReadingValue::Numeric(value))
    }

    /// Create a boolean reading captured now
    #[must_use]
    pub fn boolean(value: bool) -> Self {
        Self::now(ReadingValue::Bool(value))
    }
}

/// The fixed set of sensor readings captured at the start of a run
///
/// Keyed by sensor id; manual overrides are keyed by the checklist item id.
/// A `BTreeMap` keeps iteration and serialization deterministic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ReadingSnapshot {
    readings: BTreeMap<String, Reading>,
}

impl ReadingSnapshot {
    /// Create an empty snapshot (every lookup yields no reading)
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            readings: BTreeMap::new(),
        }
    }

    /// Look up a reading by sensor id
    #[must_use]
    pub fn get(&self, sensor_id: &str) -> Option<&Reading> {
        self.readings.get(sensor_id)
    }

    /// Insert a reading, replacing any previous value for the sensor
    pub fn insert(&mut self, sensor_id: impl Into<String>, reading: Reading) {
        self.readings.insert(sensor_id.into(), reading);
    }

    /// Number of readings in the snapshot
    #[must_use]
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    /// Whether the snapshot holds no readings
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }
}

impl FromIterator<(String, Reading)> for ReadingSnapshot {
    fn from_iter<I: IntoIterator<Item = (String, Reading)>>(iter: I) -> Self {
        Self {
            readings: iter.into_iter().collect(),
        }
    }
}
