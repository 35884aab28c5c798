//! Parser and validator for liftcheck checklist files
//!
//! Checklist definitions are TOML:
//!
//! ```toml
//! [inspection]
//! escalation_tolerance = 0
//!
//! [[item]]
//! id = "motor_temp"
//! name = "Motor Temperature"
//! type = "sensor-threshold"
//! category = "mechanical"
//! criticality = "high"
//! sensor_id = "temp_motor"
//!
//! [item.thresholds]
//! min_warning = 50.0
//! max_warning = 70.0
//! max_critical = 85.0
//! ```
//!
//! Raw entries are deserialized first, then validated into typed
//! [`Checklist`] values. Any structural problem fails the whole load before
//! evaluation can start; no partially-validated checklist is ever returned.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::core::models::{
    Category, CheckKind, Checklist, ChecklistItem, Criticality, ThresholdBand,
};

/// Errors that can occur while loading a checklist definition
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("cannot read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid TOML
    #[error("invalid config file: {0}")]
    Parse(#[from] toml::de::Error),

    /// An item lacks a field its evaluation type requires
    #[error("item '{item}': missing required field '{field}'")]
    MissingField {
        /// Id of the offending item
        item: String,
        /// Name of the missing field
        field: &'static str,
    },

    /// An enum field holds a value outside its closed set
    #[error("item '{item}': {message}")]
    UnknownValue {
        /// Id of the offending item
        item: String,
        /// Which value was rejected and what is accepted
        message: String,
    },

    /// Threshold boundaries are not monotonically ordered
    #[error(
        "item '{item}': thresholds must satisfy min_critical <= min_warning <= max_warning <= max_critical"
    )]
    UnorderedThresholds {
        /// Id of the offending item
        item: String,
    },

    /// Two items share the same id
    #[error("duplicate item id '{0}'")]
    DuplicateId(String),

    /// The file defines no checklist items
    #[error("checklist defines no items")]
    EmptyChecklist,
}

/// Top-level structure of a checklist file
#[derive(Debug, Deserialize)]
struct ChecklistFile {
    /// Run-level settings
    #[serde(default)]
    inspection: InspectionSettings,

    /// Checklist items, in evaluation order
    #[serde(default, rename = "item")]
    items: Vec<ItemEntry>,
}

/// Run-level inspection settings
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct InspectionSettings {
    /// Escalations tolerated before caution becomes unsafe
    escalation_tolerance: usize,
}

/// A raw checklist item entry, before validation
#[derive(Debug, Deserialize)]
struct ItemEntry {
    id: String,
    name: String,

    /// Check type: sensor-threshold, boolean-check, manual
    #[serde(rename = "type")]
    kind: String,

    #[serde(default = "default_category")]
    category: String,

    #[serde(default = "default_criticality")]
    criticality: String,

    /// Required for sensor-threshold and boolean-check items
    #[serde(default)]
    sensor_id: Option<String>,

    /// Required for sensor-threshold items
    #[serde(default)]
    thresholds: Option<ThresholdBand>,
}

fn default_category() -> String {
    "other".to_string()
}

fn default_criticality() -> String {
    "medium".to_string()
}

/// Load and validate a checklist definition from a TOML file
///
/// # Errors
///
/// Returns a [`ConfigError`] if the file cannot be read or parsed, if an
/// item is missing fields its evaluation type requires, if threshold
/// boundaries are out of order, or if item ids collide.
pub fn load_checklist(path: &Path) -> Result<Checklist, ConfigError> {
    let content = fs::read_to_string(path)?;
    let file: ChecklistFile = toml::from_str(&content)?;

    if file.items.is_empty() {
        return Err(ConfigError::EmptyChecklist);
    }

    let mut seen = HashSet::new();
    let mut items = Vec::with_capacity(file.items.len());
    for entry in file.items {
        if !seen.insert(entry.id.clone()) {
            return Err(ConfigError::DuplicateId(entry.id));
        }
        items.push(validate_item(entry)?);
    }

    log::debug!("loaded checklist with {} item(s) from {}", items.len(), path.display());

    Ok(Checklist {
        items,
        escalation_tolerance: file.inspection.escalation_tolerance,
    })
}

fn validate_item(entry: ItemEntry) -> Result<ChecklistItem, ConfigError> {
    let category: Category = entry.category.parse().map_err(|message| ConfigError::UnknownValue {
        item: entry.id.clone(),
        message,
    })?;
    let criticality: Criticality =
        entry.criticality.parse().map_err(|message| ConfigError::UnknownValue {
            item: entry.id.clone(),
            message,
        })?;

    let kind = match entry.kind.as_str() {
        "sensor-threshold" => {
            let sensor_id = entry.sensor_id.ok_or_else(|| ConfigError::MissingField {
                item: entry.id.clone(),
                field: "sensor_id",
            })?;
            let thresholds = entry.thresholds.ok_or_else(|| ConfigError::MissingField {
                item: entry.id.clone(),
                field: "thresholds",
            })?;
            if thresholds.is_empty() {
                return Err(ConfigError::MissingField {
                    item: entry.id,
                    field: "thresholds",
                });
            }
            if !thresholds.is_ordered() {
                return Err(ConfigError::UnorderedThresholds { item: entry.id });
            }
            CheckKind::SensorThreshold {
                sensor_id,
                thresholds,
            }
        },
        "boolean-check" => {
            let sensor_id = entry.sensor_id.ok_or_else(|| ConfigError::MissingField {
                item: entry.id.clone(),
                field: "sensor_id",
            })?;
            CheckKind::BooleanCheck { sensor_id }
        },
        "manual" => CheckKind::Manual,
        other => {
            return Err(ConfigError::UnknownValue {
                item: entry.id,
                message: format!(
                    "Invalid check type: {other}. Use: sensor-threshold, boolean-check, manual"
                ),
            });
        },
    };

    Ok(ChecklistItem {
        id: entry.id,
        name: entry.name,
        category,
        criticality,
        kind,
    })
}
