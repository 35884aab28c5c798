//! Item evaluator - evaluates one checklist item against the snapshot
//!
//! Evaluation is a pure function of (item, snapshot). Every per-item failure
//! mode (missing reading, wrong value type) is absorbed into an `Unknown`
//! result so one bad sensor never prevents producing a report.

use crate::core::models::{
    CheckKind, ChecklistItem, ItemResult, ItemStatus, ReadingSnapshot, ReadingValue, ThresholdBand,
};

/// Evaluate a single checklist item against the readings snapshot
///
/// Dispatches on the item's check kind:
/// - sensor-threshold: classify the numeric reading against the band
/// - boolean-check: true passes, false is critical (never downgraded)
/// - manual: unknown unless a human override is present under the item id
#[must_use]
pub fn evaluate(item: &ChecklistItem, snapshot: &ReadingSnapshot) -> ItemResult {
    let (status, observed, explanation) = match &item.kind {
        CheckKind::SensorThreshold { sensor_id, thresholds } => {
            evaluate_sensor(sensor_id, thresholds, snapshot)
        },
        CheckKind::BooleanCheck { sensor_id } => evaluate_boolean(sensor_id, snapshot),
        CheckKind::Manual => evaluate_manual(&item.id, snapshot),
    };

    log::debug!("evaluated {}: {status}", item.id);

    ItemResult {
        item_id: item.id.clone(),
        name: item.name.clone(),
        status,
        observed,
        explanation,
        criticality: item.criticality,
    }
}

fn evaluate_sensor(
    sensor_id: &str,
    band: &ThresholdBand,
    snapshot: &ReadingSnapshot,
) -> (ItemStatus, Option<ReadingValue>, String) {
    match snapshot.get(sensor_id).map(|r| r.value) {
        None => (ItemStatus::Unknown, None, "no reading available".to_string()),
        Some(ReadingValue::Numeric(v)) => {
            let (status, explanation) = classify(band, v);
            (status, Some(ReadingValue::Numeric(v)), explanation)
        },
        Some(other) => (
            ItemStatus::Unknown,
            Some(other),
            format!("expected a numeric reading, got '{other}'"),
        ),
    }
}

fn evaluate_boolean(
    sensor_id: &str,
    snapshot: &ReadingSnapshot,
) -> (ItemStatus, Option<ReadingValue>, String) {
    match snapshot.get(sensor_id).map(|r| r.value) {
        None => (ItemStatus::Unknown, None, "no reading available".to_string()),
        Some(ReadingValue::Bool(true)) => (
            ItemStatus::Pass,
            Some(ReadingValue::Bool(true)),
            "check passed".to_string(),
        ),
        // A failed safety check is never downgraded to a warning
        Some(ReadingValue::Bool(false)) => (
            ItemStatus::Critical,
            Some(ReadingValue::Bool(false)),
            "safety check failed".to_string(),
        ),
        Some(other) => (
            ItemStatus::Unknown,
            Some(other),
            format!("expected a boolean reading, got '{other}'"),
        ),
    }
}

fn evaluate_manual(
    item_id: &str,
    snapshot: &ReadingSnapshot,
) -> (ItemStatus, Option<ReadingValue>, String) {
    match snapshot.get(item_id).map(|r| r.value) {
        Some(ReadingValue::Override(status)) => (
            status,
            Some(ReadingValue::Override(status)),
            format!("manual inspection recorded: {status}"),
        ),
        _ => (
            ItemStatus::Unknown,
            None,
            "awaiting manual inspection".to_string(),
        ),
    }
}

/// Classify a numeric value against a threshold band
///
/// Critical bounds are checked before warning bounds so an overlapping band
/// can never mask a critical breach. Comparisons are inclusive: a tie at a
/// boundary resolves to the more severe status.
fn classify(band: &ThresholdBand, value: f64) -> (ItemStatus, String) {
    if let Some(max) = band.max_critical
        && value >= max
    {
        return (
            ItemStatus::Critical,
            format!("value {value} at or above critical maximum {max}"),
        );
    }
    if let Some(min) = band.min_critical
        && value <= min
    {
        return (
            ItemStatus::Critical,
            format!("value {value} at or below critical minimum {min}"),
        );
    }
    if let Some(max) = band.max_warning
        && value >= max
    {
        return (
            ItemStatus::Warning,
            format!("value {value} at or above warning maximum {max}"),
        );
    }
    if let Some(min) = band.min_warning
        && value <= min
    {
        return (
            ItemStatus::Warning,
            format!("value {value} at or below warning minimum {min}"),
        );
    }
    (ItemStatus::Pass, format!("value {value} within safe range"))
}
