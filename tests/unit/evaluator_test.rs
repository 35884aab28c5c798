//! Tests for the item evaluator
//!
//! The evaluator is a pure function of (item, snapshot); these tests cover
//! the threshold bands, boundary ties, and every fallback to unknown.

use liftcheck::core::models::{
    Category, ChecklistItem, Criticality, ItemStatus, Reading, ReadingSnapshot, ReadingValue,
    ThresholdBand,
};
use liftcheck::core::services::evaluate;

use crate::common::fixtures::{motor_temp_item, numeric_snapshot};

// =============================================================================
// Sensor-threshold items
// =============================================================================

#[test]
fn reading_inside_warning_band_passes() {
    let item = motor_temp_item();
    for value in [51.0, 60.0, 74.9] {
        let result = evaluate(&item, &numeric_snapshot("motor_temperature", value));
        assert_eq!(result.status, ItemStatus::Pass, "value {value} should pass");
    }
}

#[test]
fn reading_at_or_above_max_critical_is_critical() {
    let item = motor_temp_item();
    for value in [85.0, 90.0, 500.0] {
        let result = evaluate(&item, &numeric_snapshot("motor_temperature", value));
        assert_eq!(result.status, ItemStatus::Critical, "value {value} should be critical");
    }
}

#[test]
fn reading_in_warning_band_only_warns() {
    let item = motor_temp_item();
    let result = evaluate(&item, &numeric_snapshot("motor_temperature", 80.0));
    assert_eq!(result.status, ItemStatus::Warning);
    assert_eq!(result.observed, Some(ReadingValue::Numeric(80.0)));
}

#[test]
fn min_critical_bound_is_checked_before_warning() {
    let item = ChecklistItem::sensor(
        "speed_check",
        "Speed Regulation",
        Category::Mechanical,
        Criticality::High,
        "speed",
        ThresholdBand {
            min_critical: Some(0.1),
            min_warning: Some(0.5),
            max_warning: Some(2.0),
            max_critical: Some(2.5),
        },
    );
    // 0.05 is below both min_warning and min_critical; critical must win
    let result = evaluate(&item, &numeric_snapshot("speed", 0.05));
    assert_eq!(result.status, ItemStatus::Critical);

    let result = evaluate(&item, &numeric_snapshot("speed", 0.3));
    assert_eq!(result.status, ItemStatus::Warning);
}

#[test]
fn boundary_ties_resolve_to_more_severe_status() {
    let item = motor_temp_item();
    let at_warning = evaluate(&item, &numeric_snapshot("motor_temperature", 75.0));
    assert_eq!(at_warning.status, ItemStatus::Warning);

    let at_critical = evaluate(&item, &numeric_snapshot("motor_temperature", 85.0));
    assert_eq!(at_critical.status, ItemStatus::Critical);
}

#[test]
fn missing_reading_yields_unknown() {
    let item = motor_temp_item();
    let result = evaluate(&item, &ReadingSnapshot::empty());
    assert_eq!(result.status, ItemStatus::Unknown);
    assert_eq!(result.explanation, "no reading available");
    assert!(result.observed.is_none());
    assert_eq!(result.criticality, Criticality::High);
}

#[test]
fn non_numeric_reading_yields_unknown() {
    let item = motor_temp_item();
    let mut snapshot = ReadingSnapshot::empty();
    snapshot.insert("motor_temperature", Reading::boolean(true));
    let result = evaluate(&item, &snapshot);
    assert_eq!(result.status, ItemStatus::Unknown);
}

#[test]
fn evaluation_is_idempotent() {
    let item = motor_temp_item();
    let snapshot = numeric_snapshot("motor_temperature", 62.5);
    let first = evaluate(&item, &snapshot);
    let second = evaluate(&item, &snapshot);
    assert_eq!(first, second);
}

// =============================================================================
// Boolean-check items
// =============================================================================

fn door_item() -> ChecklistItem {
    ChecklistItem::boolean(
        "door_operation",
        "Door Operation",
        Category::Safety,
        Criticality::High,
        "door_sensor",
    )
}

#[test]
fn boolean_true_passes() {
    let mut snapshot = ReadingSnapshot::empty();
    snapshot.insert("door_sensor", Reading::boolean(true));
    let result = evaluate(&door_item(), &snapshot);
    assert_eq!(result.status, ItemStatus::Pass);
}

#[test]
fn boolean_false_is_critical_never_warning() {
    let mut snapshot = ReadingSnapshot::empty();
    snapshot.insert("door_sensor", Reading::boolean(false));
    let result = evaluate(&door_item(), &snapshot);
    assert_eq!(result.status, ItemStatus::Critical);
}

#[test]
fn boolean_missing_reading_yields_unknown() {
    let result = evaluate(&door_item(), &ReadingSnapshot::empty());
    assert_eq!(result.status, ItemStatus::Unknown);
}

// =============================================================================
// Manual items
// =============================================================================

fn manual_item() -> ChecklistItem {
    ChecklistItem::manual(
        "cables_visual",
        "Cables Visual Inspection",
        Category::Mechanical,
        Criticality::High,
    )
}

#[test]
fn manual_without_override_is_unknown() {
    let result = evaluate(&manual_item(), &ReadingSnapshot::empty());
    assert_eq!(result.status, ItemStatus::Unknown);
    assert_eq!(result.explanation, "awaiting manual inspection");
}

#[test]
fn manual_override_is_passed_through_verbatim() {
    for status in [ItemStatus::Pass, ItemStatus::Warning, ItemStatus::Critical] {
        let mut snapshot = ReadingSnapshot::empty();
        snapshot.insert("cables_visual", Reading::now(ReadingValue::Override(status)));
        let result = evaluate(&manual_item(), &snapshot);
        assert_eq!(result.status, status);
    }
}
