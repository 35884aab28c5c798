//! Tests for the Output module
//!
//! Output provides structured result types that can be rendered as either
//! human-readable text or machine-parseable JSON.

use liftcheck::output::{
    ChecklistItemInfo, ChecklistListResult, HistoryEntryInfo, HistoryListResult, OperationResult,
    OutputMode,
};

// =============================================================================
// OutputMode Tests
// =============================================================================

#[test]
fn output_mode_default() {
    assert_eq!(OutputMode::default(), OutputMode::Human);
}

// =============================================================================
// ChecklistListResult Serialization Tests
// =============================================================================

#[test]
fn checklist_list_serialization() {
    let result = ChecklistListResult {
        escalation_tolerance: 0,
        items: vec![ChecklistItemInfo {
            id: "motor_temp".to_string(),
            name: "Motor Temperature".to_string(),
            kind: "sensor-threshold".to_string(),
            category: "mechanical".to_string(),
            criticality: "high".to_string(),
            sensor_id: Some("temp_motor".to_string()),
        }],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"escalation_tolerance\":0"));
    assert!(json.contains("motor_temp"));
    assert!(json.contains("temp_motor"));
}

#[test]
fn checklist_item_without_sensor_omits_field() {
    let info = ChecklistItemInfo {
        id: "cables_visual".to_string(),
        name: "Cables Visual Inspection".to_string(),
        kind: "manual".to_string(),
        category: "mechanical".to_string(),
        criticality: "high".to_string(),
        sensor_id: None,
    };

    let json = serde_json::to_string(&info).unwrap();
    assert!(!json.contains("sensor_id"));
}

// =============================================================================
// HistoryListResult Serialization Tests
// =============================================================================

#[test]
fn history_list_serialization() {
    let result = HistoryListResult {
        elevator_id: "EL-001".to_string(),
        entries: vec![HistoryEntryInfo {
            timestamp: "2026-01-15T08:30:00+00:00".to_string(),
            verdict: "CAUTION".to_string(),
            passed: 8,
            warnings: 1,
            critical: 0,
            unknown: 1,
        }],
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"elevator_id\":\"EL-001\""));
    assert!(json.contains("\"warnings\":1"));
    assert!(json.contains("CAUTION"));
}

// =============================================================================
// OperationResult Tests
// =============================================================================

#[test]
fn operation_result_serialization() {
    let result = OperationResult {
        success: true,
        message: "stored".to_string(),
    };

    let json = serde_json::to_string(&result).unwrap();
    assert!(json.contains("\"success\":true"));
    assert!(json.contains("stored"));
}
