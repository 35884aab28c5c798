//! Validate and list the active checklist

use std::path::Path;

use liftcheck::core::models::CheckKind;
use liftcheck::output::{ChecklistItemInfo, ChecklistListResult, OutputMode};

use super::resolve_checklist;

/// Show the checklist that an inspection would evaluate
///
/// Loading performs full validation, so this doubles as a config check.
pub fn checklist(config: Option<&Path>, mode: OutputMode) -> anyhow::Result<()> {
    let checklist = resolve_checklist(config)?;

    let items = checklist
        .items
        .iter()
        .map(|item| {
            let (kind, sensor_id) = match &item.kind {
                CheckKind::SensorThreshold { sensor_id, .. } => {
                    ("sensor-threshold", Some(sensor_id.clone()))
                },
                CheckKind::BooleanCheck { sensor_id } => ("boolean-check", Some(sensor_id.clone())),
                CheckKind::Manual => ("manual", None),
            };
            ChecklistItemInfo {
                id: item.id.clone(),
                name: item.name.clone(),
                kind: kind.to_string(),
                category: item.category.to_string(),
                criticality: item.criticality.to_string(),
                sensor_id,
            }
        })
        .collect();

    let result = ChecklistListResult {
        escalation_tolerance: checklist.escalation_tolerance,
        items,
    };
    result.render(mode);
    Ok(())
}
