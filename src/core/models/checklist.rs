//! The validated checklist for an inspection run
//!
//! Loaded once per run from configuration and read-only for the run's
//! duration. Validation happens in the config adapter; a `Checklist` value is
//! always well-formed.

use super::{Category, ChecklistItem, Criticality, ThresholdBand};

/// A validated, ordered set of checklist items plus run-level settings
#[derive(Debug, Clone, PartialEq)]
pub struct Checklist {
    /// Items in evaluation (and report display) order
    pub items: Vec<ChecklistItem>,

    /// How many non-fatal escalations (medium/low critical breaches, or
    /// high-criticality warnings) are tolerated before the verdict becomes
    /// unsafe rather than caution
    pub escalation_tolerance: usize,
}

impl Checklist {
    /// Create a checklist with the default escalation tolerance of zero
    #[must_use]
    pub const fn new(items: Vec<ChecklistItem>) -> Self {
        Self {
            items,
            escalation_tolerance: 0,
        }
    }

    /// Number of items
    #[must_use]
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the checklist has no items
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The built-in checklist used when no config file is present
    ///
    /// Mirrors a typical traction elevator deployment: motor and control
    /// panel temperatures, vibration, speed regulation, load, door and
    /// emergency circuits, plus visual inspections recorded manually.
    #[must_use]
    pub fn builtin() -> Self {
        let items = vec![
            ChecklistItem::sensor(
                "motor_temp",
                "Motor Temperature",
                Category::Mechanical,
                Criticality::High,
                "temp_motor",
                ThresholdBand {
                    min_critical: None,
                    min_warning: Some(5.0),
                    max_warning: Some(70.0),
                    max_critical: Some(85.0),
                },
            ),
            ChecklistItem::sensor(
                "control_temp",
                "Control Panel Temperature",
                Category::Electrical,
                Criticality::Medium,
                "temp_control",
                ThresholdBand {
                    min_critical: None,
                    min_warning: Some(5.0),
                    max_warning: Some(60.0),
                    max_critical: Some(75.0),
                },
            ),
            ChecklistItem::sensor(
                "vibration",
                "Motor Vibration",
                Category::Mechanical,
                Criticality::High,
                "vibration_1",
                ThresholdBand {
                    min_critical: None,
                    min_warning: None,
                    max_warning: Some(4.0),
                    max_critical: Some(7.0),
                },
            ),
            ChecklistItem::sensor(
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
            ),
            ChecklistItem::sensor(
                "weight_sensor",
                "Weight Sensor Calibration",
                Category::Structural,
                Criticality::High,
                "weight",
                ThresholdBand {
                    min_critical: None,
                    min_warning: None,
                    max_warning: Some(1000.0),
                    max_critical: Some(1050.0),
                },
            ),
            ChecklistItem::boolean(
                "door_operation",
                "Door Operation",
                Category::Safety,
                Criticality::High,
                "door_sensor",
            ),
            ChecklistItem::boolean(
                "emergency_button",
                "Emergency Button",
                Category::Safety,
                Criticality::High,
                "emergency_button",
            ),
            ChecklistItem::boolean(
                "brake_test",
                "Emergency Brake Test",
                Category::Safety,
                Criticality::High,
                "emergency_brake",
            ),
            ChecklistItem::manual(
                "cables_visual",
                "Cables Visual Inspection",
                Category::Mechanical,
                Criticality::High,
            ),
            ChecklistItem::manual(
                "guide_rails",
                "Guide Rails Inspection",
                Category::Structural,
                Criticality::Medium,
            ),
        ];
        Self::new(items)
    }
}
