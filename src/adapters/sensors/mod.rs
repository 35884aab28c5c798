//! Simulated sensor backend
//!
//! Stands in for real elevator hardware: knows a fixed set of sensors and
//! returns nominal readings for each. Real deployments would implement
//! [`ReadingProvider`] against the building's telemetry bus instead.

use crate::core::models::{Reading, ReadingSnapshot};
use crate::core::ports::{ReadingProvider, SensorError};

/// A simulated sensor bank with deterministic nominal readings
///
/// Values sit inside the built-in checklist's safe bands, so an unmodified
/// simulation inspects clean. Individual readings can be replaced to steer a
/// demo or a test toward warning/critical outcomes.
#[derive(Debug, Clone, Default)]
pub struct SimulatedSensors {
    overrides: Vec<(String, Reading)>,
}

impl SimulatedSensors {
    /// Create a simulator returning nominal values for every known sensor
    #[must_use]
    pub const fn new() -> Self {
        Self {
            overrides: Vec::new(),
        }
    }

    /// Replace (or add) the reading reported for one sensor
    #[must_use]
    pub fn with_reading(mut self, sensor_id: impl Into<String>, reading: Reading) -> Self {
        self.overrides.push((sensor_id.into(), reading));
        self
    }
}

impl ReadingProvider for SimulatedSensors {
    fn fetch_readings(&self, elevator_id: &str) -> Result<ReadingSnapshot, SensorError> {
        log::info!("connecting to elevator {elevator_id} (simulated)");

        // Nominal operating values for a healthy traction elevator
        let mut snapshot: ReadingSnapshot = [
            ("temp_motor", Reading::numeric(42.5)),
            ("temp_control", Reading::numeric(38.0)),
            ("vibration_1", Reading::numeric(2.4)),
            ("speed", Reading::numeric(1.2)),
            ("weight", Reading::numeric(640.0)),
            ("door_sensor", Reading::boolean(true)),
            ("emergency_button", Reading::boolean(true)),
            ("emergency_brake", Reading::boolean(true)),
        ]
        .into_iter()
        .map(|(id, reading)| (id.to_string(), reading))
        .collect();

        for (sensor_id, reading) in &self.overrides {
            snapshot.insert(sensor_id.clone(), *reading);
        }

        Ok(snapshot)
    }
}
