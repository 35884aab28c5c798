//! Reading provider port
//!
//! Defines the interface for acquiring the per-run sensor snapshot.

use thiserror::Error;

use crate::core::models::ReadingSnapshot;

/// Errors a reading provider can surface
#[derive(Debug, Error)]
pub enum SensorError {
    /// The sensor backend could not be reached (transient)
    #[error("sensor backend unavailable: {0}")]
    Unavailable(String),
}

/// Source of sensor readings for an inspection run
///
/// Implementations talk to hardware, a telemetry service, or a simulator.
/// The snapshot is fetched once per run, before any evaluation begins; a
/// failed fetch is absorbed by the caller as an empty snapshot so the run
/// still produces a (fully unknown) report.
pub trait ReadingProvider: Send + Sync {
    /// Capture a consistent snapshot of current readings for an elevator
    fn fetch_readings(&self, elevator_id: &str) -> Result<ReadingSnapshot, SensorError>;
}
