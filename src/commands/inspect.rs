//! Run an inspection and report the verdict

use std::path::Path;

use liftcheck::adapters::history::FileHistoryStore;
use liftcheck::adapters::render::{JsonRenderer, TextRenderer};
use liftcheck::adapters::sensors::SimulatedSensors;
use liftcheck::core::models::ReadingSnapshot;
use liftcheck::core::ports::{HistoryStore, ReadingProvider, ReportSink};
use liftcheck::core::services::run_inspection;
use liftcheck::output::OutputMode;

use super::resolve_checklist;

/// Run a full inspection for one elevator
///
/// The sensor snapshot is captured once, before any evaluation. A failed
/// fetch degrades to an empty snapshot (every item unknown) instead of
/// aborting; only a malformed checklist aborts the run.
pub fn inspect(
    elevator_id: &str,
    config: Option<&Path>,
    no_store: bool,
    mode: OutputMode,
) -> anyhow::Result<()> {
    let checklist = resolve_checklist(config)?;

    let provider = SimulatedSensors::new();
    let snapshot = match provider.fetch_readings(elevator_id) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            log::warn!("sensor fetch failed, proceeding without readings: {err}");
            ReadingSnapshot::empty()
        },
    };

    let report = run_inspection(&checklist, &snapshot, elevator_id);

    let sink: Box<dyn ReportSink> = match mode {
        OutputMode::Human => Box::new(TextRenderer::new()),
        OutputMode::Json => Box::new(JsonRenderer::new()),
    };
    sink.emit(&report)?;

    if no_store {
        log::debug!("--no-store set, skipping history append");
    } else {
        FileHistoryStore::default_location().append(&report)?;
    }

    Ok(())
}
