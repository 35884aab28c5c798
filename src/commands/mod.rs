//! Command implementations for the liftcheck CLI
//!
//! Commands wire adapters to the core engine: load config, fetch readings,
//! evaluate, then hand the report to sinks. No evaluation logic lives here.

mod checklist;
mod history;
mod inspect;

pub use checklist::checklist;
pub use history::history;
pub use inspect::inspect;

use std::path::Path;

use liftcheck::adapters::toml::load_checklist;
use liftcheck::core::models::Checklist;
use liftcheck::paths;

/// Resolve the checklist to use for a command
///
/// Priority: explicit `--config` path, then `~/.liftcheck/checklist.toml`,
/// then the built-in checklist. An explicit or discovered file that fails
/// validation aborts the command before any evaluation starts.
pub fn resolve_checklist(config: Option<&Path>) -> anyhow::Result<Checklist> {
    if let Some(path) = config {
        return Ok(load_checklist(path)?);
    }

    let default = paths::default_checklist();
    if default.exists() {
        return Ok(load_checklist(&default)?);
    }

    log::debug!("no checklist file found, using built-in checklist");
    Ok(Checklist::builtin())
}
