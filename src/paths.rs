//! Centralized path definitions for liftcheck
//!
//! Single source of truth for the filesystem locations liftcheck uses.
//!
//! ## Storage Layout
//!
//! ```text
//! ~/.liftcheck/
//! ├── checklist.toml            # Optional user checklist definition
//! └── history/
//!     ├── EL-001.jsonl          # Append-only stored inspections
//!     └── EL-002.jsonl
//! ```

use std::path::PathBuf;

/// Directory name for liftcheck state under the home directory
pub const LIFTCHECK_DIR: &str = ".liftcheck";

/// Default checklist definition filename
pub const CHECKLIST_TOML: &str = "checklist.toml";

/// Get the liftcheck data directory (`~/.liftcheck`)
///
/// Falls back to the current directory when no home directory is available.
#[must_use]
pub fn data_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(LIFTCHECK_DIR)
}

/// Get the default checklist definition path (`~/.liftcheck/checklist.toml`)
#[must_use]
pub fn default_checklist() -> PathBuf {
    data_dir().join(CHECKLIST_TOML)
}

/// Get the history directory (`~/.liftcheck/history`)
#[must_use]
pub fn history_dir() -> PathBuf {
    data_dir().join("history")
}
