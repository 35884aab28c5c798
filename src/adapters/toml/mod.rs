//! TOML checklist configuration adapter
//!
//! Handles reading, deserializing, and validating checklist definition files.

mod parser;

pub use parser::{ConfigError, load_checklist};
