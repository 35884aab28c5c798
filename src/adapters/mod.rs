//! Adapter implementations of the core port traits
//!
//! - `toml/` - Checklist configuration loading and validation
//! - `sensors/` - Simulated sensor backend (the reading provider)
//! - `render/` - Text and JSON report sinks
//! - `history/` - Append-only JSON-lines history store

pub mod history;
pub mod render;
pub mod sensors;
pub mod toml;
