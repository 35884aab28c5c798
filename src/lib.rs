//! liftcheck - A CLI tool for evaluating elevator safety inspections
//!
//! This library provides the inspection evaluation engine: a typed checklist
//! model, a pure per-item evaluator, a criticality-weighted verdict
//! aggregator, and the immutable report record handed to rendering and
//! storage collaborators.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod core;
pub mod output;
pub mod paths;
