//! Core domain logic for liftcheck
//!
//! This module contains pure business logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (`ChecklistItem`, `Reading`, `ItemResult`, `InspectionReport`)
//! - `services/` - Evaluation and aggregation logic
//! - `ports/` - Trait definitions for external dependencies

pub mod models;
pub mod ports;
pub mod services;
