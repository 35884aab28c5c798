//! Business logic services
//!
//! Pure functions over the domain models: no I/O, no shared state. The
//! evaluator and aggregator together form the inspection evaluation engine.

pub mod aggregator;
pub mod evaluator;
pub mod inspection;

pub use aggregator::{AggregateOutcome, aggregate};
pub use evaluator::evaluate;
pub use inspection::run_inspection;
