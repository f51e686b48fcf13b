//! # crosscase-engine
//!
//! Filtering engine for cross-case common-attribute search results.
//! Takes a pre-built `MatchIndex` and produces a
//! presentation-ready view according to a content-category allow-list and
//! a global occurrence-frequency ceiling queried from the central
//! correlation datastore.

pub mod engine;
pub mod filters;

pub use engine::CorrelationEngine;
pub use filters::{CategoryFilter, FrequencyFilter, FrequencyOutcome};
