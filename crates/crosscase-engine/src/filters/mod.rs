//! The two independent per-value filters: category allow-list and
//! occurrence-frequency ceiling.

pub mod category;
pub mod frequency;

pub use category::CategoryFilter;
pub use frequency::{FrequencyFilter, FrequencyOutcome};
