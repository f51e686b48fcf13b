//! # crosscase-core
//!
//! Foundation crate for the crosscase correlation engine.
//! Defines the match data model, error taxonomy, store trait, config,
//! and constants. The engine crate depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::FilterConfig;
pub use errors::{CorrelationError, CorrelationResult, StoreError};
pub use models::{AttributeType, FileRef, MatchIndex, MatchedValue, ValueInstance, ValueList};
pub use traits::ICorrelationStore;
