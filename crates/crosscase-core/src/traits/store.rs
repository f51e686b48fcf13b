use crate::errors::StoreError;
use crate::models::AttributeType;

/// The central correlation datastore, reduced to the two aggregate queries
/// the engine needs. Injected at engine construction so tests can run
/// against a deterministic fake.
///
/// Both calls are synchronous, blocking round trips. Counts come back as
/// `f64` because they feed straight into percentage arithmetic.
pub trait ICorrelationStore: Send + Sync {
    /// Total unique (case, data source) tuples across the whole
    /// correlation universe.
    fn count_unique_tuples(&self) -> Result<f64, StoreError>;

    /// Unique (case, data source) tuples containing the given
    /// (attribute type, value) pair. Fails with
    /// `StoreError::Normalization` when the value cannot be canonicalized.
    fn count_unique_tuples_for_value(
        &self,
        attribute: &AttributeType,
        value: &str,
    ) -> Result<f64, StoreError>;
}
