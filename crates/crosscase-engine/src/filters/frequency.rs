//! Occurrence-frequency ceiling filter backed by the correlation datastore.

use crosscase_core::errors::StoreError;
use crosscase_core::models::AttributeType;
use crosscase_core::traits::ICorrelationStore;
use tracing::warn;

/// Per-value outcome of a frequency check. Keeps the recoverable and
/// fatal paths apart in the type system instead of relying on callers to
/// inspect error kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FrequencyOutcome {
    /// Below or at the ceiling; keep the value.
    Keep,
    /// Above the ceiling; remove the value.
    Exclude,
    /// The lookup failed to normalize the value. Fail-open: the value is
    /// kept, the frequency check is simply unavailable for it.
    KeepUnchecked { reason: String },
}

/// Decides, per value, whether it occurs in too large a share of all
/// (case, data source) tuples. The total tuple count is fetched once per
/// pass by the engine and shared across every evaluation.
pub struct FrequencyFilter<'a> {
    store: &'a dyn ICorrelationStore,
    attribute: &'a AttributeType,
    total_tuples: f64,
    threshold: u32,
}

impl<'a> FrequencyFilter<'a> {
    pub fn new(
        store: &'a dyn ICorrelationStore,
        attribute: &'a AttributeType,
        total_tuples: f64,
        threshold: u32,
    ) -> Self {
        Self {
            store,
            attribute,
            total_tuples,
            threshold,
        }
    }

    /// Evaluate one value against the ceiling.
    ///
    /// The percentage is truncated toward zero before comparison, so a
    /// value computing to 50.9% counts as 50% and a threshold of 50 keeps
    /// it. Exclusion requires strictly exceeding the threshold.
    pub fn evaluate(&self, value: &str) -> Result<FrequencyOutcome, StoreError> {
        if self.threshold == 0 {
            return Ok(FrequencyOutcome::Keep);
        }
        let for_value = match self.store.count_unique_tuples_for_value(self.attribute, value) {
            Ok(count) => count,
            Err(err) if err.is_normalization() => {
                warn!(
                    value,
                    error = %err,
                    "unable to determine frequency percentage; keeping value unchecked"
                );
                return Ok(FrequencyOutcome::KeepUnchecked {
                    reason: err.to_string(),
                });
            }
            Err(err) => return Err(err),
        };
        let percentage = (for_value / self.total_tuples * 100.0) as u32;
        if percentage > self.threshold {
            Ok(FrequencyOutcome::Exclude)
        } else {
            Ok(FrequencyOutcome::Keep)
        }
    }
}
