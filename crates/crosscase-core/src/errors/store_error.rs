/// Errors surfaced by the central correlation datastore.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The value could not be canonicalized for comparison. A data-quality
    /// condition, not a system fault; callers treat it as fail-open.
    #[error("value {value:?} could not be normalized for type {attribute}: {reason}")]
    Normalization {
        attribute: String,
        value: String,
        reason: String,
    },

    #[error("correlation store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("malformed response from correlation store: {details}")]
    Malformed { details: String },
}

impl StoreError {
    /// True for the recoverable per-value case.
    pub fn is_normalization(&self) -> bool {
        matches!(self, StoreError::Normalization { .. })
    }
}
