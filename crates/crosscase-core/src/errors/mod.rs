pub mod store_error;

pub use store_error::StoreError;

/// Top-level error for a filtering pass.
#[derive(Debug, thiserror::Error)]
pub enum CorrelationError {
    /// The configured attribute-type id is not in the catalog. This is a
    /// programming invariant violation, not a runtime condition.
    #[error("no attribute type with id {id} in the catalog")]
    UnknownAttributeType { id: u32 },

    /// A fatal datastore failure. Normalization failures never reach this
    /// level; they are recovered per value inside the frequency filter.
    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type CorrelationResult<T> = Result<T, CorrelationError>;
