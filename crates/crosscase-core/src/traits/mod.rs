pub mod store;

pub use store::ICorrelationStore;
