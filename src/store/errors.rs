//! Store error types

use thiserror::Error;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A writer panicked while holding the collection lock
    #[error("Collection '{0}' is unavailable: lock poisoned")]
    Poisoned(&'static str),
}
