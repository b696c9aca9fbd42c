//! Resource error types
//!
//! `ValidationError` is the only client-facing failure: one message, reported
//! as-is. `CreateError` wraps it together with store failures for the create
//! pipeline.

use thiserror::Error;

use crate::store::StoreError;

use super::types::{FieldKind, FieldRule};

/// First field rule a payload violated
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    /// Offending field name
    pub field: &'static str,
    /// Type the field must carry
    pub expected: FieldKind,
    /// Human-readable message, returned verbatim to callers
    pub message: &'static str,
}

impl ValidationError {
    pub fn from_rule(rule: &FieldRule) -> Self {
        Self {
            field: rule.name,
            expected: rule.kind,
            message: rule.message,
        }
    }

    pub fn message(&self) -> &'static str {
        self.message
    }
}

/// Result type for resource creation
pub type CreateResult<T> = Result<T, CreateError>;

/// Resource creation errors
#[derive(Debug, Error)]
pub enum CreateError {
    /// Payload failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Store could not accept the record
    #[error(transparent)]
    Store(#[from] StoreError),
}
