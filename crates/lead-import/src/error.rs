//! Error types for lead import operations.

use thiserror::Error;

/// Failure reported by a [`LeadStore`](crate::LeadStore) implementation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StoreError {
    message: String,
}

impl StoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Failure reported by an [`EmailVerifier`](crate::EmailVerifier).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct VerifyError {
    message: String,
}

impl VerifyError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors that reject a whole import request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("leads must be a non-empty array")]
    EmptyBatch,

    #[error("No valid leads found. firstName, lastName, and email are required.")]
    NoValidLeads,

    #[error("leadIds must be a non-empty array")]
    EmptyLeadIds,

    #[error("No leads found with the provided IDs")]
    LeadsNotFound,

    #[error("template must be a non-empty string")]
    EmptyTemplate,

    #[error("lead store failed: {0}")]
    Store(#[from] StoreError),
}

/// Result type for import operations.
pub type Result<T> = std::result::Result<T, ImportError>;

/// Result type returned by store implementations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;
