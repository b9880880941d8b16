//! Lifecycle error types.
//!
//! Every rejected transition is reported distinctly to the caller; none of
//! these outcomes changes by retrying the same request. Only `Database`
//! is retriable, at the caller's discretion.

use thiserror::Error;
use uuid::Uuid;

use crate::lifecycle::types::TransactionStatus;

/// Errors that can occur while managing a transaction's lifecycle.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Transaction not found.
    #[error("Transaction {0} not found")]
    NotFound(Uuid),

    /// Requested status is not a legal review decision.
    #[error("Invalid status {0:?}: must be Approved or Rejected")]
    InvalidStatus(String),

    /// Transaction already left `Pending`; the record was not changed.
    #[error("Transaction already finalized as {status}")]
    AlreadyFinalized {
        /// The terminal status the transaction holds.
        status: TransactionStatus,
    },

    /// Store error.
    #[error("Database error: {0}")]
    Database(String),
}

impl LifecycleError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InvalidStatus(_) => 400,
            Self::AlreadyFinalized { .. } => 409,
            Self::Database(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "not_found",
            Self::InvalidStatus(_) => "invalid_status",
            Self::AlreadyFinalized { .. } => "already_finalized",
            Self::Database(_) => "database_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_error() {
        let err = LifecycleError::NotFound(Uuid::nil());
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.error_code(), "not_found");
    }

    #[test]
    fn test_invalid_status_error() {
        let err = LifecycleError::InvalidStatus("Cancelled".to_string());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "invalid_status");
        assert!(err.to_string().contains("Cancelled"));
    }

    #[test]
    fn test_already_finalized_error() {
        let err = LifecycleError::AlreadyFinalized {
            status: TransactionStatus::Approved,
        };
        assert_eq!(err.status_code(), 409);
        assert_eq!(err.error_code(), "already_finalized");
        assert!(err.to_string().contains("Approved"));
    }

    #[test]
    fn test_database_error() {
        let err = LifecycleError::Database("connection reset".to_string());
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.error_code(), "database_error");
    }
}
