//! Review decision validation.
//!
//! This module implements the pure part of the state machine: given a
//! transaction's current status and the reviewer's requested status,
//! either the transition is legal or it maps to exactly one error.

use crate::lifecycle::error::LifecycleError;
use crate::lifecycle::types::TransactionStatus;

/// Stateless service validating review decisions.
pub struct LifecycleService;

impl LifecycleService {
    /// Validates a review decision against the current status.
    ///
    /// The finalized check runs before the requested-status check, so a
    /// garbage decision on an already-finalized transaction reports
    /// `AlreadyFinalized`, not `InvalidStatus`.
    ///
    /// # Arguments
    /// * `current_status` - The status the transaction holds right now
    /// * `requested_status` - The raw decision string from the reviewer
    ///
    /// # Returns
    /// * `Ok(status)` - the terminal status to write, if the transition is legal
    /// * `Err(LifecycleError::AlreadyFinalized)` - if not in `Pending`
    /// * `Err(LifecycleError::InvalidStatus)` - if the decision is not
    ///   `Approved` or `Rejected`
    pub fn decide(
        current_status: TransactionStatus,
        requested_status: &str,
    ) -> Result<TransactionStatus, LifecycleError> {
        if current_status != TransactionStatus::Pending {
            return Err(LifecycleError::AlreadyFinalized {
                status: current_status,
            });
        }

        match TransactionStatus::parse(requested_status) {
            Some(status) if status.is_terminal() => Ok(status),
            _ => Err(LifecycleError::InvalidStatus(requested_status.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approve_pending() {
        let status = LifecycleService::decide(TransactionStatus::Pending, "Approved").unwrap();
        assert_eq!(status, TransactionStatus::Approved);
    }

    #[test]
    fn test_reject_pending() {
        let status = LifecycleService::decide(TransactionStatus::Pending, "Rejected").unwrap();
        assert_eq!(status, TransactionStatus::Rejected);
    }

    #[test]
    fn test_decision_is_case_insensitive() {
        let status = LifecycleService::decide(TransactionStatus::Pending, "approved").unwrap();
        assert_eq!(status, TransactionStatus::Approved);
    }

    #[test]
    fn test_finalized_rejects_further_decisions() {
        let result = LifecycleService::decide(TransactionStatus::Approved, "Rejected");
        assert!(matches!(
            result,
            Err(LifecycleError::AlreadyFinalized {
                status: TransactionStatus::Approved
            })
        ));
    }

    #[test]
    fn test_finalized_wins_over_invalid_decision() {
        // Step order: the finalized check runs first.
        let result = LifecycleService::decide(TransactionStatus::Rejected, "Cancelled");
        assert!(matches!(
            result,
            Err(LifecycleError::AlreadyFinalized {
                status: TransactionStatus::Rejected
            })
        ));
    }

    #[test]
    fn test_unknown_decision_is_invalid() {
        let result = LifecycleService::decide(TransactionStatus::Pending, "Cancelled");
        assert!(matches!(result, Err(LifecycleError::InvalidStatus(s)) if s == "Cancelled"));
    }

    #[test]
    fn test_pending_is_not_a_decision() {
        // Re-requesting Pending is not a legal transition.
        let result = LifecycleService::decide(TransactionStatus::Pending, "Pending");
        assert!(matches!(result, Err(LifecycleError::InvalidStatus(_))));
    }
}
