//! Property-based tests for the review decision logic.

use proptest::prelude::*;

use crate::lifecycle::error::LifecycleError;
use crate::lifecycle::service::LifecycleService;
use crate::lifecycle::types::TransactionStatus;

/// Strategy for generating random status values.
fn arb_status() -> impl Strategy<Value = TransactionStatus> {
    prop_oneof![
        Just(TransactionStatus::Pending),
        Just(TransactionStatus::Approved),
        Just(TransactionStatus::Rejected),
    ]
}

/// Strategy for arbitrary decision strings, biased toward real values.
fn arb_decision() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Approved".to_string()),
        Just("Rejected".to_string()),
        Just("Pending".to_string()),
        "[A-Za-z]{0,12}",
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Once a transaction leaves Pending, every further decision fails with
    /// AlreadyFinalized, regardless of what is requested.
    #[test]
    fn prop_terminal_states_are_immutable(
        current in arb_status().prop_filter("terminal only", TransactionStatus::is_terminal),
        decision in arb_decision(),
    ) {
        let result = LifecycleService::decide(current, &decision);
        let already_finalized = matches!(
            result,
            Err(LifecycleError::AlreadyFinalized { status }) if status == current
        );
        prop_assert!(already_finalized);
    }

    /// A successful decision always lands in a terminal state, and only a
    /// terminal state can be requested.
    #[test]
    fn prop_success_implies_terminal_target(decision in arb_decision()) {
        match LifecycleService::decide(TransactionStatus::Pending, &decision) {
            Ok(status) => {
                prop_assert!(status.is_terminal());
                prop_assert_eq!(TransactionStatus::parse(&decision), Some(status));
            }
            Err(LifecycleError::InvalidStatus(s)) => {
                let parsed = TransactionStatus::parse(&s);
                prop_assert!(parsed.is_none_or(|p| !p.is_terminal()));
            }
            Err(other) => prop_assert!(false, "unexpected error: {other}"),
        }
    }
}
