//! Property-based tests for AccountLifecycle.
//!
//! These tests validate the transition matrix with randomized inputs
//! using proptest.

use proptest::prelude::*;
use uuid::Uuid;

use crate::account::error::LifecycleError;
use crate::account::service::AccountLifecycle;
use crate::account::types::{AccountStatus, ReviewAction};
use crewline_shared::AdminId;

/// Strategy for generating random AccountStatus values.
fn arb_status() -> impl Strategy<Value = AccountStatus> {
    prop_oneof![
        Just(AccountStatus::Pending),
        Just(AccountStatus::Active),
        Just(AccountStatus::Suspended),
        Just(AccountStatus::Terminated),
    ]
}

/// Strategy for generating random ReviewAction values.
fn arb_action() -> impl Strategy<Value = ReviewAction> {
    prop_oneof![
        Just(ReviewAction::Approve),
        Just(ReviewAction::Suspend),
        Just(ReviewAction::Reactivate),
        Just(ReviewAction::Terminate),
    ]
}

/// Strategy for generating random admin IDs.
fn arb_admin() -> impl Strategy<Value = AdminId> {
    any::<u128>().prop_map(|n| AdminId::from_uuid(Uuid::from_u128(n)))
}

/// The allowed (status, action) pairs, as one source of truth for the
/// properties below.
fn transition_allowed(from: AccountStatus, action: ReviewAction) -> bool {
    matches!(
        (from, action),
        (AccountStatus::Pending, ReviewAction::Approve)
            | (AccountStatus::Active, ReviewAction::Suspend)
            | (AccountStatus::Suspended, ReviewAction::Reactivate)
            | (
                AccountStatus::Pending | AccountStatus::Active | AccountStatus::Suspended,
                ReviewAction::Terminate
            )
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property: the transition matrix is exactly the allowed set
    // =========================================================================

    /// Every (status, action) pair succeeds iff it is in the allowed set,
    /// and a success always lands on the action's target status.
    #[test]
    fn prop_transition_matrix_is_exact(
        from in arb_status(),
        action in arb_action(),
        admin in arb_admin(),
    ) {
        let result = AccountLifecycle::transition(from, action, admin);
        if transition_allowed(from, action) {
            let change = result.unwrap();
            prop_assert_eq!(change.new_status, action.target_status());
            prop_assert_eq!(change.decided_by, admin);
            prop_assert_eq!(change.action, action);
        } else {
            prop_assert_eq!(
                result,
                Err(LifecycleError::InvalidTransition { from, action })
            );
        }
    }

    // =========================================================================
    // Property: terminated is a sink state
    // =========================================================================

    /// No action ever succeeds from Terminated.
    #[test]
    fn prop_terminated_is_a_sink(action in arb_action(), admin in arb_admin()) {
        let result = AccountLifecycle::transition(AccountStatus::Terminated, action, admin);
        prop_assert!(result.is_err());
    }

    // =========================================================================
    // Property: is_valid_transition agrees with transition()
    // =========================================================================

    /// A successful transition implies `is_valid_transition(from, new)`.
    #[test]
    fn prop_successful_transitions_are_valid(
        from in arb_status(),
        action in arb_action(),
        admin in arb_admin(),
    ) {
        if let Ok(change) = AccountLifecycle::transition(from, action, admin) {
            prop_assert!(AccountLifecycle::is_valid_transition(from, change.new_status));
        }
    }

    /// A valid (from, to) edge is reachable by some action.
    #[test]
    fn prop_valid_edges_are_reachable(
        from in arb_status(),
        to in arb_status(),
        admin in arb_admin(),
    ) {
        prop_assume!(AccountLifecycle::is_valid_transition(from, to));
        let reachable = [
            ReviewAction::Approve,
            ReviewAction::Suspend,
            ReviewAction::Reactivate,
            ReviewAction::Terminate,
        ]
        .into_iter()
        .any(|action| {
            AccountLifecycle::transition(from, action, admin)
                .is_ok_and(|change| change.new_status == to)
        });
        prop_assert!(reachable);
    }

    // =========================================================================
    // Property: transitions never invent states
    // =========================================================================

    /// The status after a successful transition differs from the status
    /// before it (no self-loops in this lifecycle).
    #[test]
    fn prop_no_self_loops(
        from in arb_status(),
        action in arb_action(),
        admin in arb_admin(),
    ) {
        if let Ok(change) = AccountLifecycle::transition(from, action, admin) {
            prop_assert_ne!(change.new_status, from);
        }
    }
}
