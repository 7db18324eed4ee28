//! Property-based tests for WithdrawalLedger.
//!
//! The properties pin the reserve-at-request bookkeeping: reservation
//! conserves money, settlement never moves balance, and a payment can be
//! decided at most once.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use super::error::LedgerError;
use super::service::WithdrawalLedger;
use super::types::{PaymentStatus, Reservation, Settlement};

/// Strategy for generating money amounts with two decimal places.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating non-negative balances.
fn arb_balance() -> impl Strategy<Value = Decimal> {
    (0i64..10_000_000i64).prop_map(|n| Decimal::new(n, 2))
}

/// Strategy for generating payment statuses.
fn arb_status() -> impl Strategy<Value = PaymentStatus> {
    prop_oneof![
        Just(PaymentStatus::Pending),
        Just(PaymentStatus::Completed),
        Just(PaymentStatus::Failed),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property: reservation conserves money
    // =========================================================================

    /// A successful reserve debits exactly the requested amount, and the
    /// resulting balance is never negative.
    #[test]
    fn prop_reserve_conserves_money(balance in arb_balance(), amount in arb_amount()) {
        match WithdrawalLedger::reserve(balance, amount) {
            Ok(Reservation { amount: reserved, balance_after }) => {
                prop_assert_eq!(reserved, amount);
                prop_assert_eq!(balance_after + reserved, balance);
                prop_assert!(balance_after >= Decimal::ZERO);
            }
            Err(LedgerError::InvalidAmount { .. }) => {
                prop_assert!(amount <= Decimal::ZERO);
            }
            Err(LedgerError::InsufficientBalance { requested, available }) => {
                prop_assert!(amount > balance);
                prop_assert_eq!(requested, amount);
                prop_assert_eq!(available, balance);
            }
            Err(e) => prop_assert!(false, "unexpected error: {e}"),
        }
    }

    /// Reserve succeeds exactly when the amount is positive and covered.
    #[test]
    fn prop_reserve_success_condition(balance in arb_balance(), amount in arb_amount()) {
        let ok = WithdrawalLedger::reserve(balance, amount).is_ok();
        prop_assert_eq!(ok, amount > Decimal::ZERO && amount <= balance);
    }

    /// A refund of the reserved amount restores the original balance.
    #[test]
    fn prop_reserve_then_refund_round_trips(balance in arb_balance(), amount in arb_amount()) {
        prop_assume!(amount > Decimal::ZERO && amount <= balance);
        let Ok(Reservation { amount: reserved, balance_after }) =
            WithdrawalLedger::reserve(balance, amount)
        else {
            return Err(TestCaseError::fail("reserve should succeed"));
        };
        let Ok(Settlement::FailAndRefund { amount: refunded }) =
            WithdrawalLedger::reject(PaymentStatus::Pending, reserved)
        else {
            return Err(TestCaseError::fail("reject of pending should succeed"));
        };
        prop_assert_eq!(balance_after + refunded, balance);
    }

    // =========================================================================
    // Property: settlement decides a payment at most once
    // =========================================================================

    /// Approve succeeds only from Pending.
    #[test]
    fn prop_approve_only_from_pending(status in arb_status()) {
        let result = WithdrawalLedger::approve(status, Utc::now());
        prop_assert_eq!(result.is_ok(), status == PaymentStatus::Pending);
        if let Err(e) = result {
            prop_assert_eq!(e, LedgerError::NotPending { status });
        }
    }

    /// Reject succeeds only from Pending.
    #[test]
    fn prop_reject_only_from_pending(status in arb_status(), amount in arb_balance()) {
        let result = WithdrawalLedger::reject(status, amount);
        prop_assert_eq!(result.is_ok(), status == PaymentStatus::Pending);
    }

    /// After either decision, both further decisions fail: at most one of
    /// approve/reject ever succeeds for a payment.
    #[test]
    fn prop_decisions_are_exclusive(first_is_approve in any::<bool>(), amount in arb_balance()) {
        let first = if first_is_approve {
            WithdrawalLedger::approve(PaymentStatus::Pending, Utc::now())
        } else {
            WithdrawalLedger::reject(PaymentStatus::Pending, amount)
        };
        let settled = first.unwrap().new_status();
        prop_assert!(settled.is_settled());
        prop_assert!(WithdrawalLedger::approve(settled, Utc::now()).is_err());
        prop_assert!(WithdrawalLedger::reject(settled, amount).is_err());
    }
}
