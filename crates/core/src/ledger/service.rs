//! Withdrawal ledger rules: reserve, settle, refund.
//!
//! This module provides the core business logic for worker withdrawals.
//! The rules are pure: they take the current balance or payment status and
//! return the value the storage layer must apply atomically.
//!
//! The reserve-at-request invariant lives here: a successful `reserve`
//! couples the balance debit with the pending payment, `approve` never
//! touches balance (it was deducted at request time), and only `reject`
//! puts the amount back.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::ledger::error::LedgerError;
use crate::ledger::types::{PaymentStatus, Reservation, Settlement};

/// Stateless service implementing the withdrawal ledger rules.
pub struct WithdrawalLedger;

impl WithdrawalLedger {
    /// Reserve a withdrawal against the worker's current balance.
    ///
    /// # Arguments
    /// * `balance` - The worker's current balance
    /// * `amount` - The requested withdrawal amount
    ///
    /// # Returns
    /// * `Ok(Reservation)` with the balance after the debit
    /// * `Err(LedgerError::InvalidAmount)` if `amount <= 0`
    /// * `Err(LedgerError::InsufficientBalance)` if `amount > balance`
    pub fn reserve(balance: Decimal, amount: Decimal) -> Result<Reservation, LedgerError> {
        if amount <= Decimal::ZERO {
            return Err(LedgerError::InvalidAmount { amount });
        }
        if amount > balance {
            return Err(LedgerError::InsufficientBalance {
                requested: amount,
                available: balance,
            });
        }
        Ok(Reservation {
            amount,
            balance_after: balance - amount,
        })
    }

    /// Approve a pending withdrawal.
    ///
    /// The amount was already deducted when the worker requested the
    /// withdrawal, so approval settles the payment without any balance
    /// change.
    ///
    /// # Arguments
    /// * `current_status` - The payment's current status
    /// * `completed_at` - The timestamp to record on the settled payment
    ///
    /// # Returns
    /// * `Ok(Settlement::Complete)` with the completion timestamp
    /// * `Err(LedgerError::NotPending)` if the payment is already decided
    pub fn approve(
        current_status: PaymentStatus,
        completed_at: DateTime<Utc>,
    ) -> Result<Settlement, LedgerError> {
        match current_status {
            PaymentStatus::Pending => Ok(Settlement::Complete { completed_at }),
            _ => Err(LedgerError::NotPending {
                status: current_status,
            }),
        }
    }

    /// Reject a pending withdrawal and refund the reserved amount.
    ///
    /// # Arguments
    /// * `current_status` - The payment's current status
    /// * `amount` - The payment amount to refund
    ///
    /// # Returns
    /// * `Ok(Settlement::FailAndRefund)` crediting the amount back
    /// * `Err(LedgerError::NotPending)` if the payment is already decided
    pub fn reject(
        current_status: PaymentStatus,
        amount: Decimal,
    ) -> Result<Settlement, LedgerError> {
        match current_status {
            PaymentStatus::Pending => Ok(Settlement::FailAndRefund { amount }),
            _ => Err(LedgerError::NotPending {
                status: current_status,
            }),
        }
    }
}
