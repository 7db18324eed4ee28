//! Ledger error types for withdrawal validation and settlement.

use crate::ledger::types::PaymentStatus;
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors that can occur during withdrawal ledger operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Withdrawal amount must be strictly positive.
    #[error("Withdrawal amount must be greater than zero")]
    InvalidAmount {
        /// The amount that was requested.
        amount: Decimal,
    },

    /// Requested more than the worker's current balance.
    #[error("Insufficient balance: requested {requested}, available {available}")]
    InsufficientBalance {
        /// The amount that was requested.
        requested: Decimal,
        /// The balance available at the time of the request.
        available: Decimal,
    },

    /// The payment has already been decided.
    #[error("Payment is not pending (current status: {status})")]
    NotPending {
        /// The status the payment is actually in.
        status: PaymentStatus,
    },
}

impl LedgerError {
    /// Returns the error code for caller-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::InsufficientBalance { .. } => "INSUFFICIENT_BALANCE",
            Self::NotPending { .. } => "NOT_PENDING",
        }
    }
}
