//! Service error types.
//!
//! Each service surfaces the underlying rule and store errors unchanged
//! so callers can match on the precise failure. The only additions are
//! the not-found and authorization checks the services perform at the
//! boundary before any rule runs.

use thiserror::Error;

use crewline_core::account::{AccountStatus, LifecycleError};
use crewline_core::ledger::LedgerError;
use crewline_core::submission::ValidationError;
use crewline_shared::{PaymentId, WorkerId};
use crewline_store::StoreError;

/// Errors from filing a daily submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// No worker record with this id.
    #[error("Worker not found: {0}")]
    WorkerNotFound(WorkerId),

    /// The account status does not allow filing submissions.
    #[error("Account is {status} and cannot submit work")]
    NotAuthorized {
        /// The status the account is actually in.
        status: AccountStatus,
    },

    /// The draft failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The storage layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SubmitError {
    /// Returns the error code for caller-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::WorkerNotFound(_) => "WORKER_NOT_FOUND",
            Self::NotAuthorized { .. } => "NOT_AUTHORIZED",
            Self::Validation(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
        }
    }
}

/// Errors from requesting a withdrawal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WithdrawError {
    /// No worker record with this id.
    #[error("Worker not found: {0}")]
    WorkerNotFound(WorkerId),

    /// The account status does not allow requesting withdrawals.
    #[error("Account is {status} and cannot request withdrawals")]
    NotAuthorized {
        /// The status the account is actually in.
        status: AccountStatus,
    },

    /// The ledger rules rejected the request.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The storage layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl WithdrawError {
    /// Returns the error code for caller-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::WorkerNotFound(_) => "WORKER_NOT_FOUND",
            Self::NotAuthorized { .. } => "NOT_AUTHORIZED",
            Self::Ledger(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
        }
    }
}

/// Errors from admin review operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewError {
    /// No worker record with this id.
    #[error("Worker not found: {0}")]
    WorkerNotFound(WorkerId),

    /// No payment record with this id.
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// The account lifecycle rejected the action.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),

    /// The ledger rules rejected the decision.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// The storage layer failed.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ReviewError {
    /// Returns the error code for caller-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::WorkerNotFound(_) => "WORKER_NOT_FOUND",
            Self::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            Self::Lifecycle(e) => e.error_code(),
            Self::Ledger(e) => e.error_code(),
            Self::Store(e) => e.error_code(),
        }
    }
}
