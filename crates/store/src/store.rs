//! The storage contract shared by every backend.
//!
//! Services fetch entities, run the domain rules in memory, then persist
//! through the conditional writes below. Each write names the state it was
//! computed from (a worker revision, a pending payment status, a free
//! submission slot); the store rejects the write with a conflict error when
//! that state has moved, and the caller decides whether to retry.

use rust_decimal::Decimal;

use crewline_core::account::AccountStatus;
use crewline_core::ledger::{Payment, PaymentStatus, PaymentType, Settlement};
use crewline_core::submission::DailySubmission;
use crewline_core::worker::Worker;
use crewline_shared::{PaymentId, WorkerId};

use crate::error::StoreError;

/// Filter options for listing payments.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymentFilter {
    /// Filter by payment status.
    pub status: Option<PaymentStatus>,
    /// Filter by payment type.
    pub payment_type: Option<PaymentType>,
}

impl PaymentFilter {
    /// Filter matching withdrawal payments that still await a decision.
    #[must_use]
    pub const fn pending_withdrawals() -> Self {
        Self {
            status: Some(PaymentStatus::Pending),
            payment_type: Some(PaymentType::Withdrawal),
        }
    }

    /// Returns true if the payment passes this filter.
    #[must_use]
    pub fn matches(&self, payment: &Payment) -> bool {
        self.status.is_none_or(|status| payment.status == status)
            && self
                .payment_type
                .is_none_or(|kind| payment.payment_type == kind)
    }
}

/// Storage operations for workers, submissions, and payments.
///
/// Implementations must apply each method atomically: either every listed
/// effect happens, or the call fails and nothing is modified.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    /// Fetches a worker by id.
    async fn get_worker(&self, worker_id: WorkerId) -> Result<Option<Worker>, StoreError>;

    /// Lists all workers, oldest first.
    async fn list_workers(&self) -> Result<Vec<Worker>, StoreError>;

    /// Writes a new account status if the stored revision still matches.
    ///
    /// On success the revision is incremented and the updated worker is
    /// returned. The status is the only worker field this method changes.
    ///
    /// # Errors
    ///
    /// Returns `WorkerNotFound` if the worker does not exist, or
    /// `RevisionConflict` if another write landed after `expected_revision`
    /// was read.
    async fn update_account_status(
        &self,
        worker_id: WorkerId,
        expected_revision: u64,
        status: AccountStatus,
    ) -> Result<Worker, StoreError>;

    /// Lists a worker's submissions, oldest first.
    async fn submissions_for_worker(
        &self,
        worker_id: WorkerId,
    ) -> Result<Vec<DailySubmission>, StoreError>;

    /// Inserts a submission, enforcing one per worker per date.
    ///
    /// # Errors
    ///
    /// Returns `WorkerNotFound` if the worker does not exist, or
    /// `DuplicateSubmission` if a record for the same worker and date was
    /// already stored.
    async fn create_submission(
        &self,
        submission: DailySubmission,
    ) -> Result<DailySubmission, StoreError>;

    /// Fetches a payment by id.
    async fn get_payment(&self, payment_id: PaymentId) -> Result<Option<Payment>, StoreError>;

    /// Lists payments matching the filter, oldest first.
    async fn list_payments(&self, filter: PaymentFilter) -> Result<Vec<Payment>, StoreError>;

    /// Debits the worker balance and records the pending payment in one
    /// write.
    ///
    /// `balance_after` is the balance the ledger rules computed from the
    /// worker state read at `expected_revision`; the store never does its
    /// own arithmetic on it.
    ///
    /// # Errors
    ///
    /// Returns `WorkerNotFound` if the worker does not exist, or
    /// `RevisionConflict` if the balance may have changed since it was
    /// read. On error no payment is recorded.
    async fn create_withdrawal(
        &self,
        worker_id: WorkerId,
        expected_revision: u64,
        balance_after: Decimal,
        payment: Payment,
    ) -> Result<(Worker, Payment), StoreError>;

    /// Settles a pending payment, applying the refund when the settlement
    /// carries one.
    ///
    /// Returns the settled payment, plus the updated worker when a refund
    /// was credited.
    ///
    /// # Errors
    ///
    /// Returns `PaymentNotFound` if the payment does not exist,
    /// `StatusConflict` if it is no longer pending, or `WorkerNotFound`
    /// if a refund target is missing. Only one settlement can ever
    /// succeed for a given payment.
    async fn settle_payment(
        &self,
        payment_id: PaymentId,
        settlement: Settlement,
    ) -> Result<(Payment, Option<Worker>), StoreError>;
}
