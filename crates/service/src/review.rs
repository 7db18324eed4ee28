//! Admin review coordination over workers and withdrawals.

use std::sync::Arc;

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crewline_core::account::{AccountLifecycle, ReviewAction};
use crewline_core::ledger::{LedgerError, Payment, Settlement, WithdrawalLedger};
use crewline_core::worker::{StatusFilter, Worker, WorkerListView};
use crewline_shared::{PaymentId, WorkerId};
use crewline_store::{PaymentFilter, Store, StoreError};

use crate::context::AdminContext;
use crate::error::ReviewError;

/// A withdrawal awaiting decision, joined with the requesting worker.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PendingWithdrawal {
    /// The pending payment.
    pub payment: Payment,
    /// The requesting worker, if the record still exists.
    pub worker: Option<Worker>,
}

/// Coordinates admin review decisions over workers and withdrawals.
///
/// Every decision takes an [`AdminContext`] and logs the acting admin. A
/// decision only succeeds once the store confirms the conditional write;
/// a failed write surfaces its error and leaves the entity unchanged.
///
/// The review surface covers approve, suspend, and terminate for
/// accounts. Reactivating a suspended account is a valid lifecycle
/// transition but is not offered here.
pub struct ReviewCoordinator {
    store: Arc<dyn Store>,
}

impl ReviewCoordinator {
    /// Creates the coordinator.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Approves a pending worker account.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker is missing, not in pending status,
    /// or the storage layer fails.
    pub async fn approve_worker(
        &self,
        ctx: AdminContext,
        worker_id: WorkerId,
    ) -> Result<Worker, ReviewError> {
        self.review_account(ctx, worker_id, ReviewAction::Approve)
            .await
    }

    /// Suspends an active worker account.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker is missing, not in active status,
    /// or the storage layer fails.
    pub async fn suspend_worker(
        &self,
        ctx: AdminContext,
        worker_id: WorkerId,
    ) -> Result<Worker, ReviewError> {
        self.review_account(ctx, worker_id, ReviewAction::Suspend)
            .await
    }

    /// Terminates a worker account permanently.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker is missing, already terminated, or
    /// the storage layer fails.
    pub async fn terminate_worker(
        &self,
        ctx: AdminContext,
        worker_id: WorkerId,
    ) -> Result<Worker, ReviewError> {
        self.review_account(ctx, worker_id, ReviewAction::Terminate)
            .await
    }

    /// Approves a pending withdrawal, settling it as completed.
    ///
    /// The amount was reserved when the worker requested the withdrawal,
    /// so approval does not touch the balance.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment is missing, no longer pending, or
    /// the storage layer fails.
    pub async fn approve_withdrawal(
        &self,
        ctx: AdminContext,
        payment_id: PaymentId,
    ) -> Result<Payment, ReviewError> {
        let payment = self
            .store
            .get_payment(payment_id)
            .await?
            .ok_or(ReviewError::PaymentNotFound(payment_id))?;

        let settlement = WithdrawalLedger::approve(payment.status, Utc::now())?;
        let settled = self.settle(payment_id, settlement).await?;
        info!(
            admin_id = %ctx.admin_id,
            payment_id = %payment_id,
            worker_id = %settled.worker_id,
            "Withdrawal approved"
        );
        Ok(settled)
    }

    /// Rejects a pending withdrawal, refunding the reserved amount.
    ///
    /// # Errors
    ///
    /// Returns an error if the payment is missing, no longer pending, or
    /// the storage layer fails.
    pub async fn reject_withdrawal(
        &self,
        ctx: AdminContext,
        payment_id: PaymentId,
    ) -> Result<Payment, ReviewError> {
        let payment = self
            .store
            .get_payment(payment_id)
            .await?
            .ok_or(ReviewError::PaymentNotFound(payment_id))?;

        let settlement = WithdrawalLedger::reject(payment.status, payment.amount)?;
        let settled = self.settle(payment_id, settlement).await?;
        info!(
            admin_id = %ctx.admin_id,
            payment_id = %payment_id,
            worker_id = %settled.worker_id,
            amount = %settled.amount,
            "Withdrawal rejected and refunded"
        );
        Ok(settled)
    }

    /// Lists workers for the admin review screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage layer fails.
    pub async fn worker_list(&self, filter: StatusFilter) -> Result<WorkerListView, ReviewError> {
        let workers = self.store.list_workers().await?;
        Ok(WorkerListView::build(workers, filter))
    }

    /// Lists withdrawals awaiting decision, oldest first, joined with the
    /// requesting worker for display.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage layer fails.
    pub async fn pending_withdrawals(&self) -> Result<Vec<PendingWithdrawal>, ReviewError> {
        let payments = self
            .store
            .list_payments(PaymentFilter::pending_withdrawals())
            .await?;

        let mut pending = Vec::with_capacity(payments.len());
        for payment in payments {
            let worker = self.store.get_worker(payment.worker_id).await?;
            pending.push(PendingWithdrawal { payment, worker });
        }
        Ok(pending)
    }

    async fn review_account(
        &self,
        ctx: AdminContext,
        worker_id: WorkerId,
        action: ReviewAction,
    ) -> Result<Worker, ReviewError> {
        let worker = self
            .store
            .get_worker(worker_id)
            .await?
            .ok_or(ReviewError::WorkerNotFound(worker_id))?;

        let change = AccountLifecycle::transition(worker.account_status, action, ctx.admin_id)?;

        match self
            .store
            .update_account_status(worker_id, worker.revision, change.new_status)
            .await
        {
            Ok(updated) => {
                info!(
                    admin_id = %ctx.admin_id,
                    worker_id = %worker_id,
                    action = %change.action,
                    status = %updated.account_status,
                    "Worker account reviewed"
                );
                Ok(updated)
            }
            Err(e) => {
                error!(error = %e, worker_id = %worker_id, "Failed to persist account decision");
                Err(e.into())
            }
        }
    }

    async fn settle(
        &self,
        payment_id: PaymentId,
        settlement: Settlement,
    ) -> Result<Payment, ReviewError> {
        match self.store.settle_payment(payment_id, settlement).await {
            Ok((payment, _)) => Ok(payment),
            // Another admin decided first; the payment is no longer pending.
            Err(StoreError::StatusConflict { actual, .. }) => {
                Err(LedgerError::NotPending { status: actual }.into())
            }
            Err(e) => {
                error!(error = %e, payment_id = %payment_id, "Failed to persist withdrawal decision");
                Err(e.into())
            }
        }
    }
}
