//! In-memory store used by tests and local tooling.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;

use crewline_core::account::AccountStatus;
use crewline_core::ledger::{Payment, PaymentStatus, Settlement};
use crewline_core::submission::DailySubmission;
use crewline_core::worker::Worker;
use crewline_shared::{PaymentId, SubmissionId, WorkerId};

use crate::error::StoreError;
use crate::store::{PaymentFilter, Store};

#[derive(Debug, Default)]
struct Inner {
    workers: HashMap<WorkerId, Worker>,
    submissions: HashMap<SubmissionId, DailySubmission>,
    submission_days: HashMap<(WorkerId, NaiveDate), SubmissionId>,
    payments: HashMap<PaymentId, Payment>,
}

/// In-memory [`Store`] implementation.
///
/// All state sits behind a single `RwLock`. Every conditional write runs
/// its checks and its mutations inside one write-lock scope, so the
/// multi-entity operations observe and produce consistent state.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

fn poisoned<G>(_: PoisonError<G>) -> StoreError {
    StoreError::Backend("storage lock poisoned".to_string())
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a worker record. Intended for seeding.
    ///
    /// # Errors
    ///
    /// Returns `Backend` if the lock is poisoned.
    pub fn insert_worker(&self, worker: Worker) -> Result<(), StoreError> {
        self.write_inner()?.workers.insert(worker.id, worker);
        Ok(())
    }

    /// Inserts or replaces a payment record. Intended for seeding.
    ///
    /// # Errors
    ///
    /// Returns `Backend` if the lock is poisoned.
    pub fn insert_payment(&self, payment: Payment) -> Result<(), StoreError> {
        self.write_inner()?.payments.insert(payment.id, payment);
        Ok(())
    }

    fn read_inner(&self) -> Result<RwLockReadGuard<'_, Inner>, StoreError> {
        self.inner.read().map_err(poisoned)
    }

    fn write_inner(&self) -> Result<RwLockWriteGuard<'_, Inner>, StoreError> {
        self.inner.write().map_err(poisoned)
    }
}

#[async_trait::async_trait]
impl Store for MemoryStore {
    async fn get_worker(&self, worker_id: WorkerId) -> Result<Option<Worker>, StoreError> {
        Ok(self.read_inner()?.workers.get(&worker_id).cloned())
    }

    async fn list_workers(&self) -> Result<Vec<Worker>, StoreError> {
        let inner = self.read_inner()?;
        let mut workers: Vec<Worker> = inner.workers.values().cloned().collect();
        workers.sort_by_key(|w| (w.created_at, w.id.into_inner()));
        Ok(workers)
    }

    async fn update_account_status(
        &self,
        worker_id: WorkerId,
        expected_revision: u64,
        status: AccountStatus,
    ) -> Result<Worker, StoreError> {
        let mut inner = self.write_inner()?;
        let worker = inner
            .workers
            .get_mut(&worker_id)
            .ok_or(StoreError::WorkerNotFound(worker_id))?;
        if worker.revision != expected_revision {
            return Err(StoreError::RevisionConflict {
                worker_id,
                expected: expected_revision,
                actual: worker.revision,
            });
        }

        worker.account_status = status;
        worker.revision += 1;
        worker.updated_at = Utc::now();
        Ok(worker.clone())
    }

    async fn submissions_for_worker(
        &self,
        worker_id: WorkerId,
    ) -> Result<Vec<DailySubmission>, StoreError> {
        let inner = self.read_inner()?;
        let mut submissions: Vec<DailySubmission> = inner
            .submissions
            .values()
            .filter(|s| s.worker_id == worker_id)
            .cloned()
            .collect();
        submissions.sort_by_key(|s| (s.date, s.created_at));
        Ok(submissions)
    }

    async fn create_submission(
        &self,
        submission: DailySubmission,
    ) -> Result<DailySubmission, StoreError> {
        let mut inner = self.write_inner()?;
        if !inner.workers.contains_key(&submission.worker_id) {
            return Err(StoreError::WorkerNotFound(submission.worker_id));
        }

        let day_key = (submission.worker_id, submission.date);
        if inner.submission_days.contains_key(&day_key) {
            return Err(StoreError::DuplicateSubmission {
                worker_id: submission.worker_id,
                date: submission.date,
            });
        }

        inner.submission_days.insert(day_key, submission.id);
        inner.submissions.insert(submission.id, submission.clone());
        Ok(submission)
    }

    async fn get_payment(&self, payment_id: PaymentId) -> Result<Option<Payment>, StoreError> {
        Ok(self.read_inner()?.payments.get(&payment_id).cloned())
    }

    async fn list_payments(&self, filter: PaymentFilter) -> Result<Vec<Payment>, StoreError> {
        let inner = self.read_inner()?;
        let mut payments: Vec<Payment> = inner
            .payments
            .values()
            .filter(|p| filter.matches(p))
            .cloned()
            .collect();
        payments.sort_by_key(|p| (p.created_at, p.id.into_inner()));
        Ok(payments)
    }

    async fn create_withdrawal(
        &self,
        worker_id: WorkerId,
        expected_revision: u64,
        balance_after: Decimal,
        payment: Payment,
    ) -> Result<(Worker, Payment), StoreError> {
        let mut inner = self.write_inner()?;
        let worker = inner
            .workers
            .get_mut(&worker_id)
            .ok_or(StoreError::WorkerNotFound(worker_id))?;
        if worker.revision != expected_revision {
            return Err(StoreError::RevisionConflict {
                worker_id,
                expected: expected_revision,
                actual: worker.revision,
            });
        }

        worker.balance = balance_after;
        worker.revision += 1;
        worker.updated_at = Utc::now();
        let worker = worker.clone();

        inner.payments.insert(payment.id, payment.clone());
        Ok((worker, payment))
    }

    async fn settle_payment(
        &self,
        payment_id: PaymentId,
        settlement: Settlement,
    ) -> Result<(Payment, Option<Worker>), StoreError> {
        let mut inner = self.write_inner()?;

        let payment = inner
            .payments
            .get(&payment_id)
            .ok_or(StoreError::PaymentNotFound(payment_id))?;
        if payment.status != PaymentStatus::Pending {
            return Err(StoreError::StatusConflict {
                payment_id,
                actual: payment.status,
            });
        }
        let worker_id = payment.worker_id;
        if matches!(settlement, Settlement::FailAndRefund { .. })
            && !inner.workers.contains_key(&worker_id)
        {
            return Err(StoreError::WorkerNotFound(worker_id));
        }

        // All checks passed; the lock is still held, so the lookups below
        // cannot miss.
        match settlement {
            Settlement::Complete { completed_at } => {
                let payment = inner
                    .payments
                    .get_mut(&payment_id)
                    .ok_or(StoreError::PaymentNotFound(payment_id))?;
                payment.status = PaymentStatus::Completed;
                payment.completed_at = Some(completed_at);
                Ok((payment.clone(), None))
            }
            Settlement::FailAndRefund { amount } => {
                let payment = inner
                    .payments
                    .get_mut(&payment_id)
                    .ok_or(StoreError::PaymentNotFound(payment_id))?;
                payment.status = PaymentStatus::Failed;
                let payment = payment.clone();

                let worker = inner
                    .workers
                    .get_mut(&worker_id)
                    .ok_or(StoreError::WorkerNotFound(worker_id))?;
                worker.balance += amount;
                worker.revision += 1;
                worker.updated_at = Utc::now();
                Ok((payment, Some(worker.clone())))
            }
        }
    }
}
