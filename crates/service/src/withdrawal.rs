//! Worker withdrawal requests.

use std::sync::Arc;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::{error, info};

use crewline_core::ledger::{Payment, WithdrawalLedger};
use crewline_shared::WorkerId;
use crewline_store::Store;

use crate::error::WithdrawError;

/// Handles worker withdrawal requests against earned balance.
///
/// The amount is reserved at request time: the ledger rules compute the
/// debit from the worker state that was read, and the store applies the
/// balance change together with the pending payment in one conditional
/// write keyed on that revision.
pub struct WithdrawalService {
    store: Arc<dyn Store>,
}

impl WithdrawalService {
    /// Creates the service.
    #[must_use]
    pub fn new(store: Arc<dyn Store>) -> Self {
        Self { store }
    }

    /// Reserves `amount` from the worker's balance as a pending payment.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker is missing or not active, the
    /// ledger rules reject the amount, or the storage layer fails. A
    /// revision conflict from a concurrent balance write surfaces as a
    /// retryable [`crewline_store::StoreError`].
    pub async fn request(
        &self,
        worker_id: WorkerId,
        amount: Decimal,
    ) -> Result<Payment, WithdrawError> {
        let worker = self
            .store
            .get_worker(worker_id)
            .await?
            .ok_or(WithdrawError::WorkerNotFound(worker_id))?;

        if !worker.account_status.can_request_withdrawal() {
            return Err(WithdrawError::NotAuthorized {
                status: worker.account_status,
            });
        }

        let reservation = WithdrawalLedger::reserve(worker.balance, amount)?;
        let payment = Payment::withdrawal(worker.id, reservation.amount, Utc::now());

        match self
            .store
            .create_withdrawal(
                worker.id,
                worker.revision,
                reservation.balance_after,
                payment,
            )
            .await
        {
            Ok((debited, payment)) => {
                info!(
                    worker_id = %worker_id,
                    payment_id = %payment.id,
                    amount = %payment.amount,
                    balance = %debited.balance,
                    "Withdrawal reserved"
                );
                Ok(payment)
            }
            Err(e) => {
                error!(error = %e, worker_id = %worker_id, "Failed to persist withdrawal");
                Err(e.into())
            }
        }
    }
}
