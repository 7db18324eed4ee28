//! Daily submission filing.

use std::sync::Arc;

use tracing::{error, info};

use crewline_core::submission::{
    DailySubmission, SubmissionDraft, SubmissionEligibility, ValidationError,
};
use crewline_shared::WorkerId;
use crewline_store::{Store, StoreError};

use crate::clock::Clock;
use crate::error::SubmitError;

/// Files daily work reports for workers.
///
/// The eligibility rules run against the worker record and their existing
/// submissions; the store's `(worker, date)` key backs the one-per-day
/// rule against concurrent filings.
pub struct SubmissionService {
    eligibility: SubmissionEligibility,
    store: Arc<dyn Store>,
    clock: Arc<dyn Clock>,
}

impl SubmissionService {
    /// Creates the service.
    #[must_use]
    pub fn new(
        eligibility: SubmissionEligibility,
        store: Arc<dyn Store>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            eligibility,
            store,
            clock,
        }
    }

    /// Returns true if the worker has not yet filed a report for today.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage layer fails.
    pub async fn can_submit_today(&self, worker_id: WorkerId) -> Result<bool, SubmitError> {
        let submissions = self.store.submissions_for_worker(worker_id).await?;
        Ok(SubmissionEligibility::can_submit_today(
            &submissions,
            self.clock.today(),
        ))
    }

    /// Validates and files a daily report for the worker.
    ///
    /// The worker must exist and hold an active account. Validation
    /// failures surface as [`ValidationError`]; when a concurrent filing
    /// wins the `(worker, date)` key between validation and the write, the
    /// loser also sees `AlreadySubmitted`.
    ///
    /// # Errors
    ///
    /// Returns an error if the worker is missing or not active, the draft
    /// fails validation, or the storage layer fails.
    pub async fn submit(
        &self,
        worker_id: WorkerId,
        draft: SubmissionDraft,
    ) -> Result<DailySubmission, SubmitError> {
        let worker = self
            .store
            .get_worker(worker_id)
            .await?
            .ok_or(SubmitError::WorkerNotFound(worker_id))?;

        if !worker.account_status.can_submit_work() {
            return Err(SubmitError::NotAuthorized {
                status: worker.account_status,
            });
        }

        let submissions = self.store.submissions_for_worker(worker_id).await?;
        let now = self.clock.now();
        let record = self
            .eligibility
            .validate(&worker, draft, &submissions, now.date_naive(), now)?;

        match self.store.create_submission(record).await {
            Ok(submission) => {
                info!(
                    worker_id = %worker_id,
                    submission_id = %submission.id,
                    date = %submission.date,
                    "Daily submission filed"
                );
                Ok(submission)
            }
            Err(StoreError::DuplicateSubmission { .. }) => {
                Err(ValidationError::AlreadySubmitted.into())
            }
            Err(e) => {
                error!(error = %e, worker_id = %worker_id, "Failed to persist submission");
                Err(e.into())
            }
        }
    }
}
