//! Error types for storage operations.

use chrono::NaiveDate;
use crewline_core::ledger::PaymentStatus;
use crewline_shared::{PaymentId, WorkerId};

/// Error types for store operations.
///
/// Conflict variants report a failed write condition. The entity was left
/// unchanged; callers decide whether to re-fetch and retry.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// Worker does not exist.
    #[error("Worker not found: {0}")]
    WorkerNotFound(WorkerId),

    /// Payment does not exist.
    #[error("Payment not found: {0}")]
    PaymentNotFound(PaymentId),

    /// A submission already exists for this worker and date.
    #[error("Submission already exists for worker {worker_id} on {date}")]
    DuplicateSubmission {
        /// Worker that already submitted.
        worker_id: WorkerId,
        /// Calendar date of the existing submission.
        date: NaiveDate,
    },

    /// Worker revision did not match the expected value.
    #[error("Concurrent modification detected for worker {worker_id}, please retry")]
    RevisionConflict {
        /// Worker whose write was rejected.
        worker_id: WorkerId,
        /// Revision the caller read before writing.
        expected: u64,
        /// Revision currently stored.
        actual: u64,
    },

    /// Payment was already settled by an earlier decision.
    #[error("Payment {payment_id} is no longer pending (current status: {actual})")]
    StatusConflict {
        /// Payment whose settlement was rejected.
        payment_id: PaymentId,
        /// Status currently stored.
        actual: PaymentStatus,
    },

    /// Storage backend failure.
    #[error("Storage backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Returns a stable error code for API responses and logs.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::WorkerNotFound(_) => "WORKER_NOT_FOUND",
            Self::PaymentNotFound(_) => "PAYMENT_NOT_FOUND",
            Self::DuplicateSubmission { .. } => "DUPLICATE_SUBMISSION",
            Self::RevisionConflict { .. } => "REVISION_CONFLICT",
            Self::StatusConflict { .. } => "STATUS_CONFLICT",
            Self::Backend(_) => "STORAGE_BACKEND",
        }
    }

    /// Returns true when a re-fetch and retry can succeed.
    ///
    /// Only revision conflicts qualify: the losing writer read stale state,
    /// and rerunning against the current revision is a fresh attempt. The
    /// remaining variants report conditions a retry cannot change.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::RevisionConflict { .. })
    }
}
