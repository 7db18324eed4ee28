//! Validation error types for daily submissions.

use thiserror::Error;

/// Errors that can fail a daily submission before it is persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A submission for today already exists.
    #[error("A submission for today already exists")]
    AlreadySubmitted,

    /// Development workers must attach a commit link.
    #[error("GitHub commit link is required for development workers")]
    MissingCommitLink,

    /// Description missing or hours outside the allowed range.
    #[error("Submission needs a description and hours between 0.5 and 24")]
    IncompleteWork,
}

impl ValidationError {
    /// Returns the error code for caller-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadySubmitted => "ALREADY_SUBMITTED",
            Self::MissingCommitLink => "MISSING_COMMIT_LINK",
            Self::IncompleteWork => "INCOMPLETE_WORK",
        }
    }
}
