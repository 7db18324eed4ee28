//! Lifecycle error types for worker account transitions.

use crate::account::types::{AccountStatus, ReviewAction};
use thiserror::Error;

/// Errors that can occur during account lifecycle transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifecycleError {
    /// The requested action is not permitted from the current status.
    #[error("Cannot {action} a {from} worker account")]
    InvalidTransition {
        /// The status the account is currently in.
        from: AccountStatus,
        /// The action that was attempted.
        action: ReviewAction,
    },
}

impl LifecycleError {
    /// Returns the error code for caller-facing responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
        }
    }
}
