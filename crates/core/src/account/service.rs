//! Account lifecycle service for worker status transitions.
//!
//! This module implements the state machine logic for moving worker
//! accounts through the admin review lifecycle. It validates transitions
//! only; persisting the resulting status is the orchestration layer's job,
//! and balance is never part of a lifecycle decision.

use chrono::Utc;
use crewline_shared::AdminId;

use crate::account::error::LifecycleError;
use crate::account::types::{AccountStatus, ReviewAction, StatusChange};

/// Stateless service for validating worker account transitions.
///
/// All methods are associated functions that validate a requested action
/// against the current status and return the `StatusChange` to persist,
/// with audit trail information.
pub struct AccountLifecycle;

impl AccountLifecycle {
    /// Approve a pending worker account.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the account
    /// * `decided_by` - The admin making the decision
    ///
    /// # Returns
    /// * `Ok(StatusChange)` moving the account to `Active`
    /// * `Err(LifecycleError::InvalidTransition)` if not in `Pending` status
    pub fn approve(
        current_status: AccountStatus,
        decided_by: AdminId,
    ) -> Result<StatusChange, LifecycleError> {
        match current_status {
            AccountStatus::Pending => Ok(Self::change(ReviewAction::Approve, decided_by)),
            _ => Err(LifecycleError::InvalidTransition {
                from: current_status,
                action: ReviewAction::Approve,
            }),
        }
    }

    /// Suspend an active worker account.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the account
    /// * `decided_by` - The admin making the decision
    ///
    /// # Returns
    /// * `Ok(StatusChange)` moving the account to `Suspended`
    /// * `Err(LifecycleError::InvalidTransition)` if not in `Active` status
    pub fn suspend(
        current_status: AccountStatus,
        decided_by: AdminId,
    ) -> Result<StatusChange, LifecycleError> {
        match current_status {
            AccountStatus::Active => Ok(Self::change(ReviewAction::Suspend, decided_by)),
            _ => Err(LifecycleError::InvalidTransition {
                from: current_status,
                action: ReviewAction::Suspend,
            }),
        }
    }

    /// Reactivate a suspended worker account.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the account
    /// * `decided_by` - The admin making the decision
    ///
    /// # Returns
    /// * `Ok(StatusChange)` moving the account back to `Active`
    /// * `Err(LifecycleError::InvalidTransition)` if not in `Suspended` status
    pub fn reactivate(
        current_status: AccountStatus,
        decided_by: AdminId,
    ) -> Result<StatusChange, LifecycleError> {
        match current_status {
            AccountStatus::Suspended => Ok(Self::change(ReviewAction::Reactivate, decided_by)),
            _ => Err(LifecycleError::InvalidTransition {
                from: current_status,
                action: ReviewAction::Reactivate,
            }),
        }
    }

    /// Terminate a worker account permanently.
    ///
    /// Any non-terminated account can be terminated; a terminated account
    /// cannot.
    ///
    /// # Arguments
    /// * `current_status` - The current status of the account
    /// * `decided_by` - The admin making the decision
    ///
    /// # Returns
    /// * `Ok(StatusChange)` moving the account to `Terminated`
    /// * `Err(LifecycleError::InvalidTransition)` if already terminated
    pub fn terminate(
        current_status: AccountStatus,
        decided_by: AdminId,
    ) -> Result<StatusChange, LifecycleError> {
        match current_status {
            AccountStatus::Pending | AccountStatus::Active | AccountStatus::Suspended => {
                Ok(Self::change(ReviewAction::Terminate, decided_by))
            }
            AccountStatus::Terminated => Err(LifecycleError::InvalidTransition {
                from: current_status,
                action: ReviewAction::Terminate,
            }),
        }
    }

    /// Apply an arbitrary review action to the current status.
    ///
    /// Dispatches to the named entry points above.
    pub fn transition(
        current_status: AccountStatus,
        action: ReviewAction,
        decided_by: AdminId,
    ) -> Result<StatusChange, LifecycleError> {
        match action {
            ReviewAction::Approve => Self::approve(current_status, decided_by),
            ReviewAction::Suspend => Self::suspend(current_status, decided_by),
            ReviewAction::Reactivate => Self::reactivate(current_status, decided_by),
            ReviewAction::Terminate => Self::terminate(current_status, decided_by),
        }
    }

    /// Check if a status transition is valid.
    ///
    /// Valid transitions:
    /// - Pending → Active (approve)
    /// - Active → Suspended (suspend)
    /// - Suspended → Active (reactivate)
    /// - Pending | Active | Suspended → Terminated (terminate)
    ///
    /// # Arguments
    /// * `from` - The current status
    /// * `to` - The target status
    ///
    /// # Returns
    /// `true` if the transition is valid, `false` otherwise
    #[must_use]
    pub fn is_valid_transition(from: AccountStatus, to: AccountStatus) -> bool {
        matches!(
            (from, to),
            (AccountStatus::Pending, AccountStatus::Active)
                | (AccountStatus::Active, AccountStatus::Suspended)
                | (AccountStatus::Suspended, AccountStatus::Active)
                | (
                    AccountStatus::Pending | AccountStatus::Active | AccountStatus::Suspended,
                    AccountStatus::Terminated
                )
        )
    }

    fn change(action: ReviewAction, decided_by: AdminId) -> StatusChange {
        StatusChange {
            action,
            new_status: action.target_status(),
            decided_by,
            decided_at: Utc::now(),
        }
    }
}
