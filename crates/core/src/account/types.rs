//! Account domain types for the worker lifecycle.
//!
//! This module defines the core types used for managing worker account
//! status transitions driven by admin review decisions.

use chrono::{DateTime, Utc};
use crewline_shared::AdminId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Worker account status in the review lifecycle.
///
/// Accounts progress through these states under admin actions.
/// The valid transitions are:
/// - Pending → Active (approve)
/// - Active → Suspended (suspend)
/// - Suspended → Active (reactivate)
/// - Pending | Active | Suspended → Terminated (terminate)
///
/// `Terminated` is terminal: no action moves an account out of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    /// Account is awaiting admin approval.
    Pending,
    /// Account is approved and in good standing.
    Active,
    /// Account has been suspended and can be reactivated.
    Suspended,
    /// Account has been terminated (immutable).
    Terminated,
}

impl AccountStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Active => "active",
            Self::Suspended => "suspended",
            Self::Terminated => "terminated",
        }
    }

    /// Parses a status from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pending" => Some(Self::Pending),
            "active" => Some(Self::Active),
            "suspended" => Some(Self::Suspended),
            "terminated" => Some(Self::Terminated),
            _ => None,
        }
    }

    /// Returns true if no further transitions are possible.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }

    /// Returns true if the worker may file daily submissions.
    #[must_use]
    pub fn can_submit_work(&self) -> bool {
        matches!(self, Self::Active)
    }

    /// Returns true if the worker may request balance withdrawals.
    #[must_use]
    pub fn can_request_withdrawal(&self) -> bool {
        matches!(self, Self::Active)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Admin review action on a worker account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewAction {
    /// Approve a pending account.
    Approve,
    /// Suspend an active account.
    Suspend,
    /// Reactivate a suspended account.
    Reactivate,
    /// Terminate an account permanently.
    Terminate,
}

impl ReviewAction {
    /// Returns the status this action moves an account into.
    #[must_use]
    pub fn target_status(&self) -> AccountStatus {
        match self {
            Self::Approve | Self::Reactivate => AccountStatus::Active,
            Self::Suspend => AccountStatus::Suspended,
            Self::Terminate => AccountStatus::Terminated,
        }
    }

    /// Returns the string representation of the action.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approve => "approve",
            Self::Suspend => "suspend",
            Self::Reactivate => "reactivate",
            Self::Terminate => "terminate",
        }
    }
}

impl fmt::Display for ReviewAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Result of a validated lifecycle transition, with audit data.
///
/// Carries the status to persist plus who decided and when. The account
/// status is the only worker field a lifecycle decision writes; balance
/// is never touched here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusChange {
    /// The action that was applied.
    pub action: ReviewAction,
    /// The new status after the transition.
    pub new_status: AccountStatus,
    /// The admin who made the decision.
    pub decided_by: AdminId,
    /// When the decision was made.
    pub decided_at: DateTime<Utc>,
}
