//! Worker model and admin list view-models.
//!
//! The worker record carries identity and profile fields shown in admin
//! listings plus the three fields business rules read: `account_status`,
//! `balance`, and `skills`. The `revision` field is the optimistic
//! concurrency token the storage layer checks on every conditional write.

use chrono::{DateTime, Utc};
use crewline_shared::WorkerId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::account::AccountStatus;

/// Platform role of an account record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkerRole {
    /// A gig worker filing submissions and withdrawals.
    Worker,
    /// A reviewing admin. Admin rows never appear in worker listings.
    Admin,
}

/// A worker account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Unique worker ID.
    pub id: WorkerId,
    /// Display name.
    pub full_name: String,
    /// Contact email.
    pub email: String,
    /// Contact phone, if provided.
    pub phone: Option<String>,
    /// Free-form experience summary, if provided.
    pub experience: Option<String>,
    /// IANA timezone name, if provided.
    pub timezone: Option<String>,
    /// Screening score, if assessed.
    pub knowledge_score: Option<Decimal>,
    /// Worker or admin.
    pub role: WorkerRole,
    /// Lifecycle status; governs submission and withdrawal authorization.
    pub account_status: AccountStatus,
    /// Earned balance available for withdrawal. Never negative.
    pub balance: Decimal,
    /// Skill tags; drive development-worker classification.
    pub skills: Vec<String>,
    /// Optimistic concurrency token, bumped on every persisted write.
    pub revision: u64,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last written.
    pub updated_at: DateTime<Utc>,
}

impl Worker {
    /// Creates a new pending worker with an empty balance.
    #[must_use]
    pub fn new(full_name: impl Into<String>, email: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: WorkerId::new(),
            full_name: full_name.into(),
            email: email.into(),
            phone: None,
            experience: None,
            timezone: None,
            knowledge_score: None,
            role: WorkerRole::Worker,
            account_status: AccountStatus::Pending,
            balance: Decimal::ZERO,
            skills: Vec::new(),
            revision: 1,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Status filter for the admin worker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Every worker regardless of status.
    All,
    /// Active workers only.
    Active,
    /// Workers awaiting approval.
    Pending,
    /// Suspended workers.
    Suspended,
}

impl StatusFilter {
    /// Returns true if a worker with the given status passes this filter.
    #[must_use]
    pub fn matches(&self, status: AccountStatus) -> bool {
        match self {
            Self::All => true,
            Self::Active => status == AccountStatus::Active,
            Self::Pending => status == AccountStatus::Pending,
            Self::Suspended => status == AccountStatus::Suspended,
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::All => "all",
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
        };
        write!(f, "{s}")
    }
}

/// Per-status worker counts for the admin filter chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    /// All workers (any status, including terminated).
    pub all: usize,
    /// Active workers.
    pub active: usize,
    /// Pending workers.
    pub pending: usize,
    /// Suspended workers.
    pub suspended: usize,
}

/// Admin worker list: the filtered rows plus chip counts.
///
/// Admin rows are excluded before both the counts and the filter, so a
/// terminated worker is reachable through `All` but has no chip of its own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerListView {
    /// Workers matching the requested filter.
    pub workers: Vec<Worker>,
    /// Counts across all (non-admin) workers, regardless of filter.
    pub counts: StatusCounts,
}

impl WorkerListView {
    /// Builds the list view from every stored account record.
    #[must_use]
    pub fn build(records: Vec<Worker>, filter: StatusFilter) -> Self {
        let workers: Vec<Worker> = records
            .into_iter()
            .filter(|r| r.role == WorkerRole::Worker)
            .collect();

        let mut counts = StatusCounts {
            all: workers.len(),
            ..StatusCounts::default()
        };
        for worker in &workers {
            match worker.account_status {
                AccountStatus::Active => counts.active += 1,
                AccountStatus::Pending => counts.pending += 1,
                AccountStatus::Suspended => counts.suspended += 1,
                AccountStatus::Terminated => {}
            }
        }

        let workers = workers
            .into_iter()
            .filter(|w| filter.matches(w.account_status))
            .collect();

        Self { workers, counts }
    }
}
