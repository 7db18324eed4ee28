//! Orchestration services for the Crewline worker platform.
//!
//! This crate wires the pure business rules from `crewline-core` to the
//! storage layer behind the `Store` trait: each operation fetches current
//! state, asks the rules for a decision, and persists the outcome through
//! a conditional write. Nothing here re-implements a rule, and failures
//! from the rules and the store surface to callers unchanged.
//!
//! # Services
//!
//! - [`SubmissionService`] - Workers file daily work reports
//! - [`WithdrawalService`] - Workers request balance withdrawals
//! - [`ReviewCoordinator`] - Admins decide accounts and withdrawals

pub mod clock;
pub mod context;
pub mod error;
pub mod review;
pub mod submission;
pub mod withdrawal;

pub use clock::{Clock, SystemClock};
pub use context::AdminContext;
pub use error::{ReviewError, SubmitError, WithdrawError};
pub use review::{PendingWithdrawal, ReviewCoordinator};
pub use submission::SubmissionService;
pub use withdrawal::WithdrawalService;
