//! Worker account lifecycle management.
//!
//! This module implements the account status state machine that admin
//! review decisions drive: pending accounts get approved, active accounts
//! can be suspended and reactivated, and any non-terminated account can be
//! terminated.
//!
//! # Modules
//!
//! - `types` - Account domain types (AccountStatus, ReviewAction, StatusChange)
//! - `error` - Lifecycle-specific error types
//! - `service` - State transition logic

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LifecycleError;
pub use service::AccountLifecycle;
pub use types::{AccountStatus, ReviewAction, StatusChange};
