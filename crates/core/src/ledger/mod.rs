//! Withdrawal ledger for worker balance payouts.
//!
//! This module implements the balance bookkeeping rules around worker
//! withdrawals. The model is reserve-at-request: the requested amount
//! leaves the worker's balance the moment the withdrawal is created, so an
//! admin approval settles the payment without touching balance, and a
//! rejection refunds the reserved amount.
//!
//! # Modules
//!
//! - `types` - Payment domain types (Payment, PaymentStatus, Settlement)
//! - `error` - Ledger-specific error types
//! - `service` - Reserve / settle / refund rules

pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::LedgerError;
pub use service::WithdrawalLedger;
pub use types::{Payment, PaymentStatus, PaymentType, Reservation, Settlement};
