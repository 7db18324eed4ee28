//! Storage layer for worker accounts, submissions, and payments.
//!
//! This crate provides:
//! - The `Store` trait with conditional write operations
//! - `StoreError` for persistence failures and write conflicts
//! - `MemoryStore`, the in-process implementation backing tests and demos
//!
//! Conditional writes are the concurrency contract: worker updates compare
//! a revision counter, submissions enforce a unique (worker, date) key, and
//! payment settlement only applies while the payment is still pending. A
//! failed condition leaves the stored entity unchanged and surfaces as a
//! `StoreError` for the caller to handle.

pub mod error;
pub mod memory;
pub mod store;

pub use error::StoreError;
pub use memory::MemoryStore;
pub use store::{PaymentFilter, Store};
