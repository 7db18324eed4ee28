//! Core business logic for Crewline.
//!
//! This crate contains pure business rules with ZERO web or database
//! dependencies. All domain types, validation rules, and state machines
//! live here; orchestration and persistence live in `crewline-store` and
//! `crewline-service`.
//!
//! # Modules
//!
//! - `submission` - Daily work report eligibility and validation
//! - `account` - Worker account lifecycle state machine
//! - `ledger` - Withdrawal ledger rules (reserve, settle, refund)
//! - `worker` - Worker model and admin list view-models

pub mod account;
pub mod ledger;
pub mod submission;
pub mod worker;
