//! Shared types and configuration for the Crewline worker platform.
//!
//! This crate holds the pieces every other crate needs: typed entity IDs
//! and application configuration. It deliberately has no domain logic.

pub mod config;
pub mod types;

pub use config::{AppConfig, SubmissionConfig};
pub use types::{AdminId, PaymentId, SubmissionId, WorkerId};
