//! Shared type definitions.

pub mod id;

pub use id::{AdminId, PaymentId, SubmissionId, WorkerId};
