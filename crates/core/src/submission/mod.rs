//! Daily work submission eligibility and validation.
//!
//! Workers file one report per calendar day. Validation is pure: the
//! orchestration layer fetches the worker and their existing submissions,
//! and this module decides whether a draft becomes a persistable record.
//! Workers classified as development workers (by skill set) must attach a
//! commit link.
//!
//! # Modules
//!
//! - `types` - Submission domain types (WorkType, SubmissionDraft, DailySubmission)
//! - `policy` - Development-worker classification policy
//! - `error` - Validation error types
//! - `service` - Eligibility and validation rules

pub mod error;
pub mod policy;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use error::ValidationError;
pub use policy::DevelopmentSkillPolicy;
pub use service::SubmissionEligibility;
pub use types::{DailySubmission, SubmissionDraft, WorkType};
