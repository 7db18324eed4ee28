//! Eligibility and validation rules for daily submissions.
//!
//! Pure computation over data the caller fetched: the worker record, their
//! existing submissions, and the draft. "Today" and "now" come in as
//! arguments so the date source stays injectable; callers must compute
//! both once per evaluation, with today truncated to a UTC calendar date.

use chrono::{DateTime, NaiveDate, Utc};
use crewline_shared::SubmissionId;
use rust_decimal::Decimal;

use crate::submission::error::ValidationError;
use crate::submission::policy::DevelopmentSkillPolicy;
use crate::submission::types::{DailySubmission, SubmissionDraft};
use crate::worker::Worker;

/// Validates daily submission drafts against the one-per-day rule and the
/// development-worker commit-link requirement.
#[derive(Debug, Clone, Default)]
pub struct SubmissionEligibility {
    policy: DevelopmentSkillPolicy,
}

impl SubmissionEligibility {
    /// Creates an eligibility checker with the given classification policy.
    #[must_use]
    pub fn new(policy: DevelopmentSkillPolicy) -> Self {
        Self { policy }
    }

    /// Returns true if the worker has not yet submitted for `today`.
    #[must_use]
    pub fn can_submit_today(submissions: &[DailySubmission], today: NaiveDate) -> bool {
        !submissions.iter().any(|s| s.date == today)
    }

    /// Validates a draft and, on success, returns the persistable record.
    ///
    /// Checks run in order:
    /// 1. one submission per day (re-checked here even if the caller asked
    ///    `can_submit_today` earlier);
    /// 2. commit link present for development workers, regardless of the
    ///    other draft fields;
    /// 3. description non-empty and hours within 0.5 - 24.
    ///
    /// The returned record carries a fresh id, `admin_reviewed = false`,
    /// `date = today`, and `created_at = now`.
    ///
    /// # Errors
    ///
    /// Returns the first failing `ValidationError` in the order above.
    pub fn validate(
        &self,
        worker: &Worker,
        draft: SubmissionDraft,
        submissions: &[DailySubmission],
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<DailySubmission, ValidationError> {
        if !Self::can_submit_today(submissions, today) {
            return Err(ValidationError::AlreadySubmitted);
        }

        let github_commit_url = normalize_link(draft.github_commit_url);
        if self.policy.is_development_worker(&worker.skills) && github_commit_url.is_none() {
            return Err(ValidationError::MissingCommitLink);
        }

        if draft.description.trim().is_empty() || !hours_within_day(draft.hours_worked) {
            return Err(ValidationError::IncompleteWork);
        }

        Ok(DailySubmission {
            id: SubmissionId::new(),
            worker_id: worker.id,
            date: today,
            work_type: draft.work_type,
            description: draft.description,
            hours_worked: draft.hours_worked,
            github_commit_url,
            video_url: normalize_link(draft.video_url),
            admin_reviewed: false,
            created_at: now,
        })
    }
}

/// Treats empty and whitespace-only links as absent.
fn normalize_link(link: Option<String>) -> Option<String> {
    link.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

fn hours_within_day(hours: Decimal) -> bool {
    hours >= Decimal::new(5, 1) && hours <= Decimal::from(24)
}
