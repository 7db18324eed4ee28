//! Property-based tests for SubmissionEligibility.
//!
//! These tests validate the ordering of validation checks and the shape of
//! the record produced on success.

use chrono::{Days, NaiveDate, Utc};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crewline_shared::SubmissionId;

use crate::submission::error::ValidationError;
use crate::submission::service::SubmissionEligibility;
use crate::submission::types::{DailySubmission, SubmissionDraft, WorkType};
use crate::worker::Worker;

/// Strategy for generating random work type values.
fn arb_work_type() -> impl Strategy<Value = WorkType> {
    prop_oneof![
        Just(WorkType::Development),
        Just(WorkType::Design),
        Just(WorkType::VideoEditing),
        Just(WorkType::Content),
        Just(WorkType::Other),
    ]
}

/// Strategy for skill lists containing one development skill.
fn arb_dev_skills() -> impl Strategy<Value = Vec<String>> {
    prop::sample::select(vec![
        "React", "Node.js", "Python", "Java", "PHP", "Angular", "Vue.js",
    ])
    .prop_map(|skill| vec![skill.to_string(), "Git".to_string()])
}

/// Strategy for skill lists with no development skill.
fn arb_non_dev_skills() -> impl Strategy<Value = Vec<String>> {
    prop::sample::select(vec![
        "Content Writing",
        "Graphic Design",
        "Video Editing",
        "SEO",
    ])
    .prop_map(|skill| vec![skill.to_string()])
}

/// Strategy for descriptions that survive trimming.
fn arb_valid_description() -> impl Strategy<Value = String> {
    "[a-z]{3,24}"
}

/// Strategy for hours inside the accepted 0.5 - 24 range.
fn arb_valid_hours() -> impl Strategy<Value = Decimal> {
    (5i64..=240i64).prop_map(|n| Decimal::new(n, 1))
}

/// Strategy for hours anywhere around the accepted range.
fn arb_any_hours() -> impl Strategy<Value = Decimal> {
    (-100i64..=300i64).prop_map(|n| Decimal::new(n, 1))
}

/// Strategy for commit links that normalize to absent.
fn arb_blank_link() -> impl Strategy<Value = Option<String>> {
    prop_oneof![Just(None), Just(Some(String::new())), " {1,4}".prop_map(Some)]
}

/// Strategy for calendar dates within a one-year window.
fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0u64..365u64).prop_map(|n| {
        NaiveDate::from_ymd_opt(2026, 1, 1)
            .unwrap()
            .checked_add_days(Days::new(n))
            .unwrap()
    })
}

fn worker_with_skills(skills: Vec<String>) -> Worker {
    let mut worker = Worker::new("Prop Worker", "prop@example.com");
    worker.skills = skills;
    worker
}

fn submission_on(worker: &Worker, date: NaiveDate) -> DailySubmission {
    DailySubmission {
        id: SubmissionId::new(),
        worker_id: worker.id,
        date,
        work_type: WorkType::Other,
        description: "earlier entry".to_string(),
        hours_worked: Decimal::ONE,
        github_commit_url: None,
        video_url: None,
        admin_reviewed: false,
        created_at: Utc::now(),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Property: development workers need a commit link
    // =========================================================================

    /// A development worker without a usable commit link is rejected no
    /// matter what the rest of the draft looks like
    #[test]
    fn prop_dev_worker_requires_commit_link(
        skills in arb_dev_skills(),
        work_type in arb_work_type(),
        description in ".{0,24}",
        hours in arb_any_hours(),
        link in arb_blank_link(),
        today in arb_date()
    ) {
        let checker = SubmissionEligibility::default();
        let worker = worker_with_skills(skills);
        let draft = SubmissionDraft {
            work_type,
            description,
            hours_worked: hours,
            github_commit_url: link,
            video_url: None,
        };

        let result = checker.validate(&worker, draft, &[], today, Utc::now());
        prop_assert_eq!(result.unwrap_err(), ValidationError::MissingCommitLink);
    }

    /// The identical draft passes once the worker has no development skill
    #[test]
    fn prop_non_dev_worker_passes_without_commit_link(
        skills in arb_non_dev_skills(),
        work_type in arb_work_type(),
        description in arb_valid_description(),
        hours in arb_valid_hours(),
        link in arb_blank_link(),
        today in arb_date()
    ) {
        let checker = SubmissionEligibility::default();
        let worker = worker_with_skills(skills);
        let draft = SubmissionDraft {
            work_type,
            description,
            hours_worked: hours,
            github_commit_url: link,
            video_url: None,
        };

        let result = checker.validate(&worker, draft, &[], today, Utc::now());
        prop_assert!(result.is_ok(), "expected Ok, got {:?}", result);
    }

    // =========================================================================
    // Property: the one-per-day rule is checked before anything else
    // =========================================================================

    /// An existing record for today rejects any draft, even one that would
    /// also fail the later checks
    #[test]
    fn prop_duplicate_day_checked_first(
        skills in prop_oneof![arb_dev_skills(), arb_non_dev_skills()],
        work_type in arb_work_type(),
        description in ".{0,24}",
        hours in arb_any_hours(),
        today in arb_date()
    ) {
        let checker = SubmissionEligibility::default();
        let worker = worker_with_skills(skills);
        let history = vec![submission_on(&worker, today)];
        let draft = SubmissionDraft {
            work_type,
            description,
            hours_worked: hours,
            github_commit_url: None,
            video_url: None,
        };

        let result = checker.validate(&worker, draft, &history, today, Utc::now());
        prop_assert_eq!(result.unwrap_err(), ValidationError::AlreadySubmitted);
    }

    /// Records on other dates never block today's submission
    #[test]
    fn prop_other_days_do_not_block(
        description in arb_valid_description(),
        hours in arb_valid_hours(),
        today in arb_date(),
        offset in 1u64..30u64
    ) {
        let checker = SubmissionEligibility::default();
        let worker = worker_with_skills(vec!["Content Writing".to_string()]);
        let other_day = today.checked_sub_days(Days::new(offset)).unwrap();
        let history = vec![submission_on(&worker, other_day)];
        let draft = SubmissionDraft {
            work_type: WorkType::Content,
            description,
            hours_worked: hours,
            github_commit_url: None,
            video_url: None,
        };

        prop_assert!(SubmissionEligibility::can_submit_today(&history, today));
        let result = checker.validate(&worker, draft, &history, today, Utc::now());
        prop_assert!(result.is_ok(), "expected Ok, got {:?}", result);
    }

    // =========================================================================
    // Property: hours gate
    // =========================================================================

    /// With everything else valid, acceptance depends only on the hours range
    #[test]
    fn prop_hours_range_gates_acceptance(
        description in arb_valid_description(),
        hours in arb_any_hours(),
        today in arb_date()
    ) {
        let checker = SubmissionEligibility::default();
        let worker = worker_with_skills(vec!["SEO".to_string()]);
        let draft = SubmissionDraft {
            work_type: WorkType::Other,
            description,
            hours_worked: hours,
            github_commit_url: None,
            video_url: None,
        };

        let result = checker.validate(&worker, draft, &[], today, Utc::now());
        let in_range = hours >= Decimal::new(5, 1) && hours <= Decimal::from(24);
        if in_range {
            prop_assert!(result.is_ok(), "expected Ok for {} hours, got {:?}", hours, result);
        } else {
            prop_assert_eq!(result.unwrap_err(), ValidationError::IncompleteWork);
        }
    }

    // =========================================================================
    // Property: successful validation populates the record
    // =========================================================================

    /// The produced record carries the draft fields plus server-assigned
    /// identity, date, and review state
    #[test]
    fn prop_success_populates_record(
        skills in arb_dev_skills(),
        work_type in arb_work_type(),
        description in arb_valid_description(),
        hours in arb_valid_hours(),
        today in arb_date(),
        padding in " {0,3}"
    ) {
        let checker = SubmissionEligibility::default();
        let worker = worker_with_skills(skills);
        let now = Utc::now();
        let commit_url = "https://github.com/acme/app/commit/abc123";
        let draft = SubmissionDraft {
            work_type,
            description: description.clone(),
            hours_worked: hours,
            github_commit_url: Some(format!("{padding}{commit_url}{padding}")),
            video_url: None,
        };

        let record = checker.validate(&worker, draft, &[], today, now).unwrap();
        prop_assert_eq!(record.worker_id, worker.id);
        prop_assert_eq!(record.date, today);
        prop_assert_eq!(record.created_at, now);
        prop_assert!(!record.admin_reviewed);
        prop_assert_eq!(record.work_type, work_type);
        prop_assert_eq!(record.description, description);
        prop_assert_eq!(record.hours_worked, hours);
        prop_assert_eq!(record.github_commit_url.as_deref(), Some(commit_url));
        prop_assert_eq!(record.video_url, None);
    }
}
