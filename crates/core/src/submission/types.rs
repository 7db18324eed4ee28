//! Submission domain types for daily work reports.

use chrono::{DateTime, NaiveDate, Utc};
use crewline_shared::{SubmissionId, WorkerId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of work reported in a daily submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum WorkType {
    /// Software development work.
    Development,
    /// Design work.
    Design,
    /// Video editing work.
    VideoEditing,
    /// Content writing work.
    Content,
    /// Anything else.
    Other,
}

impl WorkType {
    /// Returns the string representation of the work type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Design => "design",
            Self::VideoEditing => "video-editing",
            Self::Content => "content",
            Self::Other => "other",
        }
    }

    /// Parses a work type from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "development" => Some(Self::Development),
            "design" => Some(Self::Design),
            "video-editing" => Some(Self::VideoEditing),
            "content" => Some(Self::Content),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for WorkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a worker fills in before validation.
///
/// Empty strings and whitespace-only links are treated as absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubmissionDraft {
    /// Category of the reported work.
    pub work_type: WorkType,
    /// What was done today.
    pub description: String,
    /// Hours spent, expected within 0.5 - 24.
    pub hours_worked: Decimal,
    /// Commit link; mandatory for development workers.
    pub github_commit_url: Option<String>,
    /// Optional video evidence link.
    pub video_url: Option<String>,
}

/// A validated, persistable daily work report.
///
/// Unique per `(worker_id, date)`; the storage layer enforces that key.
/// `admin_reviewed` starts false and is not written by any operation in
/// this core.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailySubmission {
    /// Unique submission ID.
    pub id: SubmissionId,
    /// The worker who filed the report.
    pub worker_id: WorkerId,
    /// The calendar date (UTC) the report covers.
    pub date: NaiveDate,
    /// Category of the reported work.
    pub work_type: WorkType,
    /// What was done.
    pub description: String,
    /// Hours spent.
    pub hours_worked: Decimal,
    /// Commit link, if attached.
    pub github_commit_url: Option<String>,
    /// Video evidence link, if attached.
    pub video_url: Option<String>,
    /// Whether an admin has reviewed this report.
    pub admin_reviewed: bool,
    /// When the report was filed.
    pub created_at: DateTime<Utc>,
}
