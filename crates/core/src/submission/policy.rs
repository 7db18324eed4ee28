//! Development-worker classification policy.

use crewline_shared::SubmissionConfig;
use std::collections::HashSet;

/// Skill set that classifies workers as development workers.
///
/// A worker holding any skill in the set (exact, case-sensitive match, the
/// same way skill tags are assigned) must attach a commit link to daily
/// submissions. The set comes from configuration; `Default` carries the
/// platform reference set.
#[derive(Debug, Clone)]
pub struct DevelopmentSkillPolicy {
    skills: HashSet<String>,
}

impl DevelopmentSkillPolicy {
    /// Creates a policy from an explicit skill set.
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            skills: skills.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if any of the worker's skills is a development skill.
    #[must_use]
    pub fn is_development_worker(&self, worker_skills: &[String]) -> bool {
        worker_skills.iter().any(|skill| self.skills.contains(skill))
    }
}

impl Default for DevelopmentSkillPolicy {
    fn default() -> Self {
        Self::new(SubmissionConfig::default().development_skills)
    }
}

impl From<&SubmissionConfig> for DevelopmentSkillPolicy {
    fn from(config: &SubmissionConfig) -> Self {
        Self::new(config.development_skills.iter().cloned())
    }
}
