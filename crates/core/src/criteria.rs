//! Search criteria supplied by the job seeker.
//!
//! [`SearchCriteria`] is an immutable value: every run receives its own copy.
//! Callers that want to change some fields build a [`CriteriaUpdate`] and
//! call [`SearchCriteria::merged`], which returns a fresh value and leaves the
//! original untouched.

use serde::{Deserialize, Serialize};

/// Fields a caller must supply for a meaningful search.
pub const REQUIRED_FIELDS: [&str; 4] = ["job_title", "location", "experience_level", "skills"];

/// Fields that refine the search and default to empty text.
pub const OPTIONAL_FIELDS: [&str; 4] = [
    "career_goals",
    "preferred_industry",
    "salary_range",
    "user_preferences",
];

/// What the job seeker is looking for.
///
/// All fields are plain text. Nothing is validated beyond presence: an empty
/// required field simply flows into the prompts as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub job_title: String,
    pub location: String,
    pub experience_level: String,
    pub skills: String,

    #[serde(default)]
    pub career_goals: String,
    #[serde(default)]
    pub preferred_industry: String,
    #[serde(default)]
    pub salary_range: String,
    #[serde(default)]
    pub user_preferences: String,
}

impl SearchCriteria {
    /// Criteria with the four required fields set and every optional field empty.
    pub fn new(
        job_title: impl Into<String>,
        location: impl Into<String>,
        experience_level: impl Into<String>,
        skills: impl Into<String>,
    ) -> Self {
        Self {
            job_title: job_title.into(),
            location: location.into(),
            experience_level: experience_level.into(),
            skills: skills.into(),
            ..Self::default()
        }
    }

    pub fn with_career_goals(mut self, value: impl Into<String>) -> Self {
        self.career_goals = value.into();
        self
    }

    pub fn with_preferred_industry(mut self, value: impl Into<String>) -> Self {
        self.preferred_industry = value.into();
        self
    }

    pub fn with_salary_range(mut self, value: impl Into<String>) -> Self {
        self.salary_range = value.into();
        self
    }

    pub fn with_user_preferences(mut self, value: impl Into<String>) -> Self {
        self.user_preferences = value.into();
        self
    }

    /// Return a new value with every field present in `update` replaced.
    ///
    /// Fields absent from the update keep their current values.
    pub fn merged(&self, update: &CriteriaUpdate) -> Self {
        fn pick(new: &Option<String>, old: &str) -> String {
            new.clone().unwrap_or_else(|| old.to_string())
        }

        Self {
            job_title: pick(&update.job_title, &self.job_title),
            location: pick(&update.location, &self.location),
            experience_level: pick(&update.experience_level, &self.experience_level),
            skills: pick(&update.skills, &self.skills),
            career_goals: pick(&update.career_goals, &self.career_goals),
            preferred_industry: pick(&update.preferred_industry, &self.preferred_industry),
            salary_range: pick(&update.salary_range, &self.salary_range),
            user_preferences: pick(&update.user_preferences, &self.user_preferences),
        }
    }
}

/// A strongly-typed partial update of [`SearchCriteria`].
///
/// Deserializes from a JSON object whose keys match the criteria field names.
/// Unknown keys are ignored; a known key with a non-string value is rejected
/// before anything is merged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CriteriaUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub career_goals: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_industry: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_preferences: Option<String>,
}

impl CriteriaUpdate {
    /// True when no field would change.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
