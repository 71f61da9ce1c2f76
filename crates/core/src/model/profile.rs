use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const MAX_SUBJECT_CHARS: usize = 100;
const MAX_GOAL_CHARS: usize = 200;
const MAX_HOURS_PER_DAY: u32 = 24;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Validation failures for the setup form.
///
/// The display strings are shown to the user as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProfileError {
    #[error("Subject is required")]
    EmptySubject,

    #[error("Goal is required")]
    EmptyGoal,

    #[error("Level is required")]
    MissingLevel,

    #[error("Unknown level: {0}")]
    UnknownLevel(String),

    #[error("Valid study time is required")]
    InvalidTime,

    #[error("Subject must be at most 100 characters")]
    SubjectTooLong,

    #[error("Goal must be at most 200 characters")]
    GoalTooLong,
}

//
// ─── LEVEL ─────────────────────────────────────────────────────────────────────
//

/// Self-declared proficiency in the subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StudyLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl StudyLevel {
    pub const ALL: [StudyLevel; 3] = [Self::Beginner, Self::Intermediate, Self::Advanced];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for StudyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StudyLevel {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ProfileError::MissingLevel);
        }
        Self::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ProfileError::UnknownLevel(trimmed.to_string()))
    }
}

//
// ─── PROFILE ───────────────────────────────────────────────────────────────────
//

/// A validated study profile. Immutable once built; a new setup replaces it wholesale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    subject: String,
    goal: String,
    level: StudyLevel,
    time_per_day: u32,
}

impl Profile {
    /// Builds a profile from already-typed fields.
    ///
    /// # Errors
    ///
    /// Returns `ProfileError` if a text field is blank or too long, or the daily time is
    /// outside `1..=24` hours.
    pub fn new(
        subject: impl Into<String>,
        goal: impl Into<String>,
        level: StudyLevel,
        time_per_day: u32,
    ) -> Result<Self, ProfileError> {
        let subject = subject.into().trim().to_string();
        let goal = goal.into().trim().to_string();

        if subject.is_empty() {
            return Err(ProfileError::EmptySubject);
        }
        if goal.is_empty() {
            return Err(ProfileError::EmptyGoal);
        }
        if subject.chars().count() > MAX_SUBJECT_CHARS {
            return Err(ProfileError::SubjectTooLong);
        }
        if goal.chars().count() > MAX_GOAL_CHARS {
            return Err(ProfileError::GoalTooLong);
        }
        if time_per_day == 0 || time_per_day > MAX_HOURS_PER_DAY {
            return Err(ProfileError::InvalidTime);
        }

        Ok(Self {
            subject,
            goal,
            level,
            time_per_day,
        })
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn goal(&self) -> &str {
        &self.goal
    }

    #[must_use]
    pub fn level(&self) -> StudyLevel {
        self.level
    }

    /// Hours per day the learner can spend.
    #[must_use]
    pub fn time_per_day(&self) -> u32 {
        self.time_per_day
    }
}

/// Raw setup-form input, validated field by field in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileDraft {
    pub subject: String,
    pub goal: String,
    pub level: String,
    pub time_per_day: String,
}

impl ProfileDraft {
    /// # Errors
    ///
    /// Returns the first `ProfileError` in form order (subject, goal, level, time).
    pub fn validate(&self) -> Result<Profile, ProfileError> {
        if self.subject.trim().is_empty() {
            return Err(ProfileError::EmptySubject);
        }
        if self.goal.trim().is_empty() {
            return Err(ProfileError::EmptyGoal);
        }
        let level: StudyLevel = self.level.parse()?;
        let hours = self
            .time_per_day
            .trim()
            .parse::<u32>()
            .map_err(|_| ProfileError::InvalidTime)?;

        Profile::new(&self.subject, &self.goal, level, hours)
    }
}

impl From<&Profile> for ProfileDraft {
    fn from(profile: &Profile) -> Self {
        Self {
            subject: profile.subject.clone(),
            goal: profile.goal.clone(),
            level: profile.level.as_str().to_string(),
            time_per_day: profile.time_per_day.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(subject: &str, goal: &str, level: &str, time: &str) -> ProfileDraft {
        ProfileDraft {
            subject: subject.into(),
            goal: goal.into(),
            level: level.into(),
            time_per_day: time.into(),
        }
    }

    #[test]
    fn draft_from_profile_validates_back_to_it() {
        let profile = Profile::new("Chemistry", "Lab exam", StudyLevel::Advanced, 3).unwrap();
        let draft = ProfileDraft::from(&profile);
        assert_eq!(draft.level, "Advanced");
        assert_eq!(draft.validate(), Ok(profile));
    }

    #[test]
    fn valid_draft_trims_fields() {
        let profile = draft("  Physics ", "Exam", "beginner", " 2 ")
            .validate()
            .unwrap();
        assert_eq!(profile.subject(), "Physics");
        assert_eq!(profile.level(), StudyLevel::Beginner);
        assert_eq!(profile.time_per_day(), 2);
    }

    #[test]
    fn draft_errors_follow_form_order() {
        assert_eq!(
            draft(" ", "", "", "").validate(),
            Err(ProfileError::EmptySubject)
        );
        assert_eq!(
            draft("Physics", " ", "", "").validate(),
            Err(ProfileError::EmptyGoal)
        );
        assert_eq!(
            draft("Physics", "Exam", "", "").validate(),
            Err(ProfileError::MissingLevel)
        );
        assert_eq!(
            draft("Physics", "Exam", "Expert", "2").validate(),
            Err(ProfileError::UnknownLevel("Expert".into()))
        );
    }

    #[test]
    fn time_must_be_whole_hours_within_a_day() {
        for bad in ["", "0", "-1", "1.5", "25", "two"] {
            assert_eq!(
                draft("Physics", "Exam", "Advanced", bad).validate(),
                Err(ProfileError::InvalidTime),
                "accepted {bad:?}"
            );
        }
        assert!(draft("Physics", "Exam", "Advanced", "24").validate().is_ok());
    }

    #[test]
    fn overlong_subject_is_rejected() {
        let subject = "x".repeat(101);
        assert_eq!(
            Profile::new(subject, "Exam", StudyLevel::Beginner, 1),
            Err(ProfileError::SubjectTooLong)
        );
    }

    #[test]
    fn validation_messages_are_user_facing() {
        assert_eq!(ProfileError::InvalidTime.to_string(), "Valid study time is required");
        assert_eq!(ProfileError::EmptySubject.to_string(), "Subject is required");
    }
}
