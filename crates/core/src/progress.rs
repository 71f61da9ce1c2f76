use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::StoreError;

/// Study activities that earn progress points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProgressAction {
    TutorSave,
    QuizComplete,
    FlashcardsComplete,
}

impl ProgressAction {
    pub const ALL: [ProgressAction; 3] = [
        Self::TutorSave,
        Self::QuizComplete,
        Self::FlashcardsComplete,
    ];

    /// Points awarded for the action, before clamping.
    #[must_use]
    pub fn increment(self) -> u8 {
        match self {
            Self::TutorSave => 2,
            Self::QuizComplete => 10,
            Self::FlashcardsComplete => 5,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TutorSave => "TUTOR_SAVE",
            Self::QuizComplete => "QUIZ_COMPLETE",
            Self::FlashcardsComplete => "FLASHCARDS_COMPLETE",
        }
    }
}

impl fmt::Display for ProgressAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProgressAction {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| StoreError::InvalidAction(s.to_string()))
    }
}

/// Gamification score in `0..=100`. Only ever moves up.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Progress(u8);

impl Progress {
    pub const MAX: u8 = 100;

    #[must_use]
    pub fn value(self) -> u8 {
        self.0
    }

    /// Returns the score after `action`, clamped at [`Progress::MAX`].
    #[must_use]
    pub fn advanced(self, action: ProgressAction) -> Self {
        Self(self.0.saturating_add(action.increment()).min(Self::MAX))
    }

    #[must_use]
    pub fn is_maxed(self) -> bool {
        self.0 >= Self::MAX
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}
