use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Number of answer options every quiz question carries.
pub const QUIZ_OPTION_COUNT: usize = 4;

/// Maximum questions played per level.
pub const QUIZ_QUESTION_COUNT: usize = 10;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizQuestionError {
    #[error("question text cannot be empty")]
    EmptyQuestion,

    #[error("expected 4 options, got {0}")]
    OptionCount(usize),

    #[error("correct index {0} is out of range")]
    CorrectOutOfRange(usize),
}

/// Quiz difficulty. Levels are always played easy, medium, hard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizLevel {
    Easy,
    Medium,
    Hard,
}

impl QuizLevel {
    pub const ORDER: [QuizLevel; 3] = [Self::Easy, Self::Medium, Self::Hard];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// The level played after this one, or `None` for the hardest level.
    #[must_use]
    pub fn next(self) -> Option<Self> {
        match self {
            Self::Easy => Some(Self::Medium),
            Self::Medium => Some(Self::Hard),
            Self::Hard => None,
        }
    }

    #[must_use]
    pub fn is_last(self) -> bool {
        self.next().is_none()
    }
}

impl fmt::Display for QuizLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QuizLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ORDER
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown quiz level: {s}"))
    }
}

/// A multiple-choice question with exactly four options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    question: String,
    options: Vec<String>,
    correct: usize,
}

impl QuizQuestion {
    /// # Errors
    ///
    /// Returns `QuizQuestionError` for blank text, a wrong option count, or an
    /// out-of-range correct index.
    pub fn new(
        question: impl Into<String>,
        options: Vec<String>,
        correct: usize,
    ) -> Result<Self, QuizQuestionError> {
        let question = question.into();
        if question.trim().is_empty() {
            return Err(QuizQuestionError::EmptyQuestion);
        }
        if options.len() != QUIZ_OPTION_COUNT {
            return Err(QuizQuestionError::OptionCount(options.len()));
        }
        if correct >= options.len() {
            return Err(QuizQuestionError::CorrectOutOfRange(correct));
        }
        Ok(Self {
            question,
            options,
            correct,
        })
    }

    /// The question a level falls back to when nothing was generated.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            question: "Learning happens when you:".to_string(),
            options: [
                "Memorize only",
                "Understand concepts",
                "Skip practice",
                "Avoid mistakes",
            ]
            .map(String::from)
            .to_vec(),
            correct: 1,
        }
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn options(&self) -> &[String] {
        &self.options
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn correct_option(&self) -> &str {
        &self.options[self.correct]
    }

    #[must_use]
    pub fn option(&self, index: usize) -> Option<&str> {
        self.options.get(index).map(String::as_str)
    }
}
