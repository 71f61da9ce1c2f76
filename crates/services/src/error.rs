//! Shared error types for the services crate.

use reqwest::StatusCode;
use thiserror::Error;

use study_core::model::ProfileError;

use crate::flashcards::FlashcardPhase;
use crate::quiz::QuizPhase;

const UNAVAILABLE_MESSAGE: &str = "Service temporarily unavailable. Please try again later.";
const INVALID_INPUT_MESSAGE: &str = "Invalid input data";
const PLAN_FAILED_MESSAGE: &str = "Failed to generate study plan. Please try again.";

/// Failures talking to the study backend. Always recoverable: callers substitute a
/// fallback payload or show a retry message.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ServiceError {
    #[error("study backend returned status {status}")]
    Status {
        status: StatusCode,
        detail: Option<String>,
    },
    #[error(transparent)]
    Transport(#[from] reqwest::Error),
    #[error("study backend returned an empty response")]
    EmptyResponse,
    #[error("study backend response was malformed: {0}")]
    Malformed(String),
}

impl ServiceError {
    #[must_use]
    pub fn unavailable() -> Self {
        Self::Status {
            status: StatusCode::SERVICE_UNAVAILABLE,
            detail: None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Transport(err) => err.status(),
            Self::EmptyResponse | Self::Malformed(_) => None,
        }
    }

    /// Message for the user. `generic` covers everything without a dedicated message.
    #[must_use]
    pub fn user_message(&self, generic: &str) -> String {
        match self {
            Self::Status { status, detail } if *status == StatusCode::BAD_REQUEST => detail
                .clone()
                .unwrap_or_else(|| INVALID_INPUT_MESSAGE.to_string()),
            Self::Status { status, .. } if *status == StatusCode::SERVICE_UNAVAILABLE => {
                UNAVAILABLE_MESSAGE.to_string()
            }
            _ => generic.to_string(),
        }
    }
}

/// Errors emitted by `StudyPlanService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlanError {
    #[error(transparent)]
    Validation(#[from] ProfileError),
    #[error(transparent)]
    Service(#[from] ServiceError),
}

impl PlanError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Service(err) => err.user_message(PLAN_FAILED_MESSAGE),
        }
    }
}

/// Misuse of the quiz state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuizError {
    #[error("quiz is not {expected} (currently {actual:?})")]
    WrongPhase {
        expected: &'static str,
        actual: QuizPhase,
    },
    #[error("option {index} is out of range for a question with {options} options")]
    OptionOutOfRange { index: usize, options: usize },
}

/// Misuse of the flashcard state machine.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum FlashcardError {
    #[error("flashcard session is not {expected} (currently {actual:?})")]
    WrongPhase {
        expected: &'static str,
        actual: FlashcardPhase,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_request_prefers_server_detail() {
        let err = ServiceError::Status {
            status: StatusCode::BAD_REQUEST,
            detail: Some("All fields must be non-empty".into()),
        };
        assert_eq!(err.user_message("x"), "All fields must be non-empty");

        let bare = ServiceError::Status {
            status: StatusCode::BAD_REQUEST,
            detail: None,
        };
        assert_eq!(bare.user_message("x"), "Invalid input data");
    }

    #[test]
    fn unavailable_and_other_failures_map_to_fixed_messages() {
        assert_eq!(
            ServiceError::unavailable().user_message("x"),
            "Service temporarily unavailable. Please try again later."
        );
        assert_eq!(ServiceError::EmptyResponse.user_message("retry"), "retry");
        assert_eq!(
            PlanError::Service(ServiceError::EmptyResponse).user_message(),
            "Failed to generate study plan. Please try again."
        );
    }

    #[test]
    fn validation_errors_surface_their_message() {
        let err = PlanError::from(ProfileError::EmptyGoal);
        assert_eq!(err.user_message(), "Goal is required");
    }
}
