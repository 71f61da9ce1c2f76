use async_trait::async_trait;

use study_core::GenerationSource;
use study_core::model::{
    Flashcard, Profile, QUIZ_QUESTION_COUNT, QuizLevel, QuizQuestion, StudyLevel,
};

use crate::error::ServiceError;

/// Quiz generation request, either from the profile or from notebook content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizRequest {
    Profile {
        subject: String,
        level: QuizLevel,
        count: usize,
    },
    Content {
        content: String,
        difficulty: QuizLevel,
        count: usize,
    },
}

impl QuizRequest {
    #[must_use]
    pub fn for_level(source: &GenerationSource, level: QuizLevel) -> Self {
        match source {
            GenerationSource::Content(content) => Self::Content {
                content: content.clone(),
                difficulty: level,
                count: QUIZ_QUESTION_COUNT,
            },
            GenerationSource::Profile { subject, .. } => Self::Profile {
                subject: subject.clone(),
                level,
                count: QUIZ_QUESTION_COUNT,
            },
        }
    }
}

/// Flashcard generation request, either from the profile or from notebook content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlashcardRequest {
    Profile { subject: String, level: StudyLevel },
    Content { content: String },
}

impl FlashcardRequest {
    #[must_use]
    pub fn from_source(source: &GenerationSource) -> Self {
        match source {
            GenerationSource::Content(content) => Self::Content {
                content: content.clone(),
            },
            GenerationSource::Profile { subject, level } => Self::Profile {
                subject: subject.clone(),
                level: *level,
            },
        }
    }
}

/// The AI backend. All generation happens on the other side of this trait.
#[async_trait]
pub trait StudyBackend: Send + Sync {
    async fn generate_study_plan(&self, profile: &Profile) -> Result<String, ServiceError>;

    async fn ask_tutor(&self, question: &str) -> Result<String, ServiceError>;

    async fn generate_quiz(&self, request: &QuizRequest)
    -> Result<Vec<QuizQuestion>, ServiceError>;

    async fn generate_flashcards(
        &self,
        request: &FlashcardRequest,
    ) -> Result<Vec<Flashcard>, ServiceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_request_follows_source_kind() {
        let content = GenerationSource::Content("notes".into());
        assert_eq!(
            QuizRequest::for_level(&content, QuizLevel::Hard),
            QuizRequest::Content {
                content: "notes".into(),
                difficulty: QuizLevel::Hard,
                count: 10,
            }
        );

        let profile = GenerationSource::Profile {
            subject: "Physics".into(),
            level: StudyLevel::Advanced,
        };
        assert_eq!(
            QuizRequest::for_level(&profile, QuizLevel::Easy),
            QuizRequest::Profile {
                subject: "Physics".into(),
                level: QuizLevel::Easy,
                count: 10,
            }
        );
    }

    #[test]
    fn flashcard_request_uses_profile_level() {
        let profile = GenerationSource::Profile {
            subject: "Physics".into(),
            level: StudyLevel::Intermediate,
        };
        assert_eq!(
            FlashcardRequest::from_source(&profile),
            FlashcardRequest::Profile {
                subject: "Physics".into(),
                level: StudyLevel::Intermediate,
            }
        );
    }
}
