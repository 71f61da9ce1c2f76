use std::sync::Arc;

use study_core::model::QuizLevel;
use study_core::{GenerationSource, NavPayload};

use crate::api::{FlashcardRequest, QuizRequest, StudyBackend};
use crate::error::ServiceError;

#[derive(Clone)]
pub struct TutorService {
    backend: Arc<dyn StudyBackend>,
}

impl TutorService {
    #[must_use]
    pub fn new(backend: Arc<dyn StudyBackend>) -> Self {
        Self { backend }
    }

    /// # Errors
    ///
    /// Returns `ServiceError` when the backend call fails or the answer is empty.
    pub async fn ask(&self, question: &str) -> Result<String, ServiceError> {
        tracing::debug!(chars = question.len(), "asking tutor");
        self.backend.ask_tutor(question).await
    }

    /// Builds a quiz from one tutor answer, ready to hand to the quiz screen.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on backend failure or when no questions come back.
    pub async fn quiz_from_content(&self, content: &str) -> Result<NavPayload, ServiceError> {
        let source = GenerationSource::Content(content.to_string());
        let request = QuizRequest::for_level(&source, QuizLevel::Easy);
        let questions = self.backend.generate_quiz(&request).await?;
        if questions.is_empty() {
            return Err(ServiceError::EmptyResponse);
        }
        Ok(NavPayload::QuizQuestions(questions))
    }

    /// Builds flashcards from one tutor answer, ready to hand to the flashcard screen.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` on backend failure or when no cards come back.
    pub async fn flashcards_from_content(&self, content: &str) -> Result<NavPayload, ServiceError> {
        let request = FlashcardRequest::Content {
            content: content.to_string(),
        };
        let cards = self.backend.generate_flashcards(&request).await?;
        if cards.is_empty() {
            return Err(ServiceError::EmptyResponse);
        }
        Ok(NavPayload::Flashcards(cards))
    }
}
