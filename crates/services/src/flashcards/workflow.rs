use std::sync::Arc;

use study_core::GenerationSource;
use study_core::model::Flashcard;

use crate::api::{FlashcardRequest, StudyBackend};
use crate::error::{FlashcardError, ServiceError};
use crate::outcome::LoadOutcome;

use super::FlashcardSession;

#[derive(Clone)]
pub struct FlashcardService {
    backend: Arc<dyn StudyBackend>,
}

impl FlashcardService {
    #[must_use]
    pub fn new(backend: Arc<dyn StudyBackend>) -> Self {
        Self { backend }
    }

    /// # Errors
    ///
    /// Returns `ServiceError` when the backend call fails.
    pub async fn fetch(&self, source: &GenerationSource) -> Result<Vec<Flashcard>, ServiceError> {
        let request = FlashcardRequest::from_source(source);
        tracing::debug!(from_content = source.is_content(), "requesting flashcards");
        self.backend.generate_flashcards(&request).await
    }

    /// # Errors
    ///
    /// Returns `FlashcardError::WrongPhase` when the session already has cards.
    pub async fn generate(
        &self,
        session: &mut FlashcardSession,
        source: &GenerationSource,
    ) -> Result<LoadOutcome, FlashcardError> {
        let ticket = session.begin_generation()?;
        let result = self.fetch(source).await;
        Ok(session.load_cards(ticket, result))
    }
}
