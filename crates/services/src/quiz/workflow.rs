use std::sync::Arc;

use study_core::GenerationSource;
use study_core::model::{QuizLevel, QuizQuestion};

use crate::api::{QuizRequest, StudyBackend};
use crate::error::{QuizError, ServiceError};
use crate::outcome::LoadOutcome;

use super::QuizSession;

/// Asks the backend for quiz levels and feeds them into a `QuizSession`.
#[derive(Clone)]
pub struct QuizService {
    backend: Arc<dyn StudyBackend>,
}

impl QuizService {
    #[must_use]
    pub fn new(backend: Arc<dyn StudyBackend>) -> Self {
        Self { backend }
    }

    /// Requests one level's questions. Holds no session state, so it can run in a task
    /// while the session stays with the screen.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` when the backend call fails.
    pub async fn fetch_level(
        &self,
        source: &GenerationSource,
        level: QuizLevel,
    ) -> Result<Vec<QuizQuestion>, ServiceError> {
        let request = QuizRequest::for_level(source, level);
        tracing::debug!(%level, from_content = source.is_content(), "requesting quiz level");
        self.backend.generate_quiz(&request).await
    }

    /// Generates the pending level and loads it in one step.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` when the session is not waiting for a level.
    pub async fn generate_level(
        &self,
        session: &mut QuizSession,
        source: &GenerationSource,
    ) -> Result<LoadOutcome, QuizError> {
        let (level, ticket) = session.begin_generation()?;
        let result = self.fetch_level(source, level).await;
        Ok(session.load_questions(ticket, result))
    }
}
