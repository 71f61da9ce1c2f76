use std::sync::Arc;

use crate::Clock;
use crate::api::{HttpStudyApi, StudyBackend};
use crate::config::StudyApiConfig;
use crate::error::ServiceError;
use crate::flashcards::FlashcardService;
use crate::plan_service::StudyPlanService;
use crate::quiz::QuizService;
use crate::tutor::TutorService;

/// Assembles the app-facing services around one backend.
#[derive(Clone)]
pub struct AppServices {
    clock: Clock,
    plans: Arc<StudyPlanService>,
    tutor: Arc<TutorService>,
    quizzes: Arc<QuizService>,
    flashcards: Arc<FlashcardService>,
}

impl AppServices {
    /// Build services that talk to the study backend over HTTP.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` if the HTTP client cannot be constructed.
    pub fn http(config: StudyApiConfig, clock: Clock) -> Result<Self, ServiceError> {
        tracing::info!(base_url = %config.base_url, "using study backend");
        let backend: Arc<dyn StudyBackend> = Arc::new(HttpStudyApi::new(config)?);
        Ok(Self::with_backend(backend, clock))
    }

    #[must_use]
    pub fn with_backend(backend: Arc<dyn StudyBackend>, clock: Clock) -> Self {
        Self {
            clock,
            plans: Arc::new(StudyPlanService::new(Arc::clone(&backend))),
            tutor: Arc::new(TutorService::new(Arc::clone(&backend))),
            quizzes: Arc::new(QuizService::new(Arc::clone(&backend))),
            flashcards: Arc::new(FlashcardService::new(backend)),
        }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    #[must_use]
    pub fn plans(&self) -> Arc<StudyPlanService> {
        Arc::clone(&self.plans)
    }

    #[must_use]
    pub fn tutor(&self) -> Arc<TutorService> {
        Arc::clone(&self.tutor)
    }

    #[must_use]
    pub fn quizzes(&self) -> Arc<QuizService> {
        Arc::clone(&self.quizzes)
    }

    #[must_use]
    pub fn flashcards(&self) -> Arc<FlashcardService> {
        Arc::clone(&self.flashcards)
    }
}
