use std::sync::Arc;

use dioxus::prelude::*;
use services::{Clock, FlashcardService, QuizService, StudyPlanService, TutorService};
use study_core::{PayloadSlot, SessionStore};

/// What the composition root hands to the UI.
pub trait UiApp: Send + Sync {
    fn clock(&self) -> Clock;

    fn plans(&self) -> Arc<StudyPlanService>;
    fn tutor(&self) -> Arc<TutorService>;
    fn quizzes(&self) -> Arc<QuizService>;
    fn flashcards(&self) -> Arc<FlashcardService>;
}

#[derive(Clone)]
pub struct AppContext {
    clock: Clock,
    plans: Arc<StudyPlanService>,
    tutor: Arc<TutorService>,
    quizzes: Arc<QuizService>,
    flashcards: Arc<FlashcardService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            clock: app.clock(),
            plans: app.plans(),
            tutor: app.tutor(),
            quizzes: app.quizzes(),
            flashcards: app.flashcards(),
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

// Provided by the application composition root (`crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// The session store, provided once by [`crate::App`]. Screens write to it only through its
/// operations.
#[must_use]
pub fn use_store() -> Signal<SessionStore> {
    use_context::<Signal<SessionStore>>()
}

/// The one-shot navigation payload slot, provided next to the store.
#[must_use]
pub fn use_payload_slot() -> Signal<PayloadSlot> {
    use_context::<Signal<PayloadSlot>>()
}
