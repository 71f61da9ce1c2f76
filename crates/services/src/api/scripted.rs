use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};

use async_trait::async_trait;

use study_core::model::{Flashcard, Profile, QuizQuestion};

use super::backend::{FlashcardRequest, QuizRequest, StudyBackend};
use crate::error::ServiceError;

/// A backend call as observed by `ScriptedBackend`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    StudyPlan { subject: String },
    Tutor { question: String },
    Quiz(QuizRequest),
    Flashcards(FlashcardRequest),
}

#[derive(Default)]
struct Script {
    plan: Option<String>,
    answers: VecDeque<String>,
    quizzes: VecDeque<Vec<QuizQuestion>>,
    flashcards: VecDeque<Vec<Flashcard>>,
    failing: bool,
    calls: Vec<RecordedCall>,
}

/// In-memory backend with canned responses, for tests.
///
/// Queued quiz, flashcard and tutor responses are handed out one per call; an empty queue
/// behaves like an unavailable service.
#[derive(Clone, Default)]
pub struct ScriptedBackend {
    script: Arc<Mutex<Script>>,
}

impl ScriptedBackend {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_plan(self, plan: impl Into<String>) -> Self {
        self.edit(|script| script.plan = Some(plan.into()));
        self
    }

    #[must_use]
    pub fn with_answer(self, answer: impl Into<String>) -> Self {
        self.edit(|script| script.answers.push_back(answer.into()));
        self
    }

    #[must_use]
    pub fn with_quiz(self, questions: Vec<QuizQuestion>) -> Self {
        self.edit(|script| script.quizzes.push_back(questions));
        self
    }

    #[must_use]
    pub fn with_flashcards(self, cards: Vec<Flashcard>) -> Self {
        self.edit(|script| script.flashcards.push_back(cards));
        self
    }

    /// Every call fails with 503 from now on.
    #[must_use]
    pub fn failing(self) -> Self {
        self.edit(|script| script.failing = true);
        self
    }

    #[must_use]
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.edit(|script| script.calls.clone())
    }

    fn edit<T>(&self, f: impl FnOnce(&mut Script) -> T) -> T {
        let mut guard = self.script.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    fn respond<T>(
        &self,
        call: RecordedCall,
        pick: impl FnOnce(&mut Script) -> Option<T>,
    ) -> Result<T, ServiceError> {
        self.edit(|script| {
            script.calls.push(call);
            if script.failing {
                return Err(ServiceError::unavailable());
            }
            pick(script).ok_or_else(ServiceError::unavailable)
        })
    }
}

#[async_trait]
impl StudyBackend for ScriptedBackend {
    async fn generate_study_plan(&self, profile: &Profile) -> Result<String, ServiceError> {
        let call = RecordedCall::StudyPlan {
            subject: profile.subject().to_string(),
        };
        self.respond(call, |script| script.plan.clone())
    }

    async fn ask_tutor(&self, question: &str) -> Result<String, ServiceError> {
        let call = RecordedCall::Tutor {
            question: question.to_string(),
        };
        self.respond(call, |script| script.answers.pop_front())
    }

    async fn generate_quiz(
        &self,
        request: &QuizRequest,
    ) -> Result<Vec<QuizQuestion>, ServiceError> {
        self.respond(RecordedCall::Quiz(request.clone()), |script| {
            script.quizzes.pop_front()
        })
    }

    async fn generate_flashcards(
        &self,
        request: &FlashcardRequest,
    ) -> Result<Vec<Flashcard>, ServiceError> {
        self.respond(RecordedCall::Flashcards(request.clone()), |script| {
            script.flashcards.pop_front()
        })
    }
}
