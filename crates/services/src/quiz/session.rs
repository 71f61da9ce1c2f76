use std::fmt;

use study_core::model::{QUIZ_QUESTION_COUNT, QuizLevel, QuizQuestion};
use study_core::{GenerationCounter, GenerationTicket, Progress, ProgressAction, SessionStore};

use crate::error::{QuizError, ServiceError};
use crate::fallback::fallback_question;
use crate::outcome::LoadOutcome;

//
// ─── PHASES ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    GeneratingLevel(QuizLevel),
    AnsweringQuestion { level: QuizLevel, index: usize },
    ReviewingLevel(QuizLevel),
    Finished,
}

impl QuizPhase {
    #[must_use]
    pub fn level(self) -> Option<QuizLevel> {
        match self {
            Self::GeneratingLevel(level)
            | Self::AnsweringQuestion { level, .. }
            | Self::ReviewingLevel(level) => Some(level),
            Self::Finished => None,
        }
    }
}

/// Result of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerOutcome {
    Next { index: usize },
    LevelComplete { progress: Progress },
}

/// One line of the end-of-level review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewRow {
    pub question: String,
    pub chosen: Option<String>,
    pub correct: String,
    pub is_correct: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// Three-level quiz: easy, medium, hard, each generated, answered, then reviewed.
///
/// Levels never repeat or skip. Finishing the last answer of a level awards
/// `QUIZ_COMPLETE` once for that level.
pub struct QuizSession {
    phase: QuizPhase,
    questions: Vec<QuizQuestion>,
    answers: Vec<usize>,
    requests: GenerationCounter,
}

impl Default for QuizSession {
    fn default() -> Self {
        Self::new()
    }
}

impl QuizSession {
    /// A session waiting for its easy level to be generated.
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: QuizPhase::GeneratingLevel(QuizLevel::Easy),
            questions: Vec::new(),
            answers: Vec::new(),
            requests: GenerationCounter::new(),
        }
    }

    /// A session whose easy level was generated elsewhere and handed over on navigation.
    #[must_use]
    pub fn with_questions(questions: Vec<QuizQuestion>) -> Self {
        let mut session = Self::new();
        session.install(QuizLevel::Easy, questions);
        session
    }

    #[must_use]
    pub fn phase(&self) -> QuizPhase {
        self.phase
    }

    #[must_use]
    pub fn level(&self) -> Option<QuizLevel> {
        self.phase.level()
    }

    #[must_use]
    pub fn questions(&self) -> &[QuizQuestion] {
        &self.questions
    }

    #[must_use]
    pub fn answers(&self) -> &[usize] {
        &self.answers
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&QuizQuestion> {
        match self.phase {
            QuizPhase::AnsweringQuestion { index, .. } => self.questions.get(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == QuizPhase::Finished
    }

    /// Tags a generation request for the pending level. A second call supersedes the first.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` unless a level is waiting to be generated.
    pub fn begin_generation(&mut self) -> Result<(QuizLevel, GenerationTicket), QuizError> {
        let QuizPhase::GeneratingLevel(level) = self.phase else {
            return Err(self.wrong_phase("generating a level"));
        };
        Ok((level, self.requests.issue()))
    }

    /// Folds a generation result into the session.
    ///
    /// A stale ticket is ignored. A failed or empty result installs the built-in question so
    /// the level can still be played.
    pub fn load_questions(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Vec<QuizQuestion>, ServiceError>,
    ) -> LoadOutcome {
        let QuizPhase::GeneratingLevel(level) = self.phase else {
            return LoadOutcome::Ignored;
        };
        if !self.requests.is_current(ticket) {
            tracing::debug!(%level, "discarding stale quiz questions");
            return LoadOutcome::Ignored;
        }

        match result {
            Ok(questions) if !questions.is_empty() => {
                let count = self.install(level, questions);
                LoadOutcome::Loaded { count }
            }
            Ok(_) => {
                tracing::warn!(%level, "quiz generation returned no questions, using fallback");
                self.install(level, Vec::new());
                LoadOutcome::FellBack
            }
            Err(err) => {
                tracing::warn!(%level, error = %err, "quiz generation failed, using fallback");
                self.install(level, Vec::new());
                LoadOutcome::FellBack
            }
        }
    }

    /// Records `option` for the current question and moves on.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` when no question is being answered and
    /// `QuizError::OptionOutOfRange` for an index past the question's options.
    pub fn answer(
        &mut self,
        option: usize,
        store: &mut SessionStore,
    ) -> Result<AnswerOutcome, QuizError> {
        let QuizPhase::AnsweringQuestion { level, index } = self.phase else {
            return Err(self.wrong_phase("answering a question"));
        };
        let options = self.questions.get(index).map_or(0, |q| q.options().len());
        if option >= options {
            return Err(QuizError::OptionOutOfRange {
                index: option,
                options,
            });
        }

        self.answers.push(option);
        let next = index + 1;
        if next < self.questions.len() {
            self.phase = QuizPhase::AnsweringQuestion { level, index: next };
            return Ok(AnswerOutcome::Next { index: next });
        }

        self.phase = QuizPhase::ReviewingLevel(level);
        let progress = store.increase_progress(ProgressAction::QuizComplete);
        tracing::info!(%level, progress = progress.value(), "quiz level complete");
        Ok(AnswerOutcome::LevelComplete { progress })
    }

    /// Chosen versus correct option for every question of the current set.
    #[must_use]
    pub fn review(&self) -> Vec<ReviewRow> {
        self.questions
            .iter()
            .enumerate()
            .map(|(i, question)| {
                let chosen_index = self.answers.get(i).copied();
                ReviewRow {
                    question: question.question().to_string(),
                    chosen: chosen_index
                        .and_then(|c| question.option(c))
                        .map(str::to_string),
                    correct: question.correct_option().to_string(),
                    is_correct: chosen_index == Some(question.correct()),
                }
            })
            .collect()
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.review().iter().filter(|row| row.is_correct).count()
    }

    /// Leaves the review: on to the next level, or `Finished` after the hardest one.
    ///
    /// # Errors
    ///
    /// Returns `QuizError::WrongPhase` unless a level is being reviewed.
    pub fn advance(&mut self) -> Result<QuizPhase, QuizError> {
        let QuizPhase::ReviewingLevel(level) = self.phase else {
            return Err(self.wrong_phase("reviewing a level"));
        };
        self.questions.clear();
        self.answers.clear();
        self.phase = match level.next() {
            Some(next) => QuizPhase::GeneratingLevel(next),
            None => QuizPhase::Finished,
        };
        Ok(self.phase)
    }

    /// Drops interest in any in-flight generation, e.g. when the screen is left.
    pub fn abandon(&mut self) {
        self.requests.invalidate();
    }

    fn install(&mut self, level: QuizLevel, mut questions: Vec<QuizQuestion>) -> usize {
        if questions.is_empty() {
            questions.push(fallback_question());
        }
        questions.truncate(QUIZ_QUESTION_COUNT);
        self.questions = questions;
        self.answers.clear();
        self.phase = QuizPhase::AnsweringQuestion { level, index: 0 };
        self.questions.len()
    }

    fn wrong_phase(&self, expected: &'static str) -> QuizError {
        QuizError::WrongPhase {
            expected,
            actual: self.phase,
        }
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("phase", &self.phase)
            .field("questions_len", &self.questions.len())
            .field("answers_len", &self.answers.len())
            .finish_non_exhaustive()
    }
}
