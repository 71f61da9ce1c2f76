use study_core::model::Flashcard;
use study_core::{GenerationCounter, GenerationTicket, Progress, ProgressAction, SessionStore};

use crate::error::{FlashcardError, ServiceError};
use crate::fallback::fallback_flashcard;
use crate::outcome::LoadOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashcardPhase {
    NotStarted,
    Reviewing { index: usize, flipped: bool },
    Complete,
}

/// What judging the current card led to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JudgeOutcome {
    Next { index: usize },
    Complete { correct: usize, progress: Progress },
}

/// A pass through a generated deck: flip, judge, repeat.
///
/// Finishing the deck credits `FLASHCARDS_COMPLETE` once. Restarting drops the deck so a
/// fresh one has to be generated.
#[derive(Debug)]
pub struct FlashcardSession {
    phase: FlashcardPhase,
    cards: Vec<Flashcard>,
    correct: usize,
    requests: GenerationCounter,
}

impl Default for FlashcardSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FlashcardSession {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: FlashcardPhase::NotStarted,
            cards: Vec::new(),
            correct: 0,
            requests: GenerationCounter::new(),
        }
    }

    /// A session over cards generated elsewhere.
    #[must_use]
    pub fn with_cards(cards: Vec<Flashcard>) -> Self {
        let mut session = Self::new();
        session.install(cards);
        session
    }

    #[must_use]
    pub fn phase(&self) -> FlashcardPhase {
        self.phase
    }

    #[must_use]
    pub fn cards(&self) -> &[Flashcard] {
        &self.cards
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Flashcard> {
        match self.phase {
            FlashcardPhase::Reviewing { index, .. } => self.cards.get(index),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_flipped(&self) -> bool {
        matches!(self.phase, FlashcardPhase::Reviewing { flipped: true, .. })
    }

    #[must_use]
    pub fn correct_count(&self) -> usize {
        self.correct
    }

    /// # Errors
    ///
    /// Returns `FlashcardError::WrongPhase` once cards are loaded.
    pub fn begin_generation(&mut self) -> Result<GenerationTicket, FlashcardError> {
        if self.phase != FlashcardPhase::NotStarted {
            return Err(self.wrong_phase("not started"));
        }
        Ok(self.requests.issue())
    }

    /// Installs generated cards, or the built-in card when generation failed or came back empty.
    pub fn load_cards(
        &mut self,
        ticket: GenerationTicket,
        result: Result<Vec<Flashcard>, ServiceError>,
    ) -> LoadOutcome {
        if self.phase != FlashcardPhase::NotStarted || !self.requests.is_current(ticket) {
            tracing::debug!("discarding stale flashcards");
            return LoadOutcome::Ignored;
        }
        match result {
            Ok(cards) if !cards.is_empty() => LoadOutcome::Loaded {
                count: self.install(cards),
            },
            Ok(_) => {
                tracing::warn!("flashcard generation returned no cards, using fallback");
                self.install(Vec::new());
                LoadOutcome::FellBack
            }
            Err(err) => {
                tracing::warn!(error = %err, "flashcard generation failed, using fallback");
                self.install(Vec::new());
                LoadOutcome::FellBack
            }
        }
    }

    /// Toggles between front and back.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::WrongPhase` unless a card is showing.
    pub fn flip(&mut self) -> Result<bool, FlashcardError> {
        let FlashcardPhase::Reviewing { index, flipped } = self.phase else {
            return Err(self.wrong_phase("reviewing"));
        };
        self.phase = FlashcardPhase::Reviewing {
            index,
            flipped: !flipped,
        };
        Ok(!flipped)
    }

    /// Marks the current card right or wrong and moves to the next one.
    ///
    /// # Errors
    ///
    /// Returns `FlashcardError::WrongPhase` unless the current card has been flipped.
    pub fn judge(
        &mut self,
        correct: bool,
        store: &mut SessionStore,
    ) -> Result<JudgeOutcome, FlashcardError> {
        let FlashcardPhase::Reviewing {
            index,
            flipped: true,
        } = self.phase
        else {
            return Err(self.wrong_phase("flipped card"));
        };
        if correct {
            self.correct += 1;
        }

        let next = index + 1;
        if next < self.cards.len() {
            self.phase = FlashcardPhase::Reviewing {
                index: next,
                flipped: false,
            };
            return Ok(JudgeOutcome::Next { index: next });
        }

        self.phase = FlashcardPhase::Complete;
        let progress = store.increase_progress(ProgressAction::FlashcardsComplete);
        tracing::info!(
            correct = self.correct,
            total = self.cards.len(),
            "flashcard deck complete"
        );
        Ok(JudgeOutcome::Complete {
            correct: self.correct,
            progress,
        })
    }

    /// Back to `NotStarted` with no cards, ready for another generation.
    pub fn restart(&mut self) {
        self.requests.invalidate();
        self.cards.clear();
        self.correct = 0;
        self.phase = FlashcardPhase::NotStarted;
    }

    pub fn abandon(&mut self) {
        self.requests.invalidate();
    }

    fn install(&mut self, mut cards: Vec<Flashcard>) -> usize {
        if cards.is_empty() {
            cards.push(fallback_flashcard());
        }
        self.cards = cards;
        self.correct = 0;
        self.phase = FlashcardPhase::Reviewing {
            index: 0,
            flipped: false,
        };
        self.cards.len()
    }

    fn wrong_phase(&self, expected: &'static str) -> FlashcardError {
        FlashcardError::WrongPhase {
            expected,
            actual: self.phase,
        }
    }
}
