//! Built-in payloads substituted when the backend cannot deliver.

use study_core::model::{CardDifficulty, Flashcard, QuizQuestion};

/// Tutor reply shown when a question could not be answered.
pub const TUTOR_APOLOGY: &str = "Sorry, I couldn't process your question. Please try again.";

/// The single question a level falls back to.
#[must_use]
pub fn fallback_question() -> QuizQuestion {
    QuizQuestion::fallback()
}

/// The single card a flashcard session falls back to.
#[must_use]
pub fn fallback_flashcard() -> Flashcard {
    Flashcard::new(
        1,
        "What does learning mean?",
        "Learning is the process of understanding and applying knowledge.",
        CardDifficulty::Easy,
    )
}
