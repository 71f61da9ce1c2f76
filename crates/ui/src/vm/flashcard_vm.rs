use services::{FlashcardPhase, FlashcardSession};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FlashcardScreenVm {
    NotStarted {
        hint: &'static str,
    },
    Card {
        position: String,
        percent: usize,
        badge: String,
        front: String,
        back: String,
        flipped: bool,
    },
    Complete {
        summary: String,
        percent: usize,
    },
}

#[must_use]
pub fn map_flashcard_screen(session: &FlashcardSession, from_content: bool) -> FlashcardScreenVm {
    let total = session.cards().len();
    match session.phase() {
        FlashcardPhase::NotStarted => FlashcardScreenVm::NotStarted {
            hint: if from_content {
                "Flashcards will be generated from your Notebook"
            } else {
                "Flashcards will be generated from your study profile"
            },
        },
        FlashcardPhase::Reviewing { index, flipped } => match session.current_card() {
            Some(card) => FlashcardScreenVm::Card {
                position: format!("{} of {total}", index + 1),
                percent: (index + 1) * 100 / total.max(1),
                badge: card.difficulty.as_str().to_ascii_uppercase(),
                front: card.front.clone(),
                back: card.back.clone(),
                flipped,
            },
            None => FlashcardScreenVm::NotStarted { hint: "" },
        },
        FlashcardPhase::Complete => {
            let correct = session.correct_count();
            FlashcardScreenVm::Complete {
                summary: format!("You got {correct} out of {total} correct!"),
                percent: correct * 100 / total.max(1),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::SessionStore;
    use study_core::model::{CardDifficulty, Flashcard};

    fn session() -> FlashcardSession {
        FlashcardSession::with_cards(vec![
            Flashcard::new(1, "front 1", "back 1", CardDifficulty::Hard),
            Flashcard::new(2, "front 2", "back 2", CardDifficulty::Easy),
        ])
    }

    #[test]
    fn hint_names_the_source() {
        let fresh = FlashcardSession::new();
        assert_eq!(
            map_flashcard_screen(&fresh, true),
            FlashcardScreenVm::NotStarted {
                hint: "Flashcards will be generated from your Notebook"
            }
        );
    }

    #[test]
    fn card_shows_position_and_badge() {
        let mut session = session();
        session.flip().unwrap();
        let FlashcardScreenVm::Card {
            position,
            percent,
            badge,
            flipped,
            ..
        } = map_flashcard_screen(&session, false)
        else {
            panic!("expected a card");
        };
        assert_eq!(position, "1 of 2");
        assert_eq!(percent, 50);
        assert_eq!(badge, "HARD");
        assert!(flipped);
    }

    #[test]
    fn completion_reports_score() {
        let mut store = SessionStore::default();
        let mut session = session();
        session.flip().unwrap();
        session.judge(true, &mut store).unwrap();
        session.flip().unwrap();
        session.judge(false, &mut store).unwrap();
        assert_eq!(
            map_flashcard_screen(&session, false),
            FlashcardScreenVm::Complete {
                summary: "You got 1 out of 2 correct!".into(),
                percent: 50
            }
        );
    }
}
