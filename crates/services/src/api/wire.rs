//! JSON bodies exchanged with the study backend.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use study_core::model::{CardDifficulty, Flashcard, Profile, QuizQuestion};

use super::backend::{FlashcardRequest, QuizRequest};
use crate::error::ServiceError;

pub(crate) const STUDY_PLAN_PATH: &str = "/study-plan";
pub(crate) const TUTOR_PATH: &str = "/tutor";
pub(crate) const QUIZ_PATH: &str = "/quiz";
pub(crate) const QUIZ_FROM_CONTENT_PATH: &str = "/quiz-from-content";
pub(crate) const FLASHCARDS_PATH: &str = "/flashcards";
pub(crate) const FLASHCARDS_FROM_CONTENT_PATH: &str = "/flashcards-from-content";

//
// ─── REQUESTS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize)]
pub(crate) struct StudyPlanBody<'a> {
    subject: &'a str,
    goal: &'a str,
    level: &'static str,
    time_per_day: u32,
}

impl<'a> StudyPlanBody<'a> {
    pub(crate) fn from_profile(profile: &'a Profile) -> Self {
        Self {
            subject: profile.subject(),
            goal: profile.goal(),
            level: profile.level().as_str(),
            time_per_day: profile.time_per_day(),
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct TutorBody<'a> {
    pub(crate) question: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum QuizBody<'a> {
    Profile {
        subject: &'a str,
        level: &'static str,
        count: usize,
    },
    Content {
        content: &'a str,
        difficulty: &'static str,
        count: usize,
    },
}

impl<'a> QuizBody<'a> {
    pub(crate) fn route(request: &'a QuizRequest) -> (&'static str, Self) {
        match request {
            QuizRequest::Profile {
                subject,
                level,
                count,
            } => (
                QUIZ_PATH,
                Self::Profile {
                    subject: subject.as_str(),
                    level: level.as_str(),
                    count: *count,
                },
            ),
            QuizRequest::Content {
                content,
                difficulty,
                count,
            } => (
                QUIZ_FROM_CONTENT_PATH,
                Self::Content {
                    content: content.as_str(),
                    difficulty: difficulty.as_str(),
                    count: *count,
                },
            ),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub(crate) enum FlashcardBody<'a> {
    Profile { subject: &'a str, level: &'static str },
    Content { content: &'a str },
}

impl<'a> FlashcardBody<'a> {
    pub(crate) fn route(request: &'a FlashcardRequest) -> (&'static str, Self) {
        match request {
            FlashcardRequest::Profile { subject, level } => (
                FLASHCARDS_PATH,
                Self::Profile {
                    subject: subject.as_str(),
                    level: level.as_str(),
                },
            ),
            FlashcardRequest::Content { content } => {
                (
                    FLASHCARDS_FROM_CONTENT_PATH,
                    Self::Content {
                        content: content.as_str(),
                    },
                )
            }
        }
    }
}

//
// ─── RESPONSES ─────────────────────────────────────────────────────────────────
//

#[derive(Debug, Deserialize)]
pub(crate) struct StudyPlanReply {
    #[serde(default)]
    study_plan: Option<String>,
}

impl StudyPlanReply {
    pub(crate) fn into_plan(self) -> Result<String, ServiceError> {
        non_blank(self.study_plan)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TutorReply {
    #[serde(default)]
    answer: Option<String>,
}

impl TutorReply {
    pub(crate) fn into_answer(self) -> Result<String, ServiceError> {
        non_blank(self.answer)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuizReply {
    #[serde(default)]
    questions: Vec<WireQuestion>,
}

#[derive(Debug, Deserialize)]
struct WireQuestion {
    #[serde(default)]
    question: String,
    #[serde(default)]
    options: Vec<String>,
    #[serde(default)]
    correct: usize,
}

impl QuizReply {
    /// Keeps well-formed questions in order. A reply with none left is malformed.
    pub(crate) fn into_questions(self) -> Result<Vec<QuizQuestion>, ServiceError> {
        let total = self.questions.len();
        let questions: Vec<_> = self
            .questions
            .into_iter()
            .filter_map(|q| QuizQuestion::new(q.question, q.options, q.correct).ok())
            .collect();
        if questions.len() < total {
            tracing::debug!(
                dropped = total - questions.len(),
                "discarded malformed quiz questions"
            );
        }
        if questions.is_empty() {
            return Err(ServiceError::Malformed("no usable quiz questions".into()));
        }
        Ok(questions)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FlashcardReply {
    #[serde(default)]
    flashcards: Vec<WireFlashcard>,
}

#[derive(Debug, Deserialize)]
struct WireFlashcard {
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    front: String,
    #[serde(default)]
    back: String,
    #[serde(default)]
    difficulty: Option<String>,
}

impl FlashcardReply {
    /// Keeps cards with both sides filled. Missing ids are numbered by position.
    pub(crate) fn into_cards(self) -> Result<Vec<Flashcard>, ServiceError> {
        let cards: Vec<_> = self
            .flashcards
            .into_iter()
            .zip(1u64..)
            .filter(|(card, _)| !card.front.trim().is_empty() && !card.back.trim().is_empty())
            .map(|(card, position)| {
                let difficulty = card
                    .difficulty
                    .as_deref()
                    .map_or(CardDifficulty::default(), CardDifficulty::parse_lenient);
                Flashcard::new(card.id.unwrap_or(position), card.front, card.back, difficulty)
            })
            .collect();
        if cards.is_empty() {
            return Err(ServiceError::Malformed("no usable flashcards".into()));
        }
        Ok(cards)
    }
}

/// FastAPI error body. `detail` is a string for handled errors and a list for
/// request validation failures; only the string form is surfaced.
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorReply {
    #[serde(default)]
    detail: Value,
}

impl ErrorReply {
    pub(crate) fn into_detail(self) -> Option<String> {
        match self.detail {
            Value::String(detail) if !detail.trim().is_empty() => Some(detail),
            _ => None,
        }
    }
}

fn non_blank(value: Option<String>) -> Result<String, ServiceError> {
    value
        .filter(|text| !text.trim().is_empty())
        .ok_or(ServiceError::EmptyResponse)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use study_core::model::{QuizLevel, StudyLevel};

    #[test]
    fn study_plan_body_uses_backend_field_names() {
        let profile = Profile::new("Physics", "Exam", StudyLevel::Beginner, 2).unwrap();
        let body = serde_json::to_value(StudyPlanBody::from_profile(&profile)).unwrap();
        assert_eq!(
            body,
            json!({"subject": "Physics", "goal": "Exam", "level": "Beginner", "time_per_day": 2})
        );
    }

    #[test]
    fn quiz_body_picks_endpoint_by_source() {
        let request = QuizRequest::Content {
            content: "notes".into(),
            difficulty: QuizLevel::Medium,
            count: 10,
        };
        let (path, body) = QuizBody::route(&request);
        assert_eq!(path, "/quiz-from-content");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"content": "notes", "difficulty": "medium", "count": 10})
        );

        let request = QuizRequest::Profile {
            subject: "General".into(),
            level: QuizLevel::Easy,
            count: 10,
        };
        let (path, body) = QuizBody::route(&request);
        assert_eq!(path, "/quiz");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"subject": "General", "level": "easy", "count": 10})
        );
    }

    #[test]
    fn flashcard_body_picks_endpoint_by_source() {
        let request = FlashcardRequest::Profile {
            subject: "Physics".into(),
            level: StudyLevel::Advanced,
        };
        let (path, body) = FlashcardBody::route(&request);
        assert_eq!(path, "/flashcards");
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"subject": "Physics", "level": "Advanced"})
        );
    }

    #[test]
    fn malformed_questions_are_dropped() {
        let reply: QuizReply = serde_json::from_value(json!({
            "questions": [
                {"question": "ok?", "options": ["a", "b", "c", "d"], "correct": 1},
                {"question": "three options", "options": ["a", "b", "c"], "correct": 0},
                {"question": "bad index", "options": ["a", "b", "c", "d"], "correct": 7}
            ]
        }))
        .unwrap();
        let questions = reply.into_questions().unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].correct_option(), "b");
    }

    #[test]
    fn reply_without_usable_questions_is_an_error() {
        let reply: QuizReply = serde_json::from_value(json!({"questions": []})).unwrap();
        assert!(matches!(
            reply.into_questions(),
            Err(ServiceError::Malformed(_))
        ));
    }

    #[test]
    fn flashcards_get_positional_ids_and_lenient_difficulty() {
        let reply: FlashcardReply = serde_json::from_value(json!({
            "flashcards": [
                {"front": "F1", "back": "B1", "difficulty": "hard"},
                {"id": 9, "front": " ", "back": "B2"},
                {"front": "F3", "back": "B3", "difficulty": "legendary"}
            ]
        }))
        .unwrap();
        let cards = reply.into_cards().unwrap();
        assert_eq!(cards.len(), 2);
        assert_eq!(cards[0].id, 1);
        assert_eq!(cards[0].difficulty, CardDifficulty::Hard);
        assert_eq!(cards[1].id, 3);
        assert_eq!(cards[1].difficulty, CardDifficulty::Medium);
    }

    #[test]
    fn blank_plan_is_empty_response() {
        let reply: StudyPlanReply = serde_json::from_value(json!({"study_plan": "  "})).unwrap();
        assert!(matches!(reply.into_plan(), Err(ServiceError::EmptyResponse)));
    }

    #[test]
    fn error_detail_only_surfaces_strings() {
        let reply: ErrorReply =
            serde_json::from_value(json!({"detail": "Time per day must be between 1 and 24 hours"}))
                .unwrap();
        assert_eq!(
            reply.into_detail().as_deref(),
            Some("Time per day must be between 1 and 24 hours")
        );

        let reply: ErrorReply =
            serde_json::from_value(json!({"detail": [{"loc": ["body"], "msg": "x"}]})).unwrap();
        assert_eq!(reply.into_detail(), None);
    }
}
