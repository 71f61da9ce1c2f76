use services::{QuizPhase, QuizSession};
use study_core::model::QuizLevel;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReviewRowVm {
    pub question: String,
    pub correct: String,
    pub chosen: String,
    pub is_correct: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizScreenVm {
    Generating {
        heading: String,
    },
    Question {
        heading: String,
        prompt: String,
        options: Vec<String>,
    },
    Review {
        heading: String,
        score: String,
        rows: Vec<ReviewRowVm>,
        advance_label: &'static str,
    },
    Finished,
}

fn level_title(level: QuizLevel) -> &'static str {
    match level {
        QuizLevel::Easy => "Easy",
        QuizLevel::Medium => "Medium",
        QuizLevel::Hard => "Hard",
    }
}

#[must_use]
pub fn map_quiz_screen(session: &QuizSession) -> QuizScreenVm {
    match session.phase() {
        QuizPhase::GeneratingLevel(level) => QuizScreenVm::Generating {
            heading: format!("Generating {level} quiz..."),
        },
        QuizPhase::AnsweringQuestion { level, index } => {
            let total = session.questions().len();
            let (prompt, options) = session
                .current_question()
                .map(|q| (q.question().to_string(), q.options().to_vec()))
                .unwrap_or_default();
            QuizScreenVm::Question {
                heading: format!("{} Quiz ({}/{total})", level_title(level), index + 1),
                prompt,
                options,
            }
        }
        QuizPhase::ReviewingLevel(level) => {
            let rows: Vec<ReviewRowVm> = session
                .review()
                .into_iter()
                .map(|row| ReviewRowVm {
                    question: row.question,
                    correct: row.correct,
                    chosen: row.chosen.unwrap_or_else(|| "No answer".to_string()),
                    is_correct: row.is_correct,
                })
                .collect();
            let correct = rows.iter().filter(|row| row.is_correct).count();
            QuizScreenVm::Review {
                heading: format!("{} Level Complete", level_title(level)),
                score: format!("{correct}/{} correct", rows.len()),
                rows,
                advance_label: if level.is_last() {
                    "Finish Quiz"
                } else {
                    "Next Level →"
                },
            }
        }
        QuizPhase::Finished => QuizScreenVm::Finished,
    }
}
