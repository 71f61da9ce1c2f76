mod flashcard;
mod ids;
mod plan;
mod profile;
mod quiz;

pub use flashcard::{CardDifficulty, Flashcard};
pub use ids::PlanId;
pub use plan::StudyPlanRecord;
pub use profile::{Profile, ProfileDraft, ProfileError, StudyLevel};
pub use quiz::{QUIZ_OPTION_COUNT, QUIZ_QUESTION_COUNT, QuizLevel, QuizQuestion, QuizQuestionError};
