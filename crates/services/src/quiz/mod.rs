mod session;
mod workflow;

pub use crate::error::QuizError;
pub use session::{AnswerOutcome, QuizPhase, QuizSession, ReviewRow};
pub use workflow::QuizService;
