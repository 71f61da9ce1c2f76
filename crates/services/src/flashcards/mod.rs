mod session;
mod workflow;

pub use crate::error::FlashcardError;
pub use session::{FlashcardPhase, FlashcardSession, JudgeOutcome};
pub use workflow::FlashcardService;
