mod chat;
mod workflow;

pub use chat::{ACTION_THRESHOLD_CHARS, ChatMessage, ChatRole, GREETING, TutorChat};
pub use workflow::TutorService;
