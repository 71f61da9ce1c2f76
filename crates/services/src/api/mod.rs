mod backend;
mod http;
mod scripted;
mod wire;

pub use backend::{FlashcardRequest, QuizRequest, StudyBackend};
pub use http::HttpStudyApi;
pub use scripted::{RecordedCall, ScriptedBackend};
