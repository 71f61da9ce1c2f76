#![forbid(unsafe_code)]

pub mod api;
pub mod app_services;
pub mod config;
pub mod error;
pub mod fallback;
pub mod flashcards;
pub mod outcome;
pub mod plan_service;
pub mod quiz;
pub mod tutor;

pub use study_core::Clock;

pub use api::{
    FlashcardRequest, HttpStudyApi, QuizRequest, RecordedCall, ScriptedBackend, StudyBackend,
};
pub use app_services::AppServices;
pub use config::StudyApiConfig;
pub use error::{FlashcardError, PlanError, QuizError, ServiceError};
pub use flashcards::{FlashcardPhase, FlashcardService, FlashcardSession, JudgeOutcome};
pub use outcome::LoadOutcome;
pub use plan_service::StudyPlanService;
pub use quiz::{AnswerOutcome, QuizPhase, QuizService, QuizSession, ReviewRow};
pub use tutor::{ChatMessage, ChatRole, TutorChat, TutorService};
