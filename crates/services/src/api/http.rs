use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use study_core::model::{Flashcard, Profile, QuizQuestion};

use super::backend::{FlashcardRequest, QuizRequest, StudyBackend};
use super::wire::{
    ErrorReply, FlashcardBody, FlashcardReply, QuizBody, QuizReply, STUDY_PLAN_PATH,
    StudyPlanBody, StudyPlanReply, TUTOR_PATH, TutorBody, TutorReply,
};
use crate::config::StudyApiConfig;
use crate::error::ServiceError;

/// `StudyBackend` over HTTP/JSON.
#[derive(Clone)]
pub struct HttpStudyApi {
    client: Client,
    config: StudyApiConfig,
}

impl HttpStudyApi {
    /// # Errors
    ///
    /// Returns `ServiceError::Transport` if the HTTP client cannot be built.
    pub fn new(config: StudyApiConfig) -> Result<Self, ServiceError> {
        let client = Client::builder().timeout(config.timeout).build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &StudyApiConfig {
        &self.config
    }

    async fn post<B, R>(&self, path: &str, body: &B) -> Result<R, ServiceError>
    where
        B: Serialize + Sync + ?Sized,
        R: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "posting to study backend");

        let response = self.client.post(&url).json(body).send().await?;
        let status = response.status();
        if !status.is_success() {
            let detail = response
                .json::<ErrorReply>()
                .await
                .ok()
                .and_then(ErrorReply::into_detail);
            tracing::warn!(%status, path, "study backend request failed");
            return Err(ServiceError::Status { status, detail });
        }

        Ok(response.json::<R>().await?)
    }
}

#[async_trait]
impl StudyBackend for HttpStudyApi {
    async fn generate_study_plan(&self, profile: &Profile) -> Result<String, ServiceError> {
        let body = StudyPlanBody::from_profile(profile);
        self.post::<_, StudyPlanReply>(STUDY_PLAN_PATH, &body)
            .await?
            .into_plan()
    }

    async fn ask_tutor(&self, question: &str) -> Result<String, ServiceError> {
        let body = TutorBody { question };
        self.post::<_, TutorReply>(TUTOR_PATH, &body)
            .await?
            .into_answer()
    }

    async fn generate_quiz(
        &self,
        request: &QuizRequest,
    ) -> Result<Vec<QuizQuestion>, ServiceError> {
        let (path, body) = QuizBody::route(request);
        self.post::<_, QuizReply>(path, &body)
            .await?
            .into_questions()
    }

    async fn generate_flashcards(
        &self,
        request: &FlashcardRequest,
    ) -> Result<Vec<Flashcard>, ServiceError> {
        let (path, body) = FlashcardBody::route(request);
        self.post::<_, FlashcardReply>(path, &body)
            .await?
            .into_cards()
    }
}
