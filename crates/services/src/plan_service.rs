use std::sync::Arc;

use study_core::SessionStore;
use study_core::model::{PlanId, Profile, ProfileDraft};

use crate::api::StudyBackend;
use crate::error::{PlanError, ServiceError};

/// Turns a setup form into a study plan and records it in the session.
#[derive(Clone)]
pub struct StudyPlanService {
    backend: Arc<dyn StudyBackend>,
}

impl StudyPlanService {
    #[must_use]
    pub fn new(backend: Arc<dyn StudyBackend>) -> Self {
        Self { backend }
    }

    /// Calls the backend for `profile`. A blank plan counts as a failure.
    ///
    /// # Errors
    ///
    /// Returns `ServiceError` when the call fails or the plan text is empty.
    pub async fn request_plan(&self, profile: &Profile) -> Result<String, ServiceError> {
        tracing::info!(subject = profile.subject(), level = %profile.level(), "requesting study plan");
        let plan = self.backend.generate_study_plan(profile).await?;
        if plan.trim().is_empty() {
            return Err(ServiceError::EmptyResponse);
        }
        Ok(plan)
    }

    /// Validates the form, then requests the plan. Nothing is sent for an invalid form.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Validation` for a bad form and `PlanError::Service` for backend
    /// failures.
    pub async fn generate(&self, draft: &ProfileDraft) -> Result<(Profile, String), PlanError> {
        let profile = draft.validate()?;
        let plan = self.request_plan(&profile).await?;
        Ok((profile, plan))
    }

    /// Records a generated plan: profile, current plan, and a new history entry.
    pub fn apply(store: &mut SessionStore, profile: Profile, plan: String) -> PlanId {
        store.set_profile(Some(profile.clone()));
        store.set_current_plan(plan.as_str());
        store.add_study_plan_record(profile, plan).id()
    }

    /// `generate` followed by `apply`. The store is untouched on failure.
    ///
    /// # Errors
    ///
    /// Same as [`StudyPlanService::generate`].
    pub async fn generate_into(
        &self,
        store: &mut SessionStore,
        draft: &ProfileDraft,
    ) -> Result<PlanId, PlanError> {
        let (profile, plan) = self.generate(draft).await?;
        Ok(Self::apply(store, profile, plan))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use study_core::model::StudyLevel;
    use study_core::time::fixed_clock;

    #[test]
    fn apply_sets_profile_plan_and_history() {
        let mut store = SessionStore::new(fixed_clock());
        let profile = Profile::new("Physics", "Pass exam", StudyLevel::Beginner, 2).unwrap();

        let id = StudyPlanService::apply(&mut store, profile.clone(), "Week 1: kinematics".into());

        assert_eq!(store.profile(), Some(&profile));
        assert_eq!(store.current_plan(), "Week 1: kinematics");
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.history()[0].id(), id);
    }
}
