use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::model::ids::PlanId;
use crate::model::profile::Profile;

/// A generated study plan together with the profile it was generated for.
///
/// Records are immutable; the store only ever prepends new ones.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudyPlanRecord {
    id: PlanId,
    profile: Profile,
    plan_text: String,
    created_at: DateTime<Utc>,
}

impl StudyPlanRecord {
    #[must_use]
    pub fn new(
        id: PlanId,
        profile: Profile,
        plan_text: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            profile,
            plan_text: plan_text.into(),
            created_at,
        }
    }

    #[must_use]
    pub fn id(&self) -> PlanId {
        self.id
    }

    #[must_use]
    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    #[must_use]
    pub fn plan_text(&self) -> &str {
        &self.plan_text
    }

    #[must_use]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
