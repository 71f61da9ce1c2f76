use study_core::ScreenData;
use study_core::model::{PlanId, Profile, StudyPlanRecord};

use crate::vm::markdown_vm::{markdown_to_html, preview};
use crate::vm::time_fmt::format_date;

const PLAN_PREVIEW_CHARS: usize = 200;
const SNIPPET_PREVIEW_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileVm {
    pub subject: String,
    pub goal: String,
    pub level: String,
    pub daily_time: String,
}

impl From<&Profile> for ProfileVm {
    fn from(profile: &Profile) -> Self {
        Self {
            subject: profile.subject().to_string(),
            goal: profile.goal().to_string(),
            level: profile.level().to_string(),
            daily_time: format!("{}h", profile.time_per_day()),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryItemVm {
    pub id: PlanId,
    pub label: String,
    pub profile: ProfileVm,
    pub created: String,
    pub preview: String,
    pub plan_html: String,
    pub is_current: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SavedSnippetVm {
    pub content: String,
    pub preview: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DashboardVm {
    pub plan_html: String,
    pub profile: Option<ProfileVm>,
    pub progress: u8,
    pub progress_label: String,
    pub history: Vec<HistoryItemVm>,
    pub saved: Vec<SavedSnippetVm>,
}

/// `None` for anything but dashboard data.
#[must_use]
pub fn map_dashboard(data: &ScreenData<'_>) -> Option<DashboardVm> {
    let ScreenData::Dashboard {
        plan,
        profile,
        history,
        saved_content,
        progress,
    } = data
    else {
        return None;
    };

    Some(DashboardVm {
        plan_html: markdown_to_html(plan),
        profile: profile.map(ProfileVm::from),
        progress: progress.value(),
        progress_label: progress.to_string(),
        history: map_history(history, plan),
        saved: saved_content
            .iter()
            .map(|content| SavedSnippetVm {
                content: content.clone(),
                preview: preview(content, SNIPPET_PREVIEW_CHARS),
            })
            .collect(),
    })
}

/// History is newest first; the label numbers plans in creation order.
#[must_use]
pub fn map_history(history: &[StudyPlanRecord], current_plan: &str) -> Vec<HistoryItemVm> {
    let total = history.len();
    history
        .iter()
        .enumerate()
        .map(|(index, record)| HistoryItemVm {
            id: record.id(),
            label: format!("Plan #{} - {}", total - index, record.profile().subject()),
            profile: ProfileVm::from(record.profile()),
            created: format_date(record.created_at()),
            preview: preview(record.plan_text(), PLAN_PREVIEW_CHARS),
            plan_html: markdown_to_html(record.plan_text()),
            is_current: record.plan_text() == current_plan,
        })
        .collect()
}
