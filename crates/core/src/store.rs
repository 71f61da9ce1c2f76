use crate::error::StoreError;
use crate::model::{PlanId, Profile, StudyPlanRecord};
use crate::progress::{Progress, ProgressAction};
use crate::time::Clock;

/// Single source of truth for one user session.
///
/// Owns the profile, the plan shown on the dashboard, the plan history (newest first), the
/// saved-content notebook and the progress score. Built once per session and handed to
/// screens by reference; nothing else holds a mutable copy.
#[derive(Debug, Clone, Default)]
pub struct SessionStore {
    clock: Clock,
    profile: Option<Profile>,
    current_plan: String,
    history: Vec<StudyPlanRecord>,
    saved_content: Vec<String>,
    progress: Progress,
}

impl SessionStore {
    #[must_use]
    pub fn new(clock: Clock) -> Self {
        Self {
            clock,
            ..Self::default()
        }
    }

    // ─── Reads ─────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn profile(&self) -> Option<&Profile> {
        self.profile.as_ref()
    }

    #[must_use]
    pub fn current_plan(&self) -> &str {
        &self.current_plan
    }

    #[must_use]
    pub fn has_current_plan(&self) -> bool {
        !self.current_plan.is_empty()
    }

    /// Plan records, newest first.
    #[must_use]
    pub fn history(&self) -> &[StudyPlanRecord] {
        &self.history
    }

    #[must_use]
    pub fn find_record(&self, id: PlanId) -> Option<&StudyPlanRecord> {
        self.history.iter().find(|record| record.id() == id)
    }

    /// Saved snippets in first-insertion order.
    #[must_use]
    pub fn saved_content(&self) -> &[String] {
        &self.saved_content
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        self.progress
    }

    // ─── Mutations ─────────────────────────────────────────────────────────────

    /// Replaces the profile. `None` clears it. Validation happens before this call.
    pub fn set_profile(&mut self, profile: Option<Profile>) {
        self.profile = profile;
    }

    pub fn set_current_plan(&mut self, text: impl Into<String>) {
        self.current_plan = text.into();
    }

    /// Prepends a new record to history. The current plan is left as is.
    pub fn add_study_plan_record(
        &mut self,
        profile: Profile,
        plan_text: impl Into<String>,
    ) -> &StudyPlanRecord {
        let record = StudyPlanRecord::new(PlanId::generate(), profile, plan_text, self.clock.now());
        self.history.insert(0, record);
        &self.history[0]
    }

    /// Makes a history record the current plan. Returns `false` for an unknown id.
    pub fn select_history_plan(&mut self, id: PlanId) -> bool {
        let Some(text) = self.find_record(id).map(|record| record.plan_text().to_string()) else {
            return false;
        };
        self.set_current_plan(text);
        true
    }

    /// Appends `content` unless an identical entry exists. A successful append counts as a
    /// tutor save for progress; a duplicate changes nothing.
    ///
    /// Returns whether the content was added.
    pub fn add_to_saved_content(&mut self, content: impl Into<String>) -> bool {
        let content = content.into();
        if self.saved_content.contains(&content) {
            return false;
        }
        self.saved_content.push(content);
        self.increase_progress(ProgressAction::TutorSave);
        true
    }

    /// Empties the notebook. Progress and history are unaffected.
    pub fn clear_saved_content(&mut self) {
        self.saved_content.clear();
    }

    pub fn increase_progress(&mut self, action: ProgressAction) -> Progress {
        self.progress = self.progress.advanced(action);
        self.progress
    }

    /// Same as [`SessionStore::increase_progress`] for an action kind given by name.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::InvalidAction` for a name outside the increment table; the
    /// score is left untouched.
    pub fn increase_progress_by_name(&mut self, kind: &str) -> Result<Progress, StoreError> {
        let action: ProgressAction = kind.parse()?;
        Ok(self.increase_progress(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StudyLevel;
    use crate::time::{fixed_clock, fixed_now};

    fn physics() -> Profile {
        Profile::new("Physics", "Exam", StudyLevel::Beginner, 2).unwrap()
    }

    #[test]
    fn fresh_store_is_empty() {
        let store = SessionStore::new(fixed_clock());
        assert!(store.profile().is_none());
        assert!(!store.has_current_plan());
        assert!(store.history().is_empty());
        assert!(store.saved_content().is_empty());
        assert_eq!(store.progress().value(), 0);
    }

    #[test]
    fn saved_content_is_deduplicated_in_first_insertion_order() {
        let mut store = SessionStore::new(fixed_clock());
        for item in ["B", "A", "B", "C", "A", "A"] {
            store.add_to_saved_content(item);
        }
        assert_eq!(store.saved_content(), ["B", "A", "C"]);
        assert_eq!(store.progress().value(), 6);
    }

    #[test]
    fn duplicate_save_does_not_count_for_progress() {
        let mut store = SessionStore::new(fixed_clock());
        assert!(store.add_to_saved_content("A"));
        assert!(!store.add_to_saved_content("A"));
        assert!(store.add_to_saved_content("B"));
        assert_eq!(store.saved_content(), ["A", "B"]);
        assert_eq!(store.progress().value(), 4);
    }

    #[test]
    fn clearing_saved_content_keeps_progress_and_history() {
        let mut store = SessionStore::new(fixed_clock());
        store.add_study_plan_record(physics(), "plan");
        store.add_to_saved_content("A");
        store.clear_saved_content();
        assert!(store.saved_content().is_empty());
        assert_eq!(store.progress().value(), 2);
        assert_eq!(store.history().len(), 1);
    }

    #[test]
    fn progress_never_exceeds_max_and_never_decreases() {
        let mut store = SessionStore::new(fixed_clock());
        let mut last = store.progress();
        let actions = ProgressAction::ALL.iter().copied().cycle().take(60);
        for action in actions {
            let now = store.increase_progress(action);
            assert!(now >= last);
            assert!(now.value() <= 100);
            last = now;
        }
        assert_eq!(store.progress().value(), 100);
        store.increase_progress(ProgressAction::QuizComplete);
        assert_eq!(store.progress().value(), 100);
    }

    #[test]
    fn unknown_action_name_is_rejected_without_side_effects() {
        let mut store = SessionStore::new(fixed_clock());
        let err = store.increase_progress_by_name("DAILY_LOGIN").unwrap_err();
        assert_eq!(err, StoreError::InvalidAction("DAILY_LOGIN".into()));
        assert_eq!(store.progress().value(), 0);
        assert_eq!(
            store.increase_progress_by_name("QUIZ_COMPLETE").unwrap().value(),
            10
        );
    }

    #[test]
    fn new_records_are_prepended_and_do_not_touch_current_plan() {
        let mut store = SessionStore::new(fixed_clock());
        let first = store.add_study_plan_record(physics(), "first").id();
        store.add_study_plan_record(physics(), "second");

        assert_eq!(store.history().len(), 2);
        assert_eq!(store.history()[0].plan_text(), "second");
        assert_eq!(store.history()[1].id(), first);
        assert_eq!(store.history()[0].created_at(), fixed_now());
        assert!(!store.has_current_plan());
    }

    #[test]
    fn selecting_older_plan_keeps_history_order() {
        let mut store = SessionStore::new(fixed_clock());
        let older = store.add_study_plan_record(physics(), "older").id();
        store.add_study_plan_record(physics(), "newer");
        store.set_current_plan("newer");
        assert_eq!(store.current_plan(), store.history()[0].plan_text());

        let before: Vec<_> = store.history().iter().map(StudyPlanRecord::id).collect();
        assert!(store.select_history_plan(older));
        let after: Vec<_> = store.history().iter().map(StudyPlanRecord::id).collect();

        assert_eq!(store.current_plan(), "older");
        assert_eq!(before, after);
        assert!(!store.select_history_plan(PlanId::generate()));
    }

    #[test]
    fn setup_flow_satisfies_dashboard_precondition() {
        let mut store = SessionStore::new(fixed_clock());
        let plan = "## Week 1\n...";
        store.set_profile(Some(physics()));
        store.add_study_plan_record(physics(), plan);
        store.set_current_plan(plan);

        assert!(store.has_current_plan());
        assert_eq!(store.history().len(), 1);
        assert_eq!(store.profile().map(Profile::subject), Some("Physics"));

        store.set_profile(None);
        assert!(store.profile().is_none());
    }
}
