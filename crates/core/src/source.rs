use crate::model::StudyLevel;
use crate::store::SessionStore;

const DEFAULT_SUBJECT: &str = "General";
const CONTENT_SEPARATOR: &str = "\n\n";

/// What quiz and flashcard generation is based on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationSource {
    /// Notebook material, either one chosen snippet or every saved entry.
    Content(String),
    /// The learner's profile, or generic defaults when no profile exists yet.
    Profile { subject: String, level: StudyLevel },
}

impl GenerationSource {
    /// Picks the source for a generation request: an explicitly chosen snippet first, then
    /// all saved content joined by blank lines, then the profile.
    #[must_use]
    pub fn resolve(store: &SessionStore, chosen: Option<String>) -> Self {
        if let Some(content) = chosen.filter(|c| !c.trim().is_empty()) {
            return Self::Content(content);
        }
        if !store.saved_content().is_empty() {
            return Self::Content(store.saved_content().join(CONTENT_SEPARATOR));
        }
        match store.profile() {
            Some(profile) => Self::Profile {
                subject: profile.subject().to_string(),
                level: profile.level(),
            },
            None => Self::Profile {
                subject: DEFAULT_SUBJECT.to_string(),
                level: StudyLevel::Beginner,
            },
        }
    }

    #[must_use]
    pub fn is_content(&self) -> bool {
        matches!(self, Self::Content(_))
    }
}
