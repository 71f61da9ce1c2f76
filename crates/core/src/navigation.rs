//! Screen projection: which screen a route shows for a given store.
//!
//! `derive_screen` is pure. Rendering layers call it on every change and draw whatever
//! descriptor comes back; nothing here touches a UI toolkit.

use std::time::Duration;

use crate::model::{Flashcard, Profile, QuizQuestion, StudyPlanRecord};
use crate::progress::Progress;
use crate::source::GenerationSource;
use crate::store::SessionStore;

/// Delay between the plan-ready confirmation and the automatic move to the dashboard.
pub const SUCCESS_REDIRECT_DELAY: Duration = Duration::from_millis(3_500);

//
// ─── ROUTES & SCREENS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Setup,
    Dashboard,
    Tutor,
    Quiz,
    Flashcards,
    Notebook,
    NotFound(String),
}

impl Route {
    /// Maps a path to a route. Unknown paths become `NotFound`.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let trimmed = path.split(['?', '#']).next().unwrap_or_default();
        let normalized = match trimmed.trim_end_matches('/') {
            "" => "/",
            other => other,
        };
        match normalized {
            "/" => Self::Landing,
            "/setup" => Self::Setup,
            "/dashboard" => Self::Dashboard,
            "/tutor" => Self::Tutor,
            "/quiz" => Self::Quiz,
            "/flashcards" => Self::Flashcards,
            "/notebook" => Self::Notebook,
            _ => Self::NotFound(path.to_string()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &str {
        match self {
            Self::Landing => "/",
            Self::Setup => "/setup",
            Self::Dashboard => "/dashboard",
            Self::Tutor => "/tutor",
            Self::Quiz => "/quiz",
            Self::Flashcards => "/flashcards",
            Self::Notebook => "/notebook",
            Self::NotFound(path) => path,
        }
    }

    #[must_use]
    pub fn screen(&self) -> Screen {
        match self {
            Self::Landing => Screen::Landing,
            Self::Setup => Screen::Setup,
            Self::Dashboard => Screen::Dashboard,
            Self::Tutor => Screen::Tutor,
            Self::Quiz => Screen::Quiz,
            Self::Flashcards => Screen::Flashcards,
            Self::Notebook => Screen::Notebook,
            Self::NotFound(_) => Screen::NotFound,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Screen {
    Landing,
    Setup,
    Dashboard,
    Tutor,
    Quiz,
    Flashcards,
    Notebook,
    NotFound,
}

impl Screen {
    /// Canonical route for the screen. `NotFound` has none.
    #[must_use]
    pub fn route(self) -> Option<Route> {
        match self {
            Self::Landing => Some(Route::Landing),
            Self::Setup => Some(Route::Setup),
            Self::Dashboard => Some(Route::Dashboard),
            Self::Tutor => Some(Route::Tutor),
            Self::Quiz => Some(Route::Quiz),
            Self::Flashcards => Some(Route::Flashcards),
            Self::Notebook => Some(Route::Notebook),
            Self::NotFound => None,
        }
    }
}

/// User-initiated transitions available from `screen`.
#[must_use]
pub fn reachable(screen: Screen) -> &'static [Screen] {
    match screen {
        Screen::Landing => &[Screen::Setup],
        Screen::Setup => &[Screen::Dashboard],
        Screen::Dashboard => &[
            Screen::Setup,
            Screen::Tutor,
            Screen::Quiz,
            Screen::Flashcards,
            Screen::Notebook,
        ],
        Screen::Tutor => &[
            Screen::Dashboard,
            Screen::Notebook,
            Screen::Quiz,
            Screen::Flashcards,
        ],
        Screen::Quiz | Screen::Flashcards => &[Screen::Dashboard],
        Screen::Notebook => &[Screen::Dashboard, Screen::Quiz, Screen::Flashcards],
        Screen::NotFound => &[],
    }
}

//
// ─── TRANSIENT PAYLOADS ────────────────────────────────────────────────────────
//

/// One-shot data handed to the destination of a navigation, outside the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavPayload {
    QuizQuestions(Vec<QuizQuestion>),
    Flashcards(Vec<Flashcard>),
    /// A single notebook snippet to generate from instead of the whole notebook.
    SourceContent(String),
}

impl NavPayload {
    #[must_use]
    pub fn accepted_by(&self, screen: Screen) -> bool {
        match self {
            Self::QuizQuestions(_) => screen == Screen::Quiz,
            Self::Flashcards(_) => screen == Screen::Flashcards,
            Self::SourceContent(_) => matches!(screen, Screen::Quiz | Screen::Flashcards),
        }
    }
}

/// Holds at most one pending payload between a navigation and its destination.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PayloadSlot {
    pending: Option<(Screen, NavPayload)>,
}

impl PayloadSlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches `payload` to the next arrival at `target`. Replaces anything pending.
    pub fn send(&mut self, target: Screen, payload: NavPayload) {
        self.pending = Some((target, payload));
    }

    /// Consumes the pending payload. It is returned only when addressed to `screen` and
    /// of a kind that screen accepts; otherwise it is discarded.
    pub fn take_for(&mut self, screen: Screen) -> Option<NavPayload> {
        let (target, payload) = self.pending.take()?;
        (target == screen && payload.accepted_by(screen)).then_some(payload)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pending.is_none()
    }
}

//
// ─── PROJECTION ────────────────────────────────────────────────────────────────
//

/// Read-only data a screen may use.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenData<'a> {
    Landing,
    Setup {
        profile: Option<&'a Profile>,
    },
    Dashboard {
        plan: &'a str,
        profile: Option<&'a Profile>,
        history: &'a [StudyPlanRecord],
        saved_content: &'a [String],
        progress: Progress,
    },
    Tutor {
        saved_count: usize,
    },
    Quiz {
        source: GenerationSource,
        preloaded: Option<Vec<QuizQuestion>>,
    },
    Flashcards {
        source: GenerationSource,
        preloaded: Option<Vec<Flashcard>>,
    },
    Notebook {
        saved_content: &'a [String],
    },
    NotFound {
        path: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScreenDescriptor<'a> {
    pub screen: Screen,
    /// Set when the requested screen's precondition failed and another was shown instead.
    pub redirected_from: Option<Screen>,
    pub data: ScreenData<'a>,
}

impl ScreenDescriptor<'_> {
    #[must_use]
    pub fn is_redirect(&self) -> bool {
        self.redirected_from.is_some()
    }
}

/// Projects `(route, store, payload)` to the screen to display.
///
/// The dashboard requires a current plan and redirects to setup otherwise. A payload the
/// destination does not accept is dropped.
#[must_use]
pub fn derive_screen<'a>(
    store: &'a SessionStore,
    route: &Route,
    payload: Option<NavPayload>,
) -> ScreenDescriptor<'a> {
    let requested = route.screen();
    let payload = payload.filter(|p| p.accepted_by(requested));

    if requested == Screen::Dashboard && !store.has_current_plan() {
        return ScreenDescriptor {
            screen: Screen::Setup,
            redirected_from: Some(Screen::Dashboard),
            data: ScreenData::Setup {
                profile: store.profile(),
            },
        };
    }

    let data = match route {
        Route::Landing => ScreenData::Landing,
        Route::Setup => ScreenData::Setup {
            profile: store.profile(),
        },
        Route::Dashboard => ScreenData::Dashboard {
            plan: store.current_plan(),
            profile: store.profile(),
            history: store.history(),
            saved_content: store.saved_content(),
            progress: store.progress(),
        },
        Route::Tutor => ScreenData::Tutor {
            saved_count: store.saved_content().len(),
        },
        Route::Quiz => {
            let (chosen, preloaded) = match payload {
                Some(NavPayload::QuizQuestions(questions)) => (None, Some(questions)),
                Some(NavPayload::SourceContent(content)) => (Some(content), None),
                _ => (None, None),
            };
            ScreenData::Quiz {
                source: GenerationSource::resolve(store, chosen),
                preloaded,
            }
        }
        Route::Flashcards => {
            let (chosen, preloaded) = match payload {
                Some(NavPayload::Flashcards(cards)) => (None, Some(cards)),
                Some(NavPayload::SourceContent(content)) => (Some(content), None),
                _ => (None, None),
            };
            ScreenData::Flashcards {
                source: GenerationSource::resolve(store, chosen),
                preloaded,
            }
        }
        Route::Notebook => ScreenData::Notebook {
            saved_content: store.saved_content(),
        },
        Route::NotFound(path) => ScreenData::NotFound { path: path.clone() },
    };

    ScreenDescriptor {
        screen: requested,
        redirected_from: None,
        data,
    }
}
