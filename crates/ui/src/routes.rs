use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable, use_route};
use study_core::{Screen, reachable};

use crate::context::use_store;
use crate::views::ScreenHost;

#[derive(Clone, Debug, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", LandingPage)] Landing {},
        #[route("/setup", SetupPage)] Setup {},
        #[route("/dashboard", DashboardPage)] Dashboard {},
        #[route("/tutor", TutorPage)] Tutor {},
        #[route("/quiz", QuizPage)] Quiz {},
        #[route("/flashcards", FlashcardsPage)] Flashcards {},
        #[route("/notebook", NotebookPage)] Notebook {},
    #[end_layout]
    #[route("/:..segments", NotFoundPage)] NotFound { segments: Vec<String> },
}

impl Route {
    /// The toolkit-independent route the screen projection works with.
    #[must_use]
    pub fn to_core(&self) -> study_core::Route {
        match self {
            Self::Landing {} => study_core::Route::Landing,
            Self::Setup {} => study_core::Route::Setup,
            Self::Dashboard {} => study_core::Route::Dashboard,
            Self::Tutor {} => study_core::Route::Tutor,
            Self::Quiz {} => study_core::Route::Quiz,
            Self::Flashcards {} => study_core::Route::Flashcards,
            Self::Notebook {} => study_core::Route::Notebook,
            Self::NotFound { segments } => {
                study_core::Route::NotFound(format!("/{}", segments.join("/")))
            }
        }
    }

    #[must_use]
    pub fn for_screen(screen: Screen) -> Option<Self> {
        match screen {
            Screen::Landing => Some(Self::Landing {}),
            Screen::Setup => Some(Self::Setup {}),
            Screen::Dashboard => Some(Self::Dashboard {}),
            Screen::Tutor => Some(Self::Tutor {}),
            Screen::Quiz => Some(Self::Quiz {}),
            Screen::Flashcards => Some(Self::Flashcards {}),
            Screen::Notebook => Some(Self::Notebook {}),
            Screen::NotFound => None,
        }
    }
}

#[must_use]
pub fn screen_label(screen: Screen) -> &'static str {
    match screen {
        Screen::Landing => "Home",
        Screen::Setup => "New Plan",
        Screen::Dashboard => "Dashboard",
        Screen::Tutor => "AI Tutor",
        Screen::Quiz => "Quiz",
        Screen::Flashcards => "Flashcards",
        Screen::Notebook => "Notebook",
        Screen::NotFound => "Not Found",
    }
}

#[component]
fn Layout() -> Element {
    let route = use_route::<Route>();
    let store = use_store();
    let progress = store.read().progress();
    let screen = route.to_core().screen();

    rsx! {
        div { class: "app",
            header { class: "topbar",
                h1 { "Study Companion" }
                nav {
                    for target in reachable(screen).iter().copied() {
                        if let Some(link) = Route::for_screen(target) {
                            Link { class: "nav-link", to: link, "{screen_label(target)}" }
                        }
                    }
                }
                span { class: "progress-badge", "Progress: {progress}" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn LandingPage() -> Element {
    rsx! { ScreenHost { route: Route::Landing {} } }
}

#[component]
fn SetupPage() -> Element {
    rsx! { ScreenHost { route: Route::Setup {} } }
}

#[component]
fn DashboardPage() -> Element {
    rsx! { ScreenHost { route: Route::Dashboard {} } }
}

#[component]
fn TutorPage() -> Element {
    rsx! { ScreenHost { route: Route::Tutor {} } }
}

#[component]
fn QuizPage() -> Element {
    rsx! { ScreenHost { route: Route::Quiz {} } }
}

#[component]
fn FlashcardsPage() -> Element {
    rsx! { ScreenHost { route: Route::Flashcards {} } }
}

#[component]
fn NotebookPage() -> Element {
    rsx! { ScreenHost { route: Route::Notebook {} } }
}

#[component]
fn NotFoundPage(segments: Vec<String>) -> Element {
    rsx! { ScreenHost { route: Route::NotFound { segments } } }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_screen_with_a_route_round_trips() {
        for screen in [
            Screen::Landing,
            Screen::Setup,
            Screen::Dashboard,
            Screen::Tutor,
            Screen::Quiz,
            Screen::Flashcards,
            Screen::Notebook,
        ] {
            let route = Route::for_screen(screen).unwrap();
            assert_eq!(route.to_core().screen(), screen);
        }
        assert!(Route::for_screen(Screen::NotFound).is_none());
    }

    #[test]
    fn catch_all_keeps_the_requested_path() {
        let route = Route::NotFound {
            segments: vec!["missing".into(), "page".into()],
        };
        assert_eq!(
            route.to_core(),
            study_core::Route::NotFound("/missing/page".into())
        );
    }
}
