use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use services::{
    AppServices, Clock, FlashcardService, QuizService, ScriptedBackend, StudyPlanService,
    TutorService,
};
use study_core::time::fixed_now;
use study_core::{NavPayload, PayloadSlot, Screen, SessionStore};

use crate::context::{UiApp, build_app_context};
use crate::routes::Route;
use crate::views::ScreenHost;

#[derive(Clone)]
struct TestApp {
    services: AppServices,
}

impl UiApp for TestApp {
    fn clock(&self) -> Clock {
        self.services.clock()
    }

    fn plans(&self) -> Arc<StudyPlanService> {
        self.services.plans()
    }

    fn tutor(&self) -> Arc<TutorService> {
        self.services.tutor()
    }

    fn quizzes(&self) -> Arc<QuizService> {
        self.services.quizzes()
    }

    fn flashcards(&self) -> Arc<FlashcardService> {
        self.services.flashcards()
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    route: Route,
    store: SessionStore,
    slot: PayloadSlot,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| Signal::new(props.store.clone()));
    use_context_provider(|| Signal::new(props.slot.clone()));
    use_context_provider(|| props.route.clone());
    rsx! { Router::<TestRoute> {} }
}

// Every URL lands on the screen under test, so redirects do not unmount it.
#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
    #[route("/:..segments")]
    Elsewhere { segments: Vec<String> },
}

#[component]
fn Root() -> Element {
    let route = use_context::<Route>();
    rsx! { ScreenHost { route } }
}

#[component]
fn Elsewhere(segments: Vec<String>) -> Element {
    let _ = segments;
    rsx! { Root {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub backend: ScriptedBackend,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_store() -> SessionStore {
    SessionStore::new(Clock::fixed(fixed_now()))
}

pub struct HarnessBuilder {
    route: Route,
    store: SessionStore,
    slot: PayloadSlot,
    backend: ScriptedBackend,
}

impl HarnessBuilder {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            store: test_store(),
            slot: PayloadSlot::new(),
            backend: ScriptedBackend::new(),
        }
    }

    pub fn store(mut self, store: SessionStore) -> Self {
        self.store = store;
        self
    }

    pub fn payload(mut self, screen: Screen, payload: NavPayload) -> Self {
        self.slot.send(screen, payload);
        self
    }

    pub fn backend(mut self, backend: ScriptedBackend) -> Self {
        self.backend = backend;
        self
    }

    pub fn build(self) -> ViewHarness {
        let services =
            AppServices::with_backend(Arc::new(self.backend.clone()), Clock::fixed(fixed_now()));
        let app = Arc::new(TestApp { services });
        let dom = VirtualDom::new_with_props(
            ViewRouterHarness,
            ViewHarnessProps {
                app,
                route: self.route,
                store: self.store,
                slot: self.slot,
            },
        );
        ViewHarness {
            dom,
            backend: self.backend,
        }
    }
}
