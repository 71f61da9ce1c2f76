use dioxus::prelude::*;
use dioxus_router::use_navigator;
use study_core::model::ProfileDraft;
use study_core::{ScreenData, ScreenDescriptor, derive_screen};

use crate::context::{use_payload_slot, use_store};
use crate::routes::Route;
use crate::views::{
    DashboardView, FlashcardsView, LandingView, NotFoundView, NotebookView, QuizView, SetupView,
    TutorView,
};
use crate::vm::map_dashboard;

/// Projects the current route and store to a screen and renders it.
///
/// A pending navigation payload is taken once, when the screen mounts. A redirect (the
/// dashboard without a plan) renders the target screen at once and then fixes the URL.
#[component]
pub fn ScreenHost(route: Route) -> Element {
    let store = use_store();
    let mut slot = use_payload_slot();
    let navigator = use_navigator();
    let target = route.to_core();

    let payload = use_hook({
        let screen = target.screen();
        move || slot.write().take_for(screen)
    });

    let requested = target.clone();
    use_effect(move || {
        let store = store.read();
        let descriptor = derive_screen(&store, &requested, None);
        if descriptor.is_redirect() {
            if let Some(to) = Route::for_screen(descriptor.screen) {
                navigator.replace(to);
            }
        }
    });

    let store = store.read();
    let descriptor = derive_screen(&store, &target, payload);
    render_screen(&descriptor)
}

fn render_screen(descriptor: &ScreenDescriptor<'_>) -> Element {
    match &descriptor.data {
        ScreenData::Landing => rsx! { LandingView {} },
        ScreenData::Setup { profile } => {
            let initial = profile.map(ProfileDraft::from).unwrap_or_default();
            let redirected = descriptor.is_redirect();
            rsx! { SetupView { initial, redirected } }
        }
        ScreenData::Dashboard { .. } => match map_dashboard(&descriptor.data) {
            Some(vm) => rsx! { DashboardView { vm } },
            None => rsx! {},
        },
        ScreenData::Tutor { saved_count } => rsx! { TutorView { saved_count: *saved_count } },
        ScreenData::Quiz { source, preloaded } => rsx! {
            QuizView { source: source.clone(), preloaded: preloaded.clone() }
        },
        ScreenData::Flashcards { source, preloaded } => rsx! {
            FlashcardsView { source: source.clone(), preloaded: preloaded.clone() }
        },
        ScreenData::Notebook { saved_content } => rsx! {
            NotebookView { saved: saved_content.to_vec() }
        },
        ScreenData::NotFound { path } => rsx! { NotFoundView { path: path.clone() } },
    }
}
