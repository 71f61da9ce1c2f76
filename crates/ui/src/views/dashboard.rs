use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use study_core::model::PlanId;
use study_core::{NavPayload, Screen};

use crate::context::{use_payload_slot, use_store};
use crate::routes::Route;
use crate::vm::{DashboardVm, HistoryItemVm, SavedSnippetVm};

#[component]
pub fn DashboardView(vm: DashboardVm) -> Element {
    let mut store = use_store();
    let mut show_history = use_signal(|| false);
    let history_count = vm.history.len();

    let on_select = move |id: PlanId| {
        store.write().select_history_plan(id);
        show_history.set(false);
    };

    rsx! {
        div { class: "page page--dashboard",
            div { class: "dashboard-header",
                h1 { "Your Study Dashboard" }
                if !vm.history.is_empty() {
                    button {
                        class: "button",
                        onclick: move |_| show_history.set(true),
                        "History ({history_count})"
                    }
                }
                Link { class: "button button--primary", to: Route::Setup {}, "New Plan" }
            }

            if let Some(profile) = vm.profile.clone() {
                section { class: "card profile",
                    h3 { "{profile.subject}" }
                    p { "Goal: {profile.goal}" }
                    p { "Level: {profile.level}" }
                    p { "Daily Time: {profile.daily_time}" }
                }
            }

            section { class: "card progress",
                h3 { "Overall Progress" }
                div { class: "progress-track",
                    div { class: "progress-fill", style: "width: {vm.progress}%" }
                }
                span { "{vm.progress_label}" }
            }

            section { class: "card plan",
                h2 { "Study Plan" }
                div { class: "plan-body", dangerous_inner_html: "{vm.plan_html}" }
            }

            if !vm.saved.is_empty() {
                SavedContent { snippets: vm.saved.clone() }
            }

            nav { class: "quick-actions",
                Link { class: "action", to: Route::Tutor {}, "AI Tutor" }
                Link { class: "action", to: Route::Quiz {}, "Take Quiz" }
                Link { class: "action", to: Route::Flashcards {}, "Flashcards" }
                Link { class: "action", to: Route::Notebook {}, "Notebook" }
            }

            if show_history() {
                HistoryPanel {
                    items: vm.history.clone(),
                    on_select,
                    on_close: move |()| show_history.set(false),
                }
            }
        }
    }
}

#[component]
fn SavedContent(snippets: Vec<SavedSnippetVm>) -> Element {
    let mut store = use_store();
    let mut slot = use_payload_slot();
    let navigator = use_navigator();

    let mut generate_from = move |screen: Screen, content: String| {
        slot.write().send(screen, NavPayload::SourceContent(content));
        if let Some(route) = Route::for_screen(screen) {
            navigator.push(route);
        }
    };

    let count = snippets.len();

    rsx! {
        section { class: "card saved",
            div { class: "saved-header",
                h2 { "Saved Content ({count})" }
                button {
                    class: "button button--danger",
                    onclick: move |_| store.write().clear_saved_content(),
                    "Clear All"
                }
            }
            for (index, snippet) in snippets.into_iter().enumerate() {
                div { key: "{index}", class: "saved-item",
                    p { "{snippet.preview}" }
                    button {
                        class: "button",
                        onclick: {
                            let content = snippet.content.clone();
                            move |_| generate_from(Screen::Quiz, content.clone())
                        },
                        "Create Quiz"
                    }
                    button {
                        class: "button",
                        onclick: {
                            let content = snippet.content.clone();
                            move |_| generate_from(Screen::Flashcards, content.clone())
                        },
                        "Create Cards"
                    }
                }
            }
        }
    }
}

#[component]
fn HistoryPanel(
    items: Vec<HistoryItemVm>,
    on_select: EventHandler<PlanId>,
    on_close: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "modal",
            div { class: "modal-body",
                div { class: "modal-header",
                    h2 { "Study Plans History" }
                    button { class: "button", onclick: move |_| on_close.call(()), "Close" }
                }
                for item in items {
                    article { key: "{item.id}", class: "history-item",
                        h3 { "{item.label}" }
                        p { "Goal: {item.profile.goal}" }
                        p { "Level: {item.profile.level}" }
                        p { "Daily Time: {item.profile.daily_time}" }
                        p { "Created: {item.created}" }
                        if item.is_current {
                            span { class: "badge", "Current" }
                        } else {
                            button {
                                class: "button button--primary",
                                onclick: move |_| on_select.call(item.id),
                                "Use This Plan"
                            }
                        }
                        p { class: "preview", "{item.preview}" }
                        details {
                            summary { "View Full Plan" }
                            div { class: "plan-body", dangerous_inner_html: "{item.plan_html}" }
                        }
                    }
                }
            }
        }
    }
}
