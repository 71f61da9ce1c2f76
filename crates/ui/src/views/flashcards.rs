use dioxus::prelude::*;
use dioxus_router::Link;
use services::FlashcardSession;
use study_core::GenerationSource;
use study_core::model::Flashcard;

use crate::context::{AppContext, use_store};
use crate::routes::Route;
use crate::vm::{FlashcardScreenVm, map_flashcard_screen};

#[component]
pub fn FlashcardsView(source: GenerationSource, preloaded: Option<Vec<Flashcard>>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut store = use_store();

    let mut session = use_signal(move || match preloaded {
        Some(cards) => FlashcardSession::with_cards(cards),
        None => FlashcardSession::new(),
    });
    let mut loading = use_signal(|| false);
    let from_content = source.is_content();

    let flashcards = ctx.flashcards();
    let on_generate = move |_| {
        let Ok(ticket) = session.write().begin_generation() else {
            return;
        };
        loading.set(true);
        let flashcards = flashcards.clone();
        let source = source.clone();
        spawn(async move {
            let result = flashcards.fetch(&source).await;
            let outcome = session.write().load_cards(ticket, result);
            tracing::debug!(?outcome, "flashcards loaded");
            loading.set(false);
        });
    };

    let on_flip = move |_| {
        if let Err(err) = session.write().flip() {
            tracing::warn!(error = %err, "flip rejected");
        }
    };

    let mut on_judge = move |correct: bool| {
        let result = session.write().judge(correct, &mut store.write());
        if let Err(err) = result {
            tracing::warn!(error = %err, "judgement rejected");
        }
    };

    let screen = map_flashcard_screen(&session.read(), from_content);

    rsx! {
        div { class: "page page--flashcards",
            match screen {
                FlashcardScreenVm::NotStarted { hint } => rsx! {
                    div { class: "card",
                        h2 { "Flashcards" }
                        p { class: "muted", "{hint}" }
                        button {
                            class: "button button--primary",
                            disabled: loading(),
                            onclick: on_generate,
                            if loading() { "Generating..." } else { "Generate Flashcards" }
                        }
                    }
                },
                FlashcardScreenVm::Card { position, percent, badge, front, back, flipped } => rsx! {
                    div { class: "card",
                        div { class: "flashcard-meta",
                            span { "{position}" }
                            span { class: "badge", "{badge}" }
                        }
                        div { class: "progress-track",
                            div { class: "progress-fill", style: "width: {percent}%" }
                        }
                        div { class: "flashcard", onclick: on_flip,
                            if flipped {
                                p { class: "flashcard-back", "{back}" }
                            } else {
                                p { class: "flashcard-front", "{front}" }
                                span { class: "muted", "Click to reveal answer" }
                            }
                        }
                        if flipped {
                            div { class: "flashcard-judge",
                                button { class: "button button--success", onclick: move |_| on_judge(true), "Got It Right" }
                                button { class: "button button--warning", onclick: move |_| on_judge(false), "Need More Practice" }
                            }
                        }
                    }
                },
                FlashcardScreenVm::Complete { summary, percent } => rsx! {
                    div { class: "card",
                        h2 { "Session Complete!" }
                        p { "{summary}" }
                        p { class: "muted", "{percent}% accuracy" }
                        button { class: "button button--primary", onclick: move |_| session.write().restart(), "Study Again" }
                        Link { class: "button", to: Route::Dashboard {}, "Back to Dashboard" }
                    }
                },
            }
        }
    }
}
