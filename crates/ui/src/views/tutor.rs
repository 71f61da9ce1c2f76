use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::TutorChat;
use study_core::Screen;

use crate::context::{AppContext, use_payload_slot, use_store};
use crate::routes::Route;
use crate::vm::{ChatMessageVm, map_chat};

const QUIZ_FAILED: &str = "Failed to generate quiz. Please try again.";
const CARDS_FAILED: &str = "Failed to generate flashcards. Please try again.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ContentAction {
    Save,
    Quiz,
    Cards,
}

#[component]
pub fn TutorView(saved_count: usize) -> Element {
    let ctx = use_context::<AppContext>();
    let mut store = use_store();
    let mut slot = use_payload_slot();
    let navigator = use_navigator();
    let clock = ctx.clock();

    let mut chat = use_signal(move || TutorChat::new(clock));
    let mut question = use_signal(String::new);
    let mut notice = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let tutor = ctx.tutor();
    let send = {
        let tutor = tutor.clone();
        use_callback(move |()| {
            let Some((sent, ticket)) = chat.write().submit_question(&question.read()) else {
                return;
            };
            question.set(String::new());
            let tutor = tutor.clone();
            spawn(async move {
                let result = tutor.ask(&sent).await;
                chat.write().receive(ticket, result, &mut store.write());
            });
        })
    };

    let on_action = use_callback(move |(action, content): (ContentAction, String)| {
        let screen = match action {
            ContentAction::Save => {
                let added = store.write().add_to_saved_content(content);
                let message = if added {
                    "Saved to your notebook."
                } else {
                    "Already in your notebook."
                };
                notice.set(Some(message.to_string()));
                return;
            }
            ContentAction::Quiz => Screen::Quiz,
            ContentAction::Cards => Screen::Flashcards,
        };
        if busy() {
            return;
        }
        busy.set(true);
        notice.set(None);

        let tutor = tutor.clone();
        spawn(async move {
            let (result, failure) = if screen == Screen::Quiz {
                (tutor.quiz_from_content(&content).await, QUIZ_FAILED)
            } else {
                (tutor.flashcards_from_content(&content).await, CARDS_FAILED)
            };
            busy.set(false);
            match result {
                Ok(payload) => {
                    slot.write().send(screen, payload);
                    if let Some(route) = Route::for_screen(screen) {
                        navigator.push(route);
                    }
                }
                Err(err) => {
                    tracing::warn!(error = %err, "content generation from tutor answer failed");
                    notice.set(Some(failure.to_string()));
                }
            }
        });
    });

    let messages = map_chat(chat.read().messages());
    let waiting = chat.read().is_waiting();
    let draft = question();

    rsx! {
        div { class: "page page--tutor",
            div { class: "tutor-header",
                h1 { "AI Tutor" }
                span { class: "muted", "Notebook: {saved_count} saved" }
                button { class: "button", onclick: move |_| chat.write().clear(), "Clear Chat" }
                Link { class: "button", to: Route::Notebook {}, "Notebook" }
                Link { class: "button", to: Route::Dashboard {}, "Dashboard" }
            }

            if let Some(message) = notice() {
                div { class: "notice", "{message}" }
            }

            div { class: "chat",
                for message in messages {
                    ChatBubble { key: "{message.id}", message: message.clone(), busy: busy(), on_action }
                }
                if waiting {
                    div { class: "bubble bubble--tutor thinking", "Thinking..." }
                }
            }

            div { class: "chat-input",
                textarea {
                    placeholder: "Ask your tutor anything...",
                    rows: "3",
                    value: "{draft}",
                    oninput: move |evt| question.set(evt.value()),
                    onkeydown: move |evt: KeyboardEvent| {
                        if evt.data.key() == Key::Enter && !evt.data.modifiers().contains(Modifiers::SHIFT) {
                            evt.prevent_default();
                            send.call(());
                        }
                    },
                }
                button {
                    class: "button button--primary",
                    disabled: waiting || draft.trim().is_empty(),
                    onclick: move |_| send.call(()),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn ChatBubble(
    message: ChatMessageVm,
    busy: bool,
    on_action: Callback<(ContentAction, String)>,
) -> Element {
    let class = if message.from_user {
        "bubble bubble--user"
    } else {
        "bubble bubble--tutor"
    };
    let content = message.content.clone();

    rsx! {
        div { class,
            div { class: "bubble-text", "{message.content}" }
            span { class: "bubble-time", "{message.time}" }
            if message.actions {
                div { class: "bubble-actions",
                    button {
                        class: "button",
                        onclick: {
                            let content = content.clone();
                            move |_| on_action.call((ContentAction::Save, content.clone()))
                        },
                        "Save"
                    }
                    button {
                        class: "button",
                        disabled: busy,
                        onclick: {
                            let content = content.clone();
                            move |_| on_action.call((ContentAction::Quiz, content.clone()))
                        },
                        "Quiz"
                    }
                    button {
                        class: "button",
                        disabled: busy,
                        onclick: move |_| on_action.call((ContentAction::Cards, content.clone())),
                        "Cards"
                    }
                }
            }
        }
    }
}
