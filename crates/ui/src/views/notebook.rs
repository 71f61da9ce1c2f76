use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use study_core::{NavPayload, Screen};

use crate::context::{AppContext, use_payload_slot};
use crate::routes::Route;
use crate::vm::{NoteOrigin, NoteVm, NotebookState};

#[component]
pub fn NotebookView(saved: Vec<String>) -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut slot = use_payload_slot();
    let navigator = use_navigator();

    let mut notebook = use_signal(move || NotebookState::from_saved(&saved, clock.now()));
    let mut composing = use_signal(|| false);
    let mut title = use_signal(String::new);
    let mut content = use_signal(String::new);

    let mut generate_from = move |screen: Screen, text: String| {
        slot.write().send(screen, NavPayload::SourceContent(text));
        if let Some(route) = Route::for_screen(screen) {
            navigator.push(route);
        }
    };

    let on_save = move |_| {
        let created = notebook
            .write()
            .create(&title.read(), &content.read(), clock.now());
        if created.is_some() {
            title.set(String::new());
            content.set(String::new());
            composing.set(false);
        }
    };

    let notes = notebook.read().notes().to_vec();
    let empty = notes.is_empty();
    let selected = notebook.read().selected().cloned();
    let selected_id = selected.as_ref().map(|note| note.id);
    let can_save = !title.read().trim().is_empty() && !content.read().trim().is_empty();

    let detail = if composing() {
        rsx! {
            div { class: "card note-form",
                h2 { "New Note" }
                input {
                    placeholder: "Title",
                    value: "{title}",
                    oninput: move |evt| title.set(evt.value()),
                }
                textarea {
                    placeholder: "Write your note...",
                    rows: "8",
                    value: "{content}",
                    oninput: move |evt| content.set(evt.value()),
                }
                div { class: "form-actions",
                    button {
                        class: "button button--primary",
                        disabled: !can_save,
                        onclick: on_save,
                        "Save"
                    }
                    button { class: "button", onclick: move |_| composing.set(false), "Cancel" }
                }
            }
        }
    } else if let Some(note) = selected {
        let quiz_text = note.content.clone();
        let cards_text = note.content.clone();
        rsx! {
            div { class: "card",
                h2 { "{note.title}" }
                span { class: "muted", "{note.created}" }
                div { class: "note-content", "{note.content}" }
                div { class: "note-actions",
                    button {
                        class: "button",
                        onclick: move |_| generate_from(Screen::Quiz, quiz_text.clone()),
                        "Quiz"
                    }
                    button {
                        class: "button",
                        onclick: move |_| generate_from(Screen::Flashcards, cards_text.clone()),
                        "Cards"
                    }
                }
            }
        }
    } else {
        rsx! {
            p { class: "muted", "Choose a note from the list or create a new one" }
        }
    };

    rsx! {
        div { class: "page page--notebook",
            div { class: "notebook-header",
                h1 { "Notebook" }
                button { class: "button button--primary", onclick: move |_| composing.set(true), "New Note" }
                Link { class: "button", to: Route::Dashboard {}, "Dashboard" }
            }

            div { class: "notebook",
                aside { class: "note-list",
                    if empty {
                        p { class: "muted", "No notes yet. Create your first note!" }
                    }
                    for note in notes {
                        NoteListItem {
                            key: "{note.id}",
                            selected: selected_id == Some(note.id),
                            on_select: move |id| {
                                notebook.write().select(id);
                            },
                            on_delete: move |id| {
                                notebook.write().delete(id);
                            },
                            note: note.clone(),
                        }
                    }
                }

                section { class: "note-detail", {detail} }
            }
        }
    }
}

#[component]
fn NoteListItem(
    note: NoteVm,
    selected: bool,
    on_select: EventHandler<u64>,
    on_delete: EventHandler<u64>,
) -> Element {
    let id = note.id;
    let class = if selected { "note-item note-item--selected" } else { "note-item" };
    let origin = match note.origin {
        NoteOrigin::Saved => "From tutor",
        NoteOrigin::Local => "Written here",
    };

    rsx! {
        div { class, onclick: move |_| on_select.call(id),
            h3 { "{note.title}" }
            p { class: "muted", "{note.preview}" }
            div { class: "note-meta",
                span { "{note.created}" }
                span { class: "badge", "{origin}" }
                button {
                    class: "button button--danger",
                    onclick: move |evt| {
                        evt.stop_propagation();
                        on_delete.call(id);
                    },
                    "Delete"
                }
            }
        }
    }
}
