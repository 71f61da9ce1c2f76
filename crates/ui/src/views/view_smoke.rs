use services::{RecordedCall, ScriptedBackend};
use study_core::model::{CardDifficulty, Flashcard, Profile, QuizQuestion, StudyLevel};
use study_core::{NavPayload, Screen, SessionStore, reachable};

use super::test_harness::{HarnessBuilder, test_store};
use crate::routes::Route;

fn store_with_plan() -> SessionStore {
    let mut store = test_store();
    let profile = Profile::new("Physics", "Pass the exam", StudyLevel::Beginner, 2).unwrap();
    let plan = "## Week 1\n- Read chapter one";
    store.set_profile(Some(profile.clone()));
    store.set_current_plan(plan);
    store.add_study_plan_record(profile, plan);
    store
}

fn question(text: &str) -> QuizQuestion {
    QuizQuestion::new(
        text,
        vec!["a".into(), "b".into(), "c".into(), "d".into()],
        0,
    )
    .unwrap()
}

#[tokio::test(flavor = "current_thread")]
async fn landing_links_only_to_setup() {
    let mut harness = HarnessBuilder::new(Route::Landing {})
        .store(store_with_plan())
        .build();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("AI Personal Study Companion"), "{html}");
    assert!(html.contains("Start Studying"), "{html}");
    assert!(!html.contains("Dashboard"), "{html}");
    assert_eq!(reachable(Screen::Landing), [Screen::Setup]);
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_without_plan_shows_setup_form() {
    let mut harness = HarnessBuilder::new(Route::Dashboard {}).build();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Setup Your Study Profile"), "{html}");
    assert!(html.contains("Create a study plan first"), "{html}");
    assert!(!html.contains("Your Study Dashboard"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn dashboard_renders_plan_markdown_and_history_count() {
    let mut harness = HarnessBuilder::new(Route::Dashboard {})
        .store(store_with_plan())
        .build();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Your Study Dashboard"), "{html}");
    assert!(html.contains("<h2>Week 1</h2>"), "{html}");
    assert!(html.contains("History (1)"), "{html}");
    assert!(html.contains("Physics"), "{html}");
    assert!(html.contains("Daily Time: 2h"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn notebook_lists_saved_content_as_notes() {
    let mut store = test_store();
    store.add_to_saved_content("Newton's first law");
    let mut harness = HarnessBuilder::new(Route::Notebook {}).store(store).build();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Note 1"), "{html}");
    assert!(html.contains("Newton&#39;s first law") || html.contains("Newton's first law"));
    assert!(html.contains("Choose a note from the list"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn empty_notebook_invites_a_first_note() {
    let mut harness = HarnessBuilder::new(Route::Notebook {}).build();
    harness.rebuild();

    assert!(harness.render().contains("No notes yet. Create your first note!"));
}

#[tokio::test(flavor = "current_thread")]
async fn unknown_path_renders_not_found() {
    let route = Route::NotFound {
        segments: vec!["nowhere".into()],
    };
    let mut harness = HarnessBuilder::new(route).build();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("404 - Page Not Found"), "{html}");
    assert!(html.contains("/nowhere"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_starts_on_preloaded_questions_without_calling_backend() {
    let payload = NavPayload::QuizQuestions(vec![question("What is inertia?")]);
    let mut harness = HarnessBuilder::new(Route::Quiz {})
        .payload(Screen::Quiz, payload)
        .build();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("Easy Quiz (1/1)"), "{html}");
    assert!(html.contains("What is inertia?"), "{html}");
    assert!(harness.backend.calls().is_empty());
}

#[tokio::test(flavor = "current_thread")]
async fn quiz_generates_the_easy_level_on_entry() {
    let backend = ScriptedBackend::new().with_quiz(vec![question("Generated question")]);
    let mut harness = HarnessBuilder::new(Route::Quiz {})
        .store(store_with_plan())
        .backend(backend)
        .build();
    harness.rebuild();
    assert!(harness.render().contains("Generating easy quiz..."));

    harness.drive_async().await;
    harness.drive_async().await;
    let html = harness.render();

    assert!(html.contains("Generated question"), "{html}");
    assert!(matches!(
        harness.backend.calls().as_slice(),
        [RecordedCall::Quiz(_)]
    ));
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_name_the_notebook_as_source() {
    let mut store = test_store();
    store.add_to_saved_content("Photosynthesis basics");
    let mut harness = HarnessBuilder::new(Route::Flashcards {})
        .store(store)
        .build();
    harness.rebuild();
    let html = harness.render();

    assert!(
        html.contains("Flashcards will be generated from your Notebook"),
        "{html}"
    );
    assert!(html.contains("Generate Flashcards"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn flashcards_show_preloaded_deck() {
    let cards = vec![
        Flashcard::new(1, "Front one", "Back one", CardDifficulty::Medium),
        Flashcard::new(2, "Front two", "Back two", CardDifficulty::Hard),
    ];
    let mut harness = HarnessBuilder::new(Route::Flashcards {})
        .payload(Screen::Flashcards, NavPayload::Flashcards(cards))
        .build();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("1 of 2"), "{html}");
    assert!(html.contains("MEDIUM"), "{html}");
    assert!(html.contains("Front one"), "{html}");
    assert!(!html.contains("Back one"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn tutor_greets_and_shows_saved_count() {
    let mut store = test_store();
    store.add_to_saved_content("saved answer");
    let mut harness = HarnessBuilder::new(Route::Tutor {}).store(store).build();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("AI Tutor"), "{html}");
    assert!(html.contains("Notebook: 1 saved"), "{html}");
    assert!(html.contains("Hello! I"), "{html}");
}
