use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};
use services::{QuizPhase, QuizSession};
use study_core::GenerationSource;
use study_core::model::QuizQuestion;

use crate::context::{AppContext, use_store};
use crate::routes::Route;
use crate::vm::{QuizScreenVm, ReviewRowVm, map_quiz_screen};

/// Three-level quiz. Preloaded questions stand in for the easy level.
#[component]
pub fn QuizView(source: GenerationSource, preloaded: Option<Vec<QuizQuestion>>) -> Element {
    let ctx = use_context::<AppContext>();
    let mut store = use_store();
    let navigator = use_navigator();

    let mut session = use_signal(move || match preloaded {
        Some(questions) => QuizSession::with_questions(questions),
        None => QuizSession::new(),
    });

    let quizzes = ctx.quizzes();
    let generate = use_callback(move |()| {
        let Ok((level, ticket)) = session.write().begin_generation() else {
            return;
        };
        let quizzes = quizzes.clone();
        let source = source.clone();
        spawn(async move {
            let result = quizzes.fetch_level(&source, level).await;
            let outcome = session.write().load_questions(ticket, result);
            tracing::debug!(%level, ?outcome, "quiz level loaded");
        });
    });

    use_hook(move || {
        if matches!(session.peek().phase(), QuizPhase::GeneratingLevel(_)) {
            generate.call(());
        }
    });

    let mut on_answer = move |option: usize| {
        let result = session.write().answer(option, &mut store.write());
        if let Err(err) = result {
            tracing::warn!(error = %err, "quiz answer rejected");
        }
    };

    let on_advance = move |_| {
        let next = session.write().advance();
        match next {
            Ok(QuizPhase::GeneratingLevel(_)) => generate.call(()),
            Ok(QuizPhase::Finished) => {
                navigator.push(Route::Dashboard {});
            }
            Ok(_) => {}
            Err(err) => tracing::warn!(error = %err, "quiz advance rejected"),
        }
    };

    let screen = map_quiz_screen(&session.read());

    rsx! {
        div { class: "page page--quiz",
            match screen {
                QuizScreenVm::Generating { heading } => rsx! {
                    div { class: "card loading",
                        h2 { "{heading}" }
                        p { class: "muted", "This may take a few seconds." }
                    }
                },
                QuizScreenVm::Question { heading, prompt, options } => rsx! {
                    div { class: "card",
                        h2 { "{heading}" }
                        p { class: "quiz-prompt", "{prompt}" }
                        div { class: "quiz-options",
                            for (i, option) in options.into_iter().enumerate() {
                                button {
                                    key: "{i}",
                                    class: "button quiz-option",
                                    onclick: move |_| on_answer(i),
                                    "{option}"
                                }
                            }
                        }
                    }
                },
                QuizScreenVm::Review { heading, score, rows, advance_label } => rsx! {
                    div { class: "card",
                        h2 { "{heading}" }
                        p { class: "quiz-score", "{score}" }
                        for (i, row) in rows.into_iter().enumerate() {
                            ReviewRowItem { key: "{i}", row }
                        }
                        button { class: "button button--primary", onclick: on_advance, "{advance_label}" }
                    }
                },
                QuizScreenVm::Finished => rsx! {
                    div { class: "card",
                        h2 { "Quiz Complete" }
                        Link { class: "button", to: Route::Dashboard {}, "Back to Dashboard" }
                    }
                },
            }
        }
    }
}

#[component]
fn ReviewRowItem(row: ReviewRowVm) -> Element {
    let class = if row.is_correct {
        "review-row review-row--correct"
    } else {
        "review-row review-row--wrong"
    };
    rsx! {
        div { class,
            p { class: "review-question", "{row.question}" }
            p { "Your answer: {row.chosen}" }
            if !row.is_correct {
                p { "Correct answer: {row.correct}" }
            }
        }
    }
}
