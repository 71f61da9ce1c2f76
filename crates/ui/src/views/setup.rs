use std::cell::Cell;
use std::rc::Rc;

use dioxus::core::Task;
use dioxus::prelude::*;
use dioxus_router::use_navigator;
use services::{PlanError, StudyPlanService};
use study_core::SUCCESS_REDIRECT_DELAY;
use study_core::model::{ProfileDraft, StudyLevel};

use crate::context::{AppContext, use_store};
use crate::routes::Route;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SetupPhase {
    Editing,
    Generating,
    Ready,
}

#[component]
pub fn SetupView(initial: ProfileDraft, redirected: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let mut store = use_store();
    let navigator = use_navigator();

    let mut draft = use_signal(move || initial);
    let mut error = use_signal(|| None::<String>);
    let mut phase = use_signal(|| SetupPhase::Editing);

    // The delayed move to the dashboard must not fire once the user has left.
    let redirect_task = use_hook(|| Rc::new(Cell::new(None::<Task>)));
    {
        let redirect_task = Rc::clone(&redirect_task);
        use_drop(move || {
            if let Some(task) = redirect_task.take() {
                task.cancel();
            }
        });
    }

    let plans = ctx.plans();
    let on_submit = {
        let redirect_task = Rc::clone(&redirect_task);
        move |_| {
            if phase() != SetupPhase::Editing {
                return;
            }
            let profile = match draft.read().validate() {
                Ok(profile) => profile,
                Err(err) => {
                    error.set(Some(err.to_string()));
                    return;
                }
            };
            error.set(None);
            phase.set(SetupPhase::Generating);

            let plans = plans.clone();
            let redirect_task = Rc::clone(&redirect_task);
            spawn(async move {
                match plans.request_plan(&profile).await {
                    Ok(plan) => {
                        StudyPlanService::apply(&mut store.write(), profile, plan);
                        phase.set(SetupPhase::Ready);
                        let task = spawn(async move {
                            tokio::time::sleep(SUCCESS_REDIRECT_DELAY).await;
                            navigator.push(Route::Dashboard {});
                        });
                        redirect_task.set(Some(task));
                    }
                    Err(err) => {
                        error.set(Some(PlanError::from(err).user_message()));
                        phase.set(SetupPhase::Editing);
                    }
                }
            });
        }
    };

    let go_now = {
        let redirect_task = Rc::clone(&redirect_task);
        move |_| {
            if let Some(task) = redirect_task.take() {
                task.cancel();
            }
            navigator.push(Route::Dashboard {});
        }
    };

    if phase() == SetupPhase::Ready {
        return rsx! {
            div { class: "page page--setup success",
                h2 { "Your study plan is ready!" }
                p { "Taking you to your dashboard..." }
                button { class: "button button--primary", onclick: go_now, "Go to Dashboard" }
            }
        };
    }

    let current = draft();
    let generating = phase() == SetupPhase::Generating;

    rsx! {
        div { class: "page page--setup",
            h1 { "Setup Your Study Profile" }
            if redirected {
                p { class: "notice", "Create a study plan first to open your dashboard." }
            }
            if let Some(message) = error() {
                div { class: "error", "{message}" }
            }

            label { r#for: "subject", "Subject" }
            input {
                id: "subject",
                placeholder: "e.g. Deep Learning, Physics, Mathematics",
                value: "{current.subject}",
                oninput: move |evt| draft.write().subject = evt.value(),
            }

            label { r#for: "goal", "Goal" }
            input {
                id: "goal",
                placeholder: "e.g. Semester Exam, Certification, Job Interview",
                value: "{current.goal}",
                oninput: move |evt| draft.write().goal = evt.value(),
            }

            label { r#for: "level", "Level" }
            select {
                id: "level",
                value: "{current.level}",
                onchange: move |evt| draft.write().level = evt.value(),
                option { value: "", "Select your level" }
                for level in StudyLevel::ALL {
                    option { value: level.as_str(), "{level}" }
                }
            }

            label { r#for: "time", "Hours per day" }
            input {
                id: "time",
                r#type: "number",
                min: "1",
                max: "24",
                placeholder: "Hours per day (1-24)",
                value: "{current.time_per_day}",
                oninput: move |evt| draft.write().time_per_day = evt.value(),
            }

            button {
                class: "button button--primary",
                disabled: generating,
                onclick: on_submit,
                if generating { "Generating..." } else { "Generate My Study Plan" }
            }
        }
    }
}
