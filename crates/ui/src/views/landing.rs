use dioxus::prelude::*;
use dioxus_router::Link;

use crate::routes::Route;

#[component]
pub fn LandingView() -> Element {
    rsx! {
        div { class: "page page--landing",
            h1 { "AI Personal Study Companion" }
            p { class: "tagline", "Your personalized AI tutor" }
            Link { class: "button button--primary", to: Route::Setup {}, "Start Studying" }
        }
    }
}
