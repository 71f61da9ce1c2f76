use dioxus::prelude::*;

/// Dead end: nothing is reachable from here except by entering another address.
#[component]
pub fn NotFoundView(path: String) -> Element {
    rsx! {
        div { class: "page page--not-found",
            h1 { "404 - Page Not Found" }
            p { class: "muted", "{path}" }
        }
    }
}
