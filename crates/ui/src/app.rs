use dioxus::prelude::*;
use dioxus_router::Router;
use study_core::{PayloadSlot, SessionStore};

use crate::context::AppContext;
use crate::routes::Route;

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();

    // Lives as long as the window; nothing is persisted.
    use_context_provider(|| Signal::new(SessionStore::new(clock)));
    use_context_provider(|| Signal::new(PayloadSlot::new()));

    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }
        document::Title { "Study Companion" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "Something went wrong" }
                        pre { "{errors:?}" }
                    }
                },
                Router::<Route> {}
            }
        }
    }
}
