use dioxus::prelude::*;

use crate::client::{components::Page, router::Route};

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx!(
        Page { class: "flex flex-col items-center gap-4",
            p { class: "text-2xl text-white",
                "Nothing found at {path}"
            }
            Link {
                to: Route::Home {},
                class: "btn btn-primary",
                "Back to characters"
            }
        }
    )
}
