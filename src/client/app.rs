use dioxus::prelude::*;

use crate::client::{router::Route, store::character::CharacterState};

const TAILWIND_BROWSER: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";

#[component]
pub fn App() -> Element {
    use_context_provider(|| Signal::new(CharacterState::default()));

    rsx! {
        document::Stylesheet { href: DAISYUI_CSS }
        document::Script { src: TAILWIND_BROWSER }
        div { class: "min-h-screen bg-gradient-to-br from-red-900 via-gray-900 to-black",
            Router::<Route> {}
        }
    }
}
