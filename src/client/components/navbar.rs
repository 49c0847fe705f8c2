use dioxus::prelude::*;

use crate::client::store::character::CharacterState;

pub use crate::client::router::Route;

#[component]
pub fn Navbar() -> Element {
    let state = use_context::<Signal<CharacterState>>();

    let count_label = state.read().count_label();

    rsx! {
        header {
            class: "bg-gradient-to-r from-red-700 to-red-900 text-white py-12 shadow-xl",
            div { class: "container mx-auto px-4 text-center",
                h1 { class: "text-6xl font-bold mb-4 text-yellow-300",
                    "MARVEL"
                }
                h2 { class: "text-3xl font-semibold mb-2",
                    "CHARACTERS"
                }
                p { class: "text-red-100 text-lg mb-4",
                    "Manage your superhero collection"
                }
                div { class: "badge badge-lg bg-red-600 border-none text-white px-6 py-4",
                    "{count_label}"
                }
            }
        }

        Outlet::<Route> {}
    }
}
