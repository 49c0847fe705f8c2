use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPenToSquare, FaTrash};
use dioxus_free_icons::Icon;

use crate::{client::store::character::CharacterState, model::character::CharacterDto};

/// Uppercased first letter of a name, shown as the card's avatar
fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

#[component]
pub fn CharacterCard(character: CharacterDto) -> Element {
    let mut state = use_context::<Signal<CharacterState>>();

    let name = character.name.clone().unwrap_or_default();
    let real_name = character.real_name.clone().unwrap_or_default();
    let universe = character.universe.clone().unwrap_or_default();
    let initial = initial(&name);

    let edit_target = character.clone();
    let delete_target = character;

    rsx!(
        div {
            class: "card bg-base-100 shadow-lg hover:shadow-xl transition-shadow duration-300 overflow-hidden",
            div { class: "h-40 bg-red-600 flex items-center justify-center",
                div { class: "text-white text-center",
                    div { class: "text-3xl font-bold mb-2",
                        "{initial}"
                    }
                    div { class: "text-xs opacity-90",
                        "{universe}"
                    }
                }
            }
            div {
                class: "card-body p-4",
                h3 { class: "card-title text-lg",
                    "{name}"
                }
                p { class: "text-sm",
                    span { class: "font-semibold", "Real name: " }
                    "{real_name}"
                }
                p { class: "text-sm",
                    span { class: "font-semibold", "Universe: " }
                    "{universe}"
                }
                div { class: "card-actions pt-3 border-t border-base-300",
                    button {
                        class: "btn btn-info btn-sm flex-1 flex gap-1",
                        onclick: move |_| state.write().begin_edit(edit_target.clone()),
                        Icon {
                            width: 12,
                            height: 12,
                            icon: FaPenToSquare
                        }
                        "Edit"
                    }
                    button {
                        class: "btn btn-error btn-sm flex-1 flex gap-1",
                        onclick: move |_| state.write().request_delete(delete_target.clone()),
                        Icon {
                            width: 12,
                            height: 12,
                            icon: FaTrash
                        }
                        "Delete"
                    }
                }
            }
        }
    )
}
