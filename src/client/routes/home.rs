use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaTriangleExclamation, FaUsers};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{
    components::{CharacterCard, CharacterFormCard, ConfirmDeleteModal, Page, ToastNotification},
    store::character::CharacterState,
    util::api::{self, API_BASE_URL},
};

/// Fetch the character list into the view state
async fn load_characters(mut state: Signal<CharacterState>) {
    state.write().start_loading();

    match api::get_characters().await {
        Ok(characters) => state.write().finish_loading(characters),
        Err(err) => {
            tracing::error!("Failed to load characters: {}", err);
            state.write().fail_loading();
        }
    }
}

#[component]
pub fn Home() -> Element {
    let state = use_context::<Signal<CharacterState>>();

    // Retrieve characters on component load
    use_hook(move || {
        spawn(load_characters(state));
    });

    let (loading, error, characters, editing) = {
        let view = state.read();
        (
            view.loading,
            view.error.clone(),
            view.characters.clone(),
            view.editing.clone(),
        )
    };

    let form_key = editing
        .as_ref()
        .map(|c| format!("edit-{}", c.id))
        .unwrap_or_else(|| "new".to_string());

    rsx!(
        Title { "Marvel Characters" }
        Meta {
            name: "description",
            content: "Manage your collection of superheroes."
        }
        ToastNotification { }
        if loading {
            Page { class: "flex flex-col items-center justify-center min-h-[40vh]",
                span { class: "loading loading-spinner loading-lg text-error" }
                p { class: "mt-4 text-xl text-base-content",
                    "Loading characters..."
                }
            }
        } else if error.is_some() {
            Page { class: "flex items-center justify-center",
                div { class: "card bg-base-100 shadow-lg max-w-md",
                    div { class: "card-body items-center text-center",
                        Icon {
                            class: "text-error mb-4",
                            width: 64,
                            height: 64,
                            icon: FaTriangleExclamation
                        }
                        h2 { class: "card-title text-2xl",
                            "Connection error"
                        }
                        p {
                            "Could not reach the server. Make sure the API is running at {API_BASE_URL}."
                        }
                        button {
                            class: "btn btn-error mt-4",
                            onclick: move |_| {
                                spawn(load_characters(state));
                            },
                            "Retry"
                        }
                    }
                }
            }
        } else {
            ConfirmDeleteModal { }
            Page {
                div { class: "flex flex-col lg:flex-row gap-8",
                    div { class: "lg:w-1/3",
                        CharacterFormCard { key: "{form_key}", editing: editing }
                    }
                    div { class: "lg:w-2/3",
                        if characters.is_empty() {
                            div { class: "card bg-base-100 shadow-lg",
                                div { class: "card-body items-center text-center py-16",
                                    Icon {
                                        class: "text-base-content/40 mb-4",
                                        width: 64,
                                        height: 64,
                                        icon: FaUsers
                                    }
                                    h3 { class: "text-2xl font-bold mb-2",
                                        "No characters found"
                                    }
                                    p { class: "text-lg",
                                        "Add your first superhero!"
                                    }
                                }
                            }
                        } else {
                            div { class: "grid grid-cols-1 md:grid-cols-2 xl:grid-cols-3 gap-6",
                                for character in characters {
                                    CharacterCard { key: "{character.id}", character: character.clone() }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}
