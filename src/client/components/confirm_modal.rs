use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaTriangleExclamation;
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::client::{store::character::CharacterState, util::api};

/// Confirmation gate for deletes; the API is only called once the user confirms
#[component]
pub fn ConfirmDeleteModal() -> Element {
    let mut state = use_context::<Signal<CharacterState>>();
    let mut deleting = use_signal(|| false);

    let Some(character) = state.read().pending_delete.clone() else {
        return rsx!();
    };

    let name = character.name.clone().unwrap_or_default();
    let id = character.id;

    let confirm = move |_: MouseEvent| {
        if deleting() {
            return;
        }
        deleting.set(true);

        spawn(async move {
            let result = api::delete_character(id).await;
            deleting.set(false);

            match result {
                Ok(_) => state.write().apply_deleted(id),
                Err(err) => {
                    tracing::error!("Failed to delete character {}: {}", id, err);
                    state.write().notify_error("Failed to delete character");
                }
            }
        });
    };

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box",
                div { class: "flex items-center mb-4 gap-3",
                    Icon {
                        class: "text-error",
                        width: 24,
                        height: 24,
                        icon: FaTriangleExclamation
                    }
                    h3 { class: "text-lg font-semibold",
                        "Confirm deletion"
                    }
                }
                p { class: "mb-6",
                    "Are you sure you want to delete "
                    strong { "{name}" }
                    "? This action cannot be undone."
                }
                div { class: "modal-action",
                    button {
                        class: "btn",
                        onclick: move |_| state.write().cancel_delete(),
                        "Cancel"
                    }
                    button {
                        class: "btn btn-error",
                        disabled: deleting(),
                        onclick: confirm,
                        "Delete"
                    }
                }
            }
        }
    )
}
