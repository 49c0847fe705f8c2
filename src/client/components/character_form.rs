use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaPlus, FaXmark};
use dioxus_free_icons::Icon;
use dioxus_logger::tracing;

use crate::{
    client::{
        store::character::CharacterState,
        util::{
            api,
            validation::{validate_character, CharacterForm, FormErrors, FormField, UNIVERSES},
        },
    },
    model::character::CharacterDto,
};

fn input_class(error: Option<&'static str>) -> &'static str {
    if error.is_some() {
        "input input-error w-full"
    } else {
        "input w-full"
    }
}

/// Add or edit form. Remount it (via `key`) when the edited character changes so the inputs are
/// re-initialized from `editing`.
#[component]
pub fn CharacterFormCard(#[props(!optional)] editing: Option<CharacterDto>) -> Element {
    let mut state = use_context::<Signal<CharacterState>>();

    let initial = editing
        .as_ref()
        .map(CharacterForm::from_character)
        .unwrap_or_default();
    let mut form = use_signal(move || initial);
    let mut errors = use_signal(FormErrors::default);
    let mut submitting = use_signal(|| false);

    let editing_id = editing.as_ref().map(|c| c.id);
    let is_editing = editing_id.is_some();

    let submit = move |_: MouseEvent| {
        if submitting() {
            return;
        }

        let character = match validate_character(&form.read()) {
            Ok(character) => character,
            Err(field_errors) => {
                errors.set(field_errors);
                return;
            }
        };

        submitting.set(true);

        spawn(async move {
            match editing_id {
                Some(id) => {
                    let result = api::update_character(id, &character).await;
                    submitting.set(false);

                    match result {
                        Ok(updated) => state.write().apply_updated(id, updated),
                        Err(err) => {
                            tracing::error!("Failed to update character {}: {}", id, err);
                            state.write().notify_error("Failed to update character");
                        }
                    }
                }
                None => {
                    let result = api::create_character(&character).await;
                    submitting.set(false);

                    match result {
                        Ok(created) => {
                            form.set(CharacterForm::default());
                            state.write().apply_created(created);
                        }
                        Err(err) => {
                            tracing::error!("Failed to create character: {}", err);
                            state.write().notify_error("Failed to add character");
                        }
                    }
                }
            }
        });
    };

    let field_errors = errors.read().clone();
    let values = form.read().clone();

    rsx!(
        div {
            class: "card bg-base-100 shadow-lg sticky top-8",
            div {
                class: "card-body",
                div { class: "flex justify-between items-center mb-4",
                    h2 { class: "card-title text-2xl",
                        if is_editing { "Edit character" } else { "Add a new character" }
                    }
                    if is_editing {
                        button {
                            class: "btn btn-ghost btn-sm",
                            onclick: move |_| state.write().cancel_edit(),
                            Icon {
                                width: 20,
                                height: 20,
                                icon: FaXmark
                            }
                        }
                    }
                }
                div { class: "flex flex-col gap-4",
                    div {
                        label { class: "label mb-1", "Character name *" }
                        input {
                            r#type: "text",
                            class: input_class(field_errors.name),
                            placeholder: "e.g. Spider-Man",
                            value: "{values.name}",
                            oninput: move |evt| {
                                form.write().name = evt.value();
                                errors.write().clear(FormField::Name);
                            },
                        }
                        if let Some(message) = field_errors.name {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label mb-1", "Real name *" }
                        input {
                            r#type: "text",
                            class: input_class(field_errors.real_name),
                            placeholder: "e.g. Peter Parker",
                            value: "{values.real_name}",
                            oninput: move |evt| {
                                form.write().real_name = evt.value();
                                errors.write().clear(FormField::RealName);
                            },
                        }
                        if let Some(message) = field_errors.real_name {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div {
                        label { class: "label mb-1", "Universe *" }
                        select {
                            class: if field_errors.universe.is_some() { "select select-error w-full" } else { "select w-full" },
                            onchange: move |evt| {
                                form.write().universe = evt.value();
                                errors.write().clear(FormField::Universe);
                            },
                            option {
                                value: "",
                                selected: values.universe.is_empty(),
                                "Select a universe"
                            }
                            for universe in UNIVERSES {
                                option {
                                    key: "{universe}",
                                    value: "{universe}",
                                    selected: values.universe == universe,
                                    "{universe}"
                                }
                            }
                        }
                        if let Some(message) = field_errors.universe {
                            p { class: "text-error text-sm mt-1", "{message}" }
                        }
                    }
                    div { class: "flex gap-4 pt-4",
                        button {
                            class: "btn btn-primary flex-1 flex gap-2",
                            disabled: submitting(),
                            onclick: submit,
                            if submitting() {
                                span { class: "loading loading-spinner loading-sm" }
                                "Saving..."
                            } else {
                                Icon {
                                    width: 16,
                                    height: 16,
                                    icon: FaPlus
                                }
                                if is_editing { "Update" } else { "Add" }
                            }
                        }
                        if is_editing {
                            button {
                                class: "btn btn-neutral flex-1",
                                onclick: move |_| state.write().cancel_edit(),
                                "Cancel"
                            }
                        }
                    }
                }
            }
        }
    )
}
