use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaXmark;
use dioxus_free_icons::Icon;

use crate::client::{
    store::character::{CharacterState, ToastKind},
    util::timer::{self, TOAST_DURATION_MS},
};

/// Shows the latest notification until it expires or the user closes it
#[component]
pub fn ToastNotification() -> Element {
    let mut state = use_context::<Signal<CharacterState>>();

    let toast_id = use_memo(move || state.read().toast.as_ref().map(|t| t.id));

    // Start the expiry timer for each new toast
    use_effect(move || {
        if let Some(id) = toast_id() {
            spawn(async move {
                timer::sleep_ms(TOAST_DURATION_MS).await;
                state.write().expire_toast(id);
            });
        }
    });

    let Some(toast) = state.read().toast.clone() else {
        return rsx!();
    };

    let alert_class = match toast.kind {
        ToastKind::Success => "alert-success",
        ToastKind::Error => "alert-error",
    };

    rsx!(
        div { class: "toast toast-top toast-end z-50",
            div { class: "alert {alert_class} shadow-lg",
                span { "{toast.message}" }
                button {
                    class: "btn btn-ghost btn-xs",
                    onclick: move |_| state.write().dismiss_toast(),
                    Icon {
                        width: 16,
                        height: 16,
                        icon: FaXmark
                    }
                }
            }
        }
    )
}
