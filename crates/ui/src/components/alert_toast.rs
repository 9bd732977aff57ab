//! # Alert Toast Component
//!
//! Shows the alert in the global slot and clears it when it expires. The
//! timer expires by alert id, so a newer alert raised in the meantime is
//! left alone.

use chrono::Utc;
use dioxus::prelude::*;

use crate::state::APP_STATE;

/// Toast for the current alert
#[component]
pub fn AlertToast() -> Element {
    // Equal across unrelated state writes, so the effect below runs once per alert
    let timer = use_memo(|| APP_STATE.read().alerts.timer());

    use_effect(move || {
        let Some(timer) = timer() else {
            return;
        };
        let remaining = timer.remaining(Utc::now());

        spawn(async move {
            tokio::time::sleep(remaining).await;
            APP_STATE.write().alerts.expire(timer.id);
        });
    });

    let state = APP_STATE.read();
    let Some(alert) = state.alerts.current().cloned() else {
        return rsx! {};
    };
    drop(state);

    let kind_class = alert.kind.class();
    let icon = alert.kind.icon();

    rsx! {
        div {
            class: "toast {kind_class}",

            span { class: "toast-icon", "{icon}" }
            span { class: "toast-message", "{alert.message}" }

            button {
                class: "toast-close",
                title: "Dismiss",
                onclick: move |_| APP_STATE.write().alerts.dismiss(),
                "✕"
            }
        }
    }
}
