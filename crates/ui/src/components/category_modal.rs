//! # Category Form Modal
//!
//! One modal reused for registering and editing a category. The inputs are
//! bound to `AppState::form`; saving runs the submit workflow.

use catdesk_client::ApiClient;
use dioxus::prelude::*;

use crate::state::{APP_STATE, GlobalStore};
use crate::workflow;

/// Form modal, rendered only while open
#[component]
pub fn CategoryModal() -> Element {
    let api = use_context::<ApiClient>();

    let state = APP_STATE.read();
    let Some(title) = state.modal_title() else {
        return rsx! {};
    };
    let submitting = state.modal.is_submitting();
    let name = state.form.name.clone();
    let imagen = state.form.imagen.clone();
    let name_flagged = state
        .alerts
        .current()
        .is_some_and(|a| a.field.as_deref() == Some("name"));
    drop(state);

    let save = move |_| {
        let api = api.clone();
        spawn(async move {
            workflow::submit_form(&api, &GlobalStore).await;
        });
    };

    rsx! {
        div {
            class: "modal-backdrop",
            onclick: move |_| {
                if !APP_STATE.read().modal.is_submitting() {
                    APP_STATE.write().close_modal();
                }
            },

            div {
                class: "modal-dialog",
                onclick: move |e| e.stop_propagation(),

                form {
                    // Pressing Enter inside an input submits the form
                    onsubmit: move |e| {
                        e.prevent_default();
                        save(());
                    },

                    div {
                        class: "modal-header",
                        label { class: "h5", "{title}" }
                        button {
                            r#type: "button",
                            class: "btn-close",
                            title: "Close",
                            disabled: submitting,
                            onclick: move |_| APP_STATE.write().close_modal(),
                            "✕"
                        }
                    }

                    div {
                        class: "modal-body",

                        div {
                            class: "input-group",
                            span { class: "input-group-text", "🎁" }
                            input {
                                id: "name",
                                r#type: "text",
                                class: if name_flagged { "form-control is-invalid" } else { "form-control" },
                                placeholder: "Name",
                                value: "{name}",
                                autofocus: true,
                                disabled: submitting,
                                oninput: move |e| APP_STATE.write().form.name = e.value(),
                            }
                        }

                        div {
                            class: "input-group",
                            span { class: "input-group-text", "🖼️" }
                            input {
                                id: "imagen",
                                r#type: "text",
                                class: "form-control",
                                placeholder: "Image URL",
                                value: "{imagen}",
                                disabled: submitting,
                                oninput: move |e| APP_STATE.write().form.imagen = e.value(),
                            }
                        }
                    }

                    div {
                        class: "modal-footer",

                        button {
                            r#type: "submit",
                            class: "btn btn-success",
                            disabled: submitting,
                            if submitting {
                                span { class: "animate-spin", "⏳" }
                                " Saving..."
                            } else {
                                span { "💾" }
                                " Save"
                            }
                        }

                        button {
                            r#type: "button",
                            class: "btn btn-secondary",
                            disabled: submitting,
                            onclick: move |_| APP_STATE.write().close_modal(),
                            "Close"
                        }
                    }
                }
            }
        }
    }
}
