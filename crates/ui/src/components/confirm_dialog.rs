//! # Confirm Delete Dialog Component
//!
//! Blocking yes/no dialog shown before a category is deleted. Confirming
//! sends exactly one DELETE; cancelling changes nothing.

use catdesk_client::ApiClient;
use dioxus::prelude::*;

use crate::state::{APP_STATE, ConfirmState, GlobalStore};
use crate::workflow;

/// Dialog title
pub const CONFIRM_TITLE: &str = "Delete this category?";

/// Dialog body text
pub const CONFIRM_TEXT: &str = "This cannot be undone";

/// Confirm button label
pub const CONFIRM_YES: &str = "Yes, delete";

/// Cancel button label
pub const CONFIRM_NO: &str = "Cancel";

/// Confirmation dialog for category deletion, rendered only while pending
#[component]
pub fn ConfirmDeleteDialog() -> Element {
    let api = use_context::<ApiClient>();

    let state = APP_STATE.read();
    let Some(target) = state.confirm.target().cloned() else {
        return rsx! {};
    };
    let deleting = matches!(state.confirm, ConfirmState::Deleting(_));
    let item_name = state
        .category(&target)
        .map(|c| c.name.clone())
        .unwrap_or_default();
    drop(state);

    let handle_delete = move |_| {
        let api = api.clone();
        spawn(async move {
            workflow::confirm_delete(&api, &GlobalStore).await;
        });
    };

    let handle_cancel = move |_| {
        APP_STATE.write().dismiss_delete();
    };

    rsx! {
        div {
            class: "modal-backdrop",

            div {
                class: "modal-dialog confirm-delete-dialog",

                // Header with question icon
                div {
                    class: "confirm-header",
                    div {
                        class: "confirm-icon",
                        span { "❓" }
                    }
                    div {
                        h2 { class: "confirm-title", "{CONFIRM_TITLE}" }
                        p { class: "text-muted", "{CONFIRM_TEXT}" }
                    }
                }

                // Item being deleted
                if !item_name.is_empty() {
                    div {
                        class: "confirm-item",
                        span { class: "text-muted", "Category: " }
                        span { class: "confirm-item-name", "{item_name}" }
                    }
                }

                // Actions
                div {
                    class: "modal-footer",

                    button {
                        r#type: "button",
                        class: "btn btn-secondary",
                        disabled: deleting,
                        onclick: handle_cancel,
                        "{CONFIRM_NO}"
                    }

                    button {
                        r#type: "button",
                        class: "btn btn-danger",
                        disabled: deleting,
                        onclick: handle_delete,

                        if deleting {
                            span { class: "animate-spin", "⏳" }
                            " Deleting..."
                        } else {
                            span { "🗑️" }
                            " {CONFIRM_YES}"
                        }
                    }
                }
            }
        }
    }
}
