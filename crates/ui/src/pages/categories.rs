//! Categories Page Component
//!
//! The only screen: an "Add" action above the category table, plus the form
//! modal, delete confirmation and alert toast layered over it. The list is
//! fetched once on mount and again after every successful mutation.

use catdesk_client::ApiClient;
use dioxus::prelude::*;

use crate::components::{AlertToast, CategoryModal, CategoryTable, ConfirmDeleteDialog};
use crate::state::{APP_STATE, GlobalStore};
use crate::workflow;

/// Category list with create/edit/delete
#[component]
pub fn CategoriesPage() -> Element {
    let api = use_context::<ApiClient>();

    // Initial fetch on mount
    use_hook(move || {
        spawn(async move {
            workflow::load_categories(&api, &GlobalStore).await;
        });
    });

    let count = APP_STATE.read().categories.len();

    rsx! {
        div {
            class: "page",

            div {
                class: "page-actions",
                button {
                    class: "btn btn-dark",
                    onclick: move |_| APP_STATE.write().open_create(),
                    span { "➕" }
                    " Add"
                }
                span { class: "text-muted", "{count} categories" }
            }

            CategoryTable {}

            CategoryModal {}
            ConfirmDeleteDialog {}
            AlertToast {}
        }
    }
}
