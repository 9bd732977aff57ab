//! Main Application Component for Category Desk
//!
//! The root Dioxus component: applies configuration to the global state and
//! lays out the header, the categories page and the status bar.

use catdesk_client::ApiClient;
use catdesk_core::AppConfig;
use dioxus::prelude::*;

use crate::pages::CategoriesPage;
use crate::state::{APP_STATE, init_app_state};

// ============================================================================
// Main App Component
// ============================================================================

/// Root application component
#[component]
pub fn App() -> Element {
    let config = use_context::<AppConfig>();

    // Apply configuration once, before the first fetch
    use_hook(move || {
        init_app_state(&config);
        tracing::info!("Category Desk UI initialized");
    });

    rsx! {
        div {
            class: "app-container",

            Header {}

            main {
                class: "app-main",
                CategoriesPage {}
            }

            StatusBar {}
        }
    }
}

// ============================================================================
// Header Component
// ============================================================================

/// Title bar
#[component]
fn Header() -> Element {
    rsx! {
        header {
            class: "app-header",
            span { class: "app-logo", "🗂️" }
            span { class: "app-title", "Categories" }
        }
    }
}

// ============================================================================
// Status Bar Component
// ============================================================================

/// Bottom status bar: API endpoint and fetch state
#[component]
fn StatusBar() -> Element {
    let api = use_context::<ApiClient>();

    let state = APP_STATE.read();
    let loading = state.loading;
    let count = state.categories.len();
    drop(state);

    let endpoint = api.base_url().to_string();

    rsx! {
        footer {
            class: "status-bar",

            if loading {
                span { "Loading..." }
            } else {
                span { "Ready" }
            }

            // Spacer
            div { class: "flex-1" }

            span { "Categories: {count}" }
            span { class: "status-endpoint", "{endpoint}" }
        }
    }
}
