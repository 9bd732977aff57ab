//! # Category Desk UI
//!
//! Dioxus Desktop UI for Category Desk.
//!
//! One window listing the categories of the remote API, with a modal form
//! for registering and editing, a confirmation step before deleting, and a
//! transient toast for feedback.
//!

// ============================================================================
// Modules
// ============================================================================

pub mod alerts;
pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod workflow;

// ============================================================================
// Re-exports
// ============================================================================

// Re-export internal crates for convenience
pub use catdesk_client;
pub use catdesk_core;

pub use alerts::{Alert, AlertKind, AlertSlot, ExpiryTimer, NAME_REQUIRED, success_message};
pub use app::App;
pub use pages::CategoriesPage;
pub use state::{
    APP_STATE, AppState, CategoryForm, ConfirmState, FormMode, GlobalStore, ModalState,
    init_app_state,
};
pub use workflow::StateStore;

pub use components::{
    AlertToast, CategoryModal, CategoryRow, CategoryTable, ConfirmDeleteDialog, NO_IMAGE,
    RowImage, category_rows,
};

use catdesk_client::{ApiClient, ClientResult};
use catdesk_core::AppConfig;

// ============================================================================
// Constants
// ============================================================================

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const NAME: &str = "Category Desk";

/// Default window title
pub const TITLE: &str = "Category Desk - Categories";

/// CSS styles for the application, embedded at build time
const STYLES: &str = include_str!("../../../assets/styles/main.css");

// ============================================================================
// Launch Function
// ============================================================================

/// Launch the Category Desk desktop application
///
/// Builds the HTTP client from `config.api` and hands both the client and the
/// configuration to the component tree as context. Blocks until the window
/// is closed.
///
/// # Example
///
/// ```rust,ignore
/// let config = catdesk_core::AppConfig::load()?;
/// catdesk_ui::launch(config)?;
/// ```
pub fn launch(config: AppConfig) -> ClientResult<()> {
    tracing::info!("Starting {} v{}", NAME, VERSION);

    let client = ApiClient::new(&config.api)?;
    tracing::info!(base_url = %client.base_url(), "API client ready");

    let title = window_title(&config);
    let custom_head = format!(r#"<style type="text/css">{}</style>"#, STYLES);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(
                    dioxus::desktop::WindowBuilder::new()
                        .with_title(title)
                        .with_resizable(true)
                        .with_inner_size(dioxus::desktop::LogicalSize::new(
                            config.window.width,
                            config.window.height,
                        ))
                        .with_min_inner_size(dioxus::desktop::LogicalSize::new(640.0, 480.0)),
                )
                .with_menu(None)
                .with_custom_head(custom_head),
        )
        .with_context(client)
        .with_context(config)
        .launch(App);

    Ok(())
}

/// Window title from configuration, falling back to [`TITLE`] when blank
fn window_title(config: &AppConfig) -> String {
    let title = config.window.title.trim();
    if title.is_empty() {
        TITLE.to_string()
    } else {
        title.to_string()
    }
}

// ============================================================================
// Tests
// ============================================================================
