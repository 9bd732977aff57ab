//! Category Desk
//!
//! Desktop CRUD client for the categories REST API.
//!
//! This is the main entry point for the Dioxus Desktop application.

use anyhow::Context;
use catdesk_core::AppConfig;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default level
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = AppConfig::load().context("failed to load configuration")?;
    tracing::info!(base_url = %config.api.base_url, "configuration loaded");

    // Launch the Dioxus desktop application
    catdesk_ui::launch(config).context("failed to start the UI")?;

    Ok(())
}
