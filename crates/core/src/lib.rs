//! # Category Desk Core
//!
//! Core types, configuration and error handling for Category Desk.
//!
//! - **Types**: `Category`, `CategoryId`, `CategoryPayload`, `HttpMethod`
//! - **Config**: `AppConfig`, TOML-backed with environment overrides
//! - **Errors**: `CoreError` and `CoreResult`
//!

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AlertConfig, ApiConfig, AppConfig, PayloadDefaults, WindowConfig};
pub use error::{CoreError, CoreResult};
pub use types::{Category, CategoryId, CategoryPayload, HttpMethod, NAME_REQUIRED};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
