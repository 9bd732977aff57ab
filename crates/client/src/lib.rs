//! # Category Desk Client
//!
//! HTTP access to the categories REST API.
//!
//! - [`CategoryApi`]: the async seam the UI workflows are written against
//! - [`CategoryRequest`]: create / edit / delete, with method, path and body
//! - [`ApiClient`]: the reqwest implementation
//! - [`ClientError`]: transport, API and parse failures
//!

pub mod client;
pub mod error;
pub mod request;

pub use client::ApiClient;
pub use error::{ClientError, ClientResult};
pub use request::{COLLECTION_PATH, CategoryApi, CategoryRequest};

// Re-export for implementors of `CategoryApi`
pub use async_trait::async_trait;
