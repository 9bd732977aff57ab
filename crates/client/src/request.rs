//! Mutating requests and the `CategoryApi` seam
//!
//! A [`CategoryRequest`] fixes the method, path and body of one create, edit
//! or delete call. Workflows build requests from UI state and hand them to
//! any [`CategoryApi`] implementation.

use async_trait::async_trait;
use catdesk_core::{Category, CategoryId, CategoryPayload, HttpMethod};

use crate::error::ClientResult;

/// Collection path, relative to the API base URL
pub const COLLECTION_PATH: &str = "/categories";

/// One mutating call against the collection endpoint
#[derive(Debug, Clone, PartialEq)]
pub enum CategoryRequest {
    /// `POST /categories/`
    Create(CategoryPayload),
    /// `PUT /categories/{id}`
    Update(CategoryId, CategoryPayload),
    /// `DELETE /categories/{id}`
    Delete(CategoryId),
}

impl CategoryRequest {
    /// HTTP method for this request
    pub fn method(&self) -> HttpMethod {
        match self {
            CategoryRequest::Create(_) => HttpMethod::Post,
            CategoryRequest::Update(..) => HttpMethod::Put,
            CategoryRequest::Delete(_) => HttpMethod::Delete,
        }
    }

    /// Path relative to the API base URL.
    ///
    /// Create targets the collection with a trailing slash, which is the
    /// form the API documents for POST.
    pub fn path(&self) -> String {
        match self {
            CategoryRequest::Create(_) => format!("{}/", COLLECTION_PATH),
            CategoryRequest::Update(id, _) | CategoryRequest::Delete(id) => {
                format!("{}/{}", COLLECTION_PATH, id)
            }
        }
    }

    /// JSON body, if the method carries one
    pub fn payload(&self) -> Option<&CategoryPayload> {
        match self {
            CategoryRequest::Create(payload) | CategoryRequest::Update(_, payload) => Some(payload),
            CategoryRequest::Delete(_) => None,
        }
    }

    /// Target id for edit and delete
    pub fn target(&self) -> Option<&CategoryId> {
        match self {
            CategoryRequest::Create(_) => None,
            CategoryRequest::Update(id, _) | CategoryRequest::Delete(id) => Some(id),
        }
    }
}

/// Operations the UI needs from the categories API
#[async_trait]
pub trait CategoryApi: Send + Sync {
    /// `GET /categories`
    async fn fetch_all(&self) -> ClientResult<Vec<Category>>;

    /// Send a create, edit or delete. Response bodies are discarded.
    async fn submit(&self, request: &CategoryRequest) -> ClientResult<()>;
}

// ============================================================================
// Tests
// ============================================================================
