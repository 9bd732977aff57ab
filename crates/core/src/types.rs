//! Domain types for Category Desk
//!
//! The wire shapes exchanged with the categories REST API. Everything here
//! is decoded through serde so a malformed server response is rejected at
//! the boundary instead of surfacing as a missing field later.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Message for a create/edit submitted without a name
pub const NAME_REQUIRED: &str = "Enter the category name";

// ============================================================================
// Identifiers
// ============================================================================

/// Server-assigned category identifier.
///
/// The API sends integers, but the id is treated as opaque: numbers and
/// strings both decode, and the value is only ever echoed back in URLs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawCategoryId")]
pub struct CategoryId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCategoryId {
    Number(i64),
    Text(String),
}

impl From<RawCategoryId> for CategoryId {
    fn from(raw: RawCategoryId) -> Self {
        match raw {
            RawCategoryId::Number(n) => CategoryId(n.to_string()),
            RawCategoryId::Text(s) => CategoryId(s),
        }
    }
}

impl CategoryId {
    /// Wrap an id value
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as it appears in a request path
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<i64> for CategoryId {
    fn from(id: i64) -> Self {
        Self(id.to_string())
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for CategoryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Category
// ============================================================================

/// A persisted category as returned by `GET /categories`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Server-assigned id
    pub id: CategoryId,
    /// Display name
    pub name: String,
    /// Image URLs, in server order
    #[serde(default)]
    pub images: Vec<String>,
}

impl Category {
    /// Create a category value
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            images: Vec::new(),
        }
    }

    /// Builder: append an image URL
    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    /// First image URL, if any
    pub fn first_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }
}

// ============================================================================
// Request Payload
// ============================================================================

/// JSON body sent with create (POST) and edit (PUT) requests
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(rename = "categoryId")]
    pub category_id: u32,
    pub images: Vec<String>,
}

impl CategoryPayload {
    /// Build a payload carrying a single image
    pub fn new(name: impl Into<String>, category_id: u32, image_url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category_id,
            images: vec![image_url.into()],
        }
    }

    /// Presence check for the name field. Whitespace-only counts as empty.
    pub fn validate_name(name: &str) -> CoreResult<()> {
        if name.trim().is_empty() {
            return Err(CoreError::validation("name", NAME_REQUIRED));
        }
        Ok(())
    }
}

// ============================================================================
// HTTP Method
// ============================================================================

/// HTTP methods used against the categories API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Uppercase method name
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// Whether this method changes server state
    pub fn is_mutation(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_category_decodes_numeric_id() {
        let json = r#"{"id":1,"name":"Shoes","images":["http://img/1.png"]}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id, CategoryId::from(1));
        assert_eq!(category.name, "Shoes");
        assert_eq!(category.first_image(), Some("http://img/1.png"));
    }

    #[test]
    fn test_category_decodes_string_id_and_ignores_extra_fields() {
        let json = r#"{"id":"abc","name":"Hats","slug":"hats","creationAt":"2024-01-01T00:00:00Z"}"#;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.id.as_str(), "abc");
        assert!(category.images.is_empty());
        assert_eq!(category.first_image(), None);
    }

    #[test]
    fn test_category_missing_name_is_rejected() {
        let json = r#"{"id":3,"images":[]}"#;
        assert!(serde_json::from_str::<Category>(json).is_err());
    }

    #[test]
    fn test_payload_wire_shape() {
        let payload = CategoryPayload::new("Hats", 6, "http://placeholder/img.png");
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Hats",
                "categoryId": 6,
                "images": ["http://placeholder/img.png"]
            })
        );
    }

    #[test]
    fn test_validate_name() {
        assert!(CategoryPayload::validate_name("Shoes").is_ok());

        for blank in ["", "   ", "\t"] {
            let err = CategoryPayload::validate_name(blank).unwrap_err();
            assert!(err.is_validation());
            assert_eq!(err.field(), Some("name"));
        }
    }

    #[test]
    fn test_http_method() {
        assert_eq!(HttpMethod::Post.to_string(), "POST");
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
        assert!(HttpMethod::Put.is_mutation());
        assert!(!HttpMethod::Get.is_mutation());
    }
}
