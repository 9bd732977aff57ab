//! reqwest-backed implementation of [`CategoryApi`]

use async_trait::async_trait;
use catdesk_core::{ApiConfig, Category, HttpMethod};
use reqwest::header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::error::{ClientError, ClientResult};
use crate::request::{COLLECTION_PATH, CategoryApi, CategoryRequest};

// ============================================================================
// API Client
// ============================================================================

/// HTTP client for the categories REST API.
///
/// Every request is sent with `Content-Type: application/json` and
/// `Accept: application/json`.
///
/// # Example
///
/// ```rust,ignore
/// let client = ApiClient::new(&config.api)?;
/// let categories = client.fetch_all().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// The underlying reqwest HTTP client.
    client: Client,
    /// API root without a trailing slash (e.g. `https://api.escuelajs.co/api/v1`).
    base_url: String,
    /// `base_url`, parsed
    root: Url,
}

impl ApiClient {
    /// Create a client from the `[api]` config section.
    pub fn new(config: &ApiConfig) -> ClientResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let mut builder = Client::builder().default_headers(headers);
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();
        let root = Url::parse(&base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if root.cannot_be_a_base() {
            return Err(ClientError::InvalidUrl(base_url));
        }

        Ok(Self {
            client: builder.build()?,
            base_url,
            root,
        })
    }

    /// Create a client for a base URL with no timeout.
    pub fn with_base_url(base_url: impl Into<String>) -> ClientResult<Self> {
        Self::new(&ApiConfig {
            base_url: base_url.into(),
            request_timeout_secs: None,
        })
    }

    /// API root this client talks to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build the full URL for an API path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Full URL for a mutating request.
    ///
    /// The category id is appended as a single percent-encoded path segment,
    /// so ids containing `/` or `?` stay inside the item path.
    pub fn request_url(&self, request: &CategoryRequest) -> ClientResult<Url> {
        let mut url = self.root.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .pop_if_empty()
            .push(COLLECTION_PATH.trim_start_matches('/'))
            .push(request.target().map_or("", |id| id.as_str()));
        Ok(url)
    }

    /// Map a non-2xx response to [`ClientError::Api`].
    async fn check_status(response: Response) -> ClientResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.bytes().await.unwrap_or_default();
        Err(ClientError::from_response_body(status.as_u16(), &body))
    }

    /// Read a success body into `T`.
    async fn decode<T: DeserializeOwned>(response: Response) -> ClientResult<T> {
        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ClientError::Parse(e.to_string()))
    }
}

fn reqwest_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
        HttpMethod::Put => Method::PUT,
        HttpMethod::Delete => Method::DELETE,
    }
}

#[async_trait]
impl CategoryApi for ApiClient {
    async fn fetch_all(&self) -> ClientResult<Vec<Category>> {
        let url = self.url(COLLECTION_PATH);
        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).send().await?;
        let response = Self::check_status(response).await?;
        Self::decode(response).await
    }

    async fn submit(&self, request: &CategoryRequest) -> ClientResult<()> {
        let method = request.method();
        let url = self.request_url(request)?;
        tracing::debug!("{} {}", method, url);

        let mut builder = self.client.request(reqwest_method(method), url);
        if let Some(payload) = request.payload() {
            builder = builder.json(payload);
        }

        let response = builder.send().await?;
        Self::check_status(response).await?;
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use catdesk_core::{CategoryId, CategoryPayload};

    #[test]
    fn test_url_building() {
        let client = ApiClient::with_base_url("https://api.escuelajs.co/api/v1/").unwrap();
        assert_eq!(client.base_url(), "https://api.escuelajs.co/api/v1");
        assert_eq!(
            client.url(COLLECTION_PATH),
            "https://api.escuelajs.co/api/v1/categories"
        );
    }

    #[test]
    fn test_request_url() {
        let client = ApiClient::with_base_url("https://api.escuelajs.co/api/v1").unwrap();
        let payload = CategoryPayload::new("Hats", 6, "http://placeholder/img.png");

        let create = CategoryRequest::Create(payload.clone());
        assert_eq!(
            client.request_url(&create).unwrap().as_str(),
            "https://api.escuelajs.co/api/v1/categories/"
        );

        let update = CategoryRequest::Update(CategoryId::from(5), payload);
        assert_eq!(
            client.request_url(&update).unwrap().as_str(),
            "https://api.escuelajs.co/api/v1/categories/5"
        );
    }

    #[test]
    fn test_request_url_encodes_id_segment() {
        let client = ApiClient::with_base_url("http://localhost:3000").unwrap();
        let delete = CategoryRequest::Delete(CategoryId::new("a/b?c"));

        let url = client.request_url(&delete).unwrap();
        assert_eq!(url.path(), "/categories/a%2Fb%3Fc");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn test_invalid_base_url() {
        let err = ApiClient::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidUrl(_)));
        assert!(ApiClient::with_base_url("mailto:someone@example.com").is_err());
    }

    #[test]
    fn test_method_mapping() {
        assert_eq!(reqwest_method(HttpMethod::Post), Method::POST);
        assert_eq!(reqwest_method(HttpMethod::Put), Method::PUT);
        assert_eq!(reqwest_method(HttpMethod::Delete), Method::DELETE);
        assert_eq!(reqwest_method(HttpMethod::Get), Method::GET);
    }

    #[test]
    fn test_timeout_config_builds() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:3000".to_string(),
            request_timeout_secs: Some(5),
        });
        assert!(client.is_ok());
    }
}
