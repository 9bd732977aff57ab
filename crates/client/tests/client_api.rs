//! Integration tests for `ApiClient`.
//!
//! Each test runs the real reqwest client against an axum router bound to an
//! ephemeral port. The router records every request and answers with
//! scripted responses in order.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use axum::Router;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::header::{ACCEPT, CONTENT_TYPE};
use axum::http::{HeaderMap, HeaderName, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};

use catdesk_client::{ApiClient, CategoryApi, CategoryRequest, ClientError};
use catdesk_core::{CategoryId, CategoryPayload};

const PLACEHOLDER: &str = "https://api.lorem.space/image/fashion?w=640&h=480&r=4278";

// ---------------------------------------------------------------------------
// Test server
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Seen {
    method: Method,
    path: String,
    content_type: Option<String>,
    accept: Option<String>,
    body: Option<Value>,
}

#[derive(Clone, Default)]
struct Script {
    seen: Arc<Mutex<Vec<Seen>>>,
    replies: Arc<Mutex<VecDeque<(StatusCode, String)>>>,
}

async fn record(
    State(script): State<Script>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let header = |name: HeaderName| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };

    script.seen.lock().unwrap().push(Seen {
        method,
        path: uri.path().to_string(),
        content_type: header(CONTENT_TYPE),
        accept: header(ACCEPT),
        body: serde_json::from_slice(&body).ok(),
    });

    let (status, body) = script
        .replies
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or((StatusCode::OK, "{}".to_string()));

    (status, [(CONTENT_TYPE, "application/json")], body).into_response()
}

/// Start a scripted server and return a client pointed at it.
async fn serve(replies: Vec<(StatusCode, Value)>) -> (ApiClient, Script) {
    let script = Script::default();
    script
        .replies
        .lock()
        .unwrap()
        .extend(replies.into_iter().map(|(s, v)| (s, v.to_string())));

    let app = Router::new().fallback(record).with_state(script.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let client = ApiClient::with_base_url(format!("http://{}/api/v1", addr)).unwrap();
    (client, script)
}

fn seen(script: &Script) -> Vec<Seen> {
    script.seen.lock().unwrap().clone()
}

// ---------------------------------------------------------------------------
// fetch_all
// ---------------------------------------------------------------------------

#[tokio::test]
async fn fetch_all_decodes_categories() {
    let (client, script) = serve(vec![(
        StatusCode::OK,
        json!([
            {"id": 1, "name": "Shoes", "images": ["http://img/1.png"], "slug": "shoes"},
            {"id": 2, "name": "Misc"}
        ]),
    )])
    .await;

    let categories = client.fetch_all().await.unwrap();

    assert_eq!(categories.len(), 2);
    assert_eq!(categories[0].id, CategoryId::from(1));
    assert_eq!(categories[0].name, "Shoes");
    assert_eq!(categories[0].first_image(), Some("http://img/1.png"));
    assert!(categories[1].images.is_empty());

    let requests = seen(&script);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::GET);
    assert_eq!(requests[0].path, "/api/v1/categories");
    assert_eq!(requests[0].accept.as_deref(), Some("application/json"));
}

#[tokio::test]
async fn fetch_all_rejects_malformed_body() {
    let (client, _script) = serve(vec![(StatusCode::OK, json!([{"id": 1}]))]).await;

    let err = client.fetch_all().await.unwrap_err();

    assert!(matches!(err, ClientError::Parse(_)));
}

// ---------------------------------------------------------------------------
// submit
// ---------------------------------------------------------------------------

#[tokio::test]
async fn create_posts_json_to_collection() {
    let (client, script) = serve(vec![(
        StatusCode::CREATED,
        json!({"id": 9, "name": "Hats", "images": [PLACEHOLDER]}),
    )])
    .await;

    let request = CategoryRequest::Create(CategoryPayload::new("Hats", 6, PLACEHOLDER));
    client.submit(&request).await.unwrap();

    let requests = seen(&script);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::POST);
    assert_eq!(requests[0].path, "/api/v1/categories/");
    assert_eq!(requests[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(requests[0].accept.as_deref(), Some("application/json"));
    assert_eq!(
        requests[0].body,
        Some(json!({"name": "Hats", "categoryId": 6, "images": [PLACEHOLDER]}))
    );
}

#[tokio::test]
async fn update_puts_to_item_path() {
    let (client, script) = serve(vec![(StatusCode::OK, json!({"id": 5, "name": "Caps"}))]).await;

    let request = CategoryRequest::Update(
        CategoryId::from(5),
        CategoryPayload::new("Caps", 6, PLACEHOLDER),
    );
    client.submit(&request).await.unwrap();

    let requests = seen(&script);
    assert_eq!(requests[0].method, Method::PUT);
    assert_eq!(requests[0].path, "/api/v1/categories/5");
    assert_eq!(requests[0].body.as_ref().unwrap()["name"], "Caps");
}

#[tokio::test]
async fn text_id_stays_in_one_path_segment() {
    let (client, script) = serve(vec![(StatusCode::OK, json!(true))]).await;

    client
        .submit(&CategoryRequest::Delete(CategoryId::new("a/b?c")))
        .await
        .unwrap();

    let requests = seen(&script);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, "/api/v1/categories/a%2Fb%3Fc");
}

#[tokio::test]
async fn delete_not_found_surfaces_server_message() {
    let (client, script) = serve(vec![(
        StatusCode::NOT_FOUND,
        json!({"message": "not found"}),
    )])
    .await;

    let err = client
        .submit(&CategoryRequest::Delete(CategoryId::from(5)))
        .await
        .unwrap_err();

    assert!(err.is_not_found());
    assert_eq!(err.user_message(), "not found");

    let requests = seen(&script);
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::DELETE);
    assert_eq!(requests[0].path, "/api/v1/categories/5");
    assert_eq!(requests[0].body, None);
}

#[tokio::test]
async fn validation_error_list_is_joined() {
    let (client, _script) = serve(vec![(
        StatusCode::BAD_REQUEST,
        json!({"statusCode": 400, "message": ["name should not be empty"], "error": "Bad Request"}),
    )])
    .await;

    let request = CategoryRequest::Create(CategoryPayload::new("", 6, PLACEHOLDER));
    let err = client.submit(&request).await.unwrap_err();

    assert_eq!(err.status(), Some(400));
    assert_eq!(err.user_message(), "name should not be empty");
}

#[tokio::test]
async fn connection_refused_is_request_error() {
    // Bind then drop to get a port with nothing listening.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = ApiClient::with_base_url(format!("http://{}", addr)).unwrap();
    let err = client.fetch_all().await.unwrap_err();

    assert!(matches!(err, ClientError::Request(_)));
    assert_eq!(
        err.user_message(),
        "Unable to connect to the server. Please check your connection."
    );
}
