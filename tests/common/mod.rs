//! Shared helpers for driving the router in integration tests.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use bookshelf::rest::{AppState, HttpServer, ServerConfig};
use bookshelf::store::Store;

/// Build an application router with default configuration.
pub fn app() -> Router {
    app_with(ServerConfig::default())
}

/// Build an application router with the given configuration.
pub fn app_with(config: ServerConfig) -> Router {
    let store = Store::open(&config.database);
    let state = Arc::new(AppState::new(&store, &config).expect("state"));
    HttpServer::new(state, config).router()
}

/// Issue one request and decode the JSON response body.
pub async fn request(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(json) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).expect("request"))
        .await
        .expect("response");

    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body")
        .to_bytes();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("json body")
    };

    (status, value)
}

/// POST a document and return its generated id, asserting 201.
pub async fn create(app: &Router, path: &str, body: Value) -> String {
    let (status, created) = request(app, "POST", path, Some(body)).await;
    assert_eq!(status, StatusCode::CREATED, "create failed: {created}");
    created["_id"].as_str().expect("_id").to_string()
}
