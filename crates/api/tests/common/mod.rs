#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use gg_api::config::ServerConfig;
use gg_api::router::build_app_router;
use gg_api::state::AppState;
use gg_db::store::{MemoryStore, Store};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        database_url: None,
        db_max_connections: 1,
    }
}

/// A fresh, empty in-memory store.
pub fn test_store() -> Arc<dyn Store> {
    Arc::new(MemoryStore::new())
}

/// Build the full application router over `store`, with the same
/// middleware stack as the binary.
pub fn build_test_app(store: Arc<dyn Store>) -> Router {
    let config = test_config();
    let state = AppState::new(store);
    build_app_router(state, &config)
}

async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(body)).await
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}

/// POST a body and return the created record's JSON.
pub async fn create(store: &Arc<dyn Store>, uri: &str, body: Value) -> Value {
    let response = post_json(build_test_app(Arc::clone(store)), uri, body).await;
    assert_eq!(response.status(), 200, "POST {uri} failed");
    body_json(response).await
}

pub fn fender() -> Value {
    serde_json::json!({
        "name": "Fender",
        "mainProductType": "Guitar",
        "placeFounded": "Fullerton",
        "yearFounded": 1946
    })
}
