#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::Value;
use tower::ServiceExt;
use wishlist_backend::{app, AppState, DatabaseConfig, Priority, WishIn, WishStore};

/// Fresh private in-memory database with the table created.
pub async fn memory_store() -> WishStore {
    let store = WishStore::connect(&DatabaseConfig::sqlite(":memory:")).await.unwrap();
    store.ensure_schema().await.unwrap();
    store
}

pub async fn test_app() -> (Router, WishStore) {
    let store = memory_store().await;
    (app(AppState::new(store.clone())), store)
}

pub fn wish_in(product: &str, price: f64, priority: Priority) -> WishIn {
    WishIn {
        product: product.to_string(),
        price,
        url: format!("http://shop.example/{}", product.to_lowercase()),
        priority,
    }
}

/// Send one request; returns status and the body parsed as JSON (Null when empty).
pub async fn send(router: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = router.clone().oneshot(builder.body(body).unwrap()).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}
