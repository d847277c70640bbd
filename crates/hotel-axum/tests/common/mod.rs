//! Shared helpers for hotel-axum integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use hotel_axum::{AxumContext, CorsConfig, create_router};
use hotel_db::TestDb;

/// Router backed by a fresh in-memory database.
pub async fn test_app() -> Router {
    let db = TestDb::new().await.unwrap();
    create_router(AxumContext::from_pool(db.pool().clone()), &CorsConfig::AllowAll)
}

/// Send a request and decode the JSON response body.
pub async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let (status, bytes) = send_raw(
        app,
        method,
        uri,
        body.map(|b| b.to_string()).unwrap_or_default(),
    )
    .await;

    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

/// Send a request with a raw JSON body and return the raw response bytes.
pub async fn send_raw(app: &Router, method: Method, uri: &str, body: String) -> (StatusCode, Vec<u8>) {
    send_typed(app, method, uri, "application/json", body).await
}

/// Send a request with an explicit content type and return the raw response bytes.
pub async fn send_typed(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: &str,
    body: String,
) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, bytes.to_vec())
}
