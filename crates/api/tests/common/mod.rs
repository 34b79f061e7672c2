#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use postline_api::config::ServerConfig;
use postline_api::router::build_app_router;
use postline_api::state::AppState;
use postline_db::{MemoryGateway, PostGateway};

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        database_url: None,
    }
}

/// Build the full application router over `gateway`, with the same
/// middleware stack production uses.
pub fn build_test_app(gateway: Arc<dyn PostGateway>) -> Router {
    build_app_router(AppState::new(gateway, test_config()))
}

/// Router over a fresh, empty in-memory store. Clone it to send several
/// requests against the same data.
pub fn memory_app() -> Router {
    build_test_app(Arc::new(MemoryGateway::new()))
}

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::POST, uri, body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, json_request(Method::PUT, uri, body)).await
}

fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Read the response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a post through the API and return its id.
pub async fn create_post(app: &Router, title: &str, contents: &str) -> i64 {
    let response = post_json(
        app.clone(),
        "/api/posts",
        serde_json::json!({"title": title, "contents": contents}),
    )
    .await;
    body_json(response).await["data"]["id"].as_i64().unwrap()
}
