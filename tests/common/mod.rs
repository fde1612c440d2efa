#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

use movie_booking::config::{AppConfig, Config};
use movie_booking::{app, AppState};

pub fn test_config() -> Config {
    Config {
        app: AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
            rust_log: "movie_booking=debug".to_string(),
        },
    }
}

/// Build the real application router backed by a fresh in-memory store.
pub fn build_test_app() -> Router {
    app(AppState::new(test_config()))
}

pub async fn send(app: &Router, method: Method, uri: &str, body: Option<&Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: &Router, uri: &str, body: &Value) -> Response {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: &Router, uri: &str, body: &Value) -> Response {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> Response {
    send(app, Method::DELETE, uri, None).await
}

pub async fn delete_json(app: &Router, uri: &str, body: &Value) -> Response {
    send(app, Method::DELETE, uri, Some(body)).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a movie and return its id.
pub async fn seed_movie(app: &Router, title: &str) -> i64 {
    let response = post_json(
        app,
        "/admin/movies",
        &json!({ "title": title, "duration_min": 120 }),
    )
    .await;
    assert!(response.status().is_success());
    body_json(response).await["id"].as_i64().unwrap()
}

/// Create a showtime for the movie and return its id.
pub async fn seed_showtime(app: &Router, movie_id: i64, payload: Value) -> i64 {
    let response = post_json(
        app,
        &format!("/admin/movies/{movie_id}/showtimes"),
        &payload,
    )
    .await;
    assert!(response.status().is_success());
    body_json(response).await["id"].as_i64().unwrap()
}
