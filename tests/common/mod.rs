#![allow(dead_code)]

use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Request, Response, header},
};
use gradebook::{config::RuntimeConfiguration, state::GradebookState};
use sqlx::sqlite::SqlitePoolOptions;
use std::{
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};
use tower::ServiceExt;

pub fn temp_db_path(tag: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time before UNIX_EPOCH")
        .as_nanos();

    let mut path = std::env::temp_dir();
    path.push(format!(
        "gradebook-{tag}-{}-{nanos}.sqlite",
        std::process::id()
    ));
    path
}

pub async fn state_at(path: &Path) -> GradebookState {
    let config = RuntimeConfiguration::for_database(path);
    GradebookState::new(SqlitePoolOptions::new().max_connections(5), config)
        .await
        .expect("unable to create state")
}

pub async fn test_app(tag: &str) -> (Router, PathBuf) {
    let path = temp_db_path(tag);
    let state = state_at(&path).await;
    (gradebook::app(state), path)
}

/// Logs in as the seeded default account and returns the session cookie pair
/// to send on subsequent requests.
pub async fn login_as_admin(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/login")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("username=admin&password=admin123"))
                .expect("failed to build request"),
        )
        .await
        .expect("request failed");

    assert!(
        response.status().is_redirection(),
        "login did not redirect: {}",
        response.status()
    );

    response
        .headers()
        .get(header::SET_COOKIE)
        .expect("login set no session cookie")
        .to_str()
        .expect("cookie was not utf-8")
        .split(';')
        .next()
        .expect("empty cookie header")
        .to_owned()
}

pub fn get_request(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder
        .body(Body::empty())
        .expect("failed to build request")
}

pub fn json_request(
    method: &str,
    uri: &str,
    cookie: &str,
    body: &serde_json::Value,
) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::COOKIE, cookie)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("failed to build request")
}

pub fn delete_request(uri: &str, cookie: &str) -> Request<Body> {
    Request::builder()
        .method("DELETE")
        .uri(uri)
        .header(header::COOKIE, cookie)
        .body(Body::empty())
        .expect("failed to build request")
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    serde_json::from_slice(&bytes).expect("response body was not JSON")
}

pub async fn body_string(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("failed to read response body");
    String::from_utf8(bytes.to_vec()).expect("response body was not utf-8")
}
