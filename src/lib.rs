#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    auth::{backend::GradebookAuthBackend, sqlite_store::SqliteSessionStore},
    routes::{
        dashboard::get_dashboard,
        index::get_index_route,
        login::{get_login, get_logout, post_login},
        students::{delete_student, get_student, get_students, post_student, put_student},
    },
    state::GradebookState,
};
use axum::{
    Router,
    routing::get,
};
use axum_login::{
    AuthManagerLayerBuilder,
    tower_sessions::{Expiry, SessionManagerLayer, cookie::time::Duration},
};
use tower_http::trace::TraceLayer;

#[macro_use]
extern crate tracing;

pub mod auth;
pub mod config;
pub mod data;
pub mod error;
pub mod maud_conveniences;
pub mod routes;
pub mod state;

/// Builds the full application router, including the session and auth layers.
///
/// Sessions live server-side in the sqlite `sessions` table; the cookie only
/// carries a random session id, so no signing secret is embedded anywhere.
pub fn app(state: GradebookState) -> Router {
    let session_store = SqliteSessionStore::new(state.clone());
    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(5)));
    let auth_backend = GradebookAuthBackend::new(state.clone());
    let auth_layer = AuthManagerLayerBuilder::new(auth_backend, session_layer).build();

    let trace_layer = TraceLayer::new_for_http();

    Router::new()
        .route("/", get(get_index_route))
        .route("/login", get(get_login).post(post_login))
        .route("/logout", get(get_logout))
        .route("/dashboard", get(get_dashboard))
        .route(
            "/api/students",
            get(get_students).post(post_student).put(put_student),
        )
        .route("/api/students/{id}", get(get_student).delete(delete_student))
        .layer(auth_layer)
        .layer(trace_layer)
        .with_state(state)
}
