mod common;

use axum_login::AuthnBackend;
use gradebook::{
    auth::backend::{GradebookAuthBackend, GradebookAuthCredentials},
    error::GradebookError,
};
use secrecy::SecretString;
use std::fs;

fn creds(username: &str, password: &str) -> GradebookAuthCredentials {
    GradebookAuthCredentials {
        username: username.to_owned(),
        password: SecretString::from(password),
    }
}

#[tokio::test]
async fn default_account_authenticates_after_fresh_bootstrap() {
    let path = common::temp_db_path("auth-ok");
    let state = common::state_at(&path).await;
    let backend = GradebookAuthBackend::new(state);

    let teacher = backend
        .authenticate(creds("admin", "admin123"))
        .await
        .expect("authentication errored")
        .expect("no principal returned");
    assert_eq!(teacher.username, "admin");

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn wrong_password_yields_bad_password() {
    let path = common::temp_db_path("auth-badpw");
    let state = common::state_at(&path).await;
    let backend = GradebookAuthBackend::new(state);

    let err = backend
        .authenticate(creds("admin", "wrong"))
        .await
        .expect_err("wrong password was accepted");
    assert!(matches!(err, GradebookError::BadPassword), "got {err:?}");

    let _ = fs::remove_file(&path);
}

#[tokio::test]
async fn unknown_username_yields_unknown_user() {
    let path = common::temp_db_path("auth-nouser");
    let state = common::state_at(&path).await;
    let backend = GradebookAuthBackend::new(state);

    let err = backend
        .authenticate(creds("nobody", "x"))
        .await
        .expect_err("unknown user was accepted");
    match err {
        GradebookError::UnknownUser { username } => assert_eq!(username, "nobody"),
        other => panic!("got {other:?}"),
    }

    let _ = fs::remove_file(&path);
}
