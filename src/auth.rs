use crate::{
    auth::backend::GradebookAuthBackend,
    error::{BcryptSnafu, GradebookResult},
};
use axum_login::AuthSession;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;

pub mod backend;
pub mod sqlite_store;

pub type GradebookSession = AuthSession<GradebookAuthBackend>;

/// bcrypt with the default cost, run off the async runtime.
pub async fn hash_password(password: SecretString) -> GradebookResult<String> {
    tokio::task::spawn_blocking(move || {
        bcrypt::hash(password.expose_secret(), bcrypt::DEFAULT_COST)
    })
    .await
    .expect("unable to join tokio task")
    .context(BcryptSnafu)
}
