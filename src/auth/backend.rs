use crate::{
    data::teacher::Teacher,
    error::{BadPasswordSnafu, BcryptSnafu, GradebookError, UnknownUserSnafu},
    state::GradebookState,
};
use async_trait::async_trait;
use axum_login::{AuthnBackend, UserId};
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;

#[derive(Clone)]
pub struct GradebookAuthBackend {
    state: GradebookState,
}

impl GradebookAuthBackend {
    pub const fn new(state: GradebookState) -> Self {
        Self { state }
    }
}

pub struct GradebookAuthCredentials {
    pub username: String,
    pub password: SecretString,
}

#[async_trait]
impl AuthnBackend for GradebookAuthBackend {
    type User = Teacher;
    type Credentials = GradebookAuthCredentials;
    type Error = GradebookError;

    /// Case-sensitive username lookup, then a salted bcrypt comparison on a
    /// blocking task. An absent row and a wrong password fail with distinct
    /// errors so the login form can name which one it was.
    async fn authenticate(
        &self,
        creds: Self::Credentials,
    ) -> Result<Option<Self::User>, Self::Error> {
        let mut conn = self.state.get_connection().await?;

        let Some(teacher) = Teacher::get_by_username(&creds.username, &mut conn).await? else {
            return UnknownUserSnafu {
                username: creds.username,
            }
            .fail();
        };

        let hash = teacher.password.expose_secret().to_owned();
        let password = creds.password;
        let password_verification_result = tokio::task::spawn_blocking(move || {
            bcrypt::verify(password.expose_secret(), &hash)
        })
        .await
        .expect("unable to join tokio task")
        .context(BcryptSnafu)?;

        if password_verification_result {
            Ok(Some(teacher))
        } else {
            BadPasswordSnafu.fail()
        }
    }

    async fn get_user(&self, user_id: &UserId<Self>) -> Result<Option<Self::User>, Self::Error> {
        let mut conn = self.state.get_connection().await?;
        Teacher::get_by_id(*user_id, &mut conn).await
    }
}
