use crate::{
    auth::hash_password,
    error::{GradebookResult, MakeQuerySnafu},
};
use axum_login::AuthUser;
use secrecy::{ExposeSecret, SecretString};
use snafu::ResultExt;
use sqlx::SqliteConnection;

/// The account seeded on first startup. The password is a bootstrap default;
/// it is stored only as a bcrypt hash.
pub const DEFAULT_USERNAME: &str = "admin";
pub const DEFAULT_PASSWORD: &str = "admin123";

/// The single administrative principal. No endpoint creates, updates or
/// deletes teachers; the seeded row is immutable for the life of the system.
#[derive(Debug, Clone)]
pub struct Teacher {
    pub id: i64,
    pub username: String,
    pub password: SecretString,
}

impl Teacher {
    pub async fn get_by_username(
        username: &str,
        conn: &mut SqliteConnection,
    ) -> GradebookResult<Option<Self>> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, username, password FROM teachers WHERE username = ?")
                .bind(username)
                .fetch_optional(conn)
                .await
                .context(MakeQuerySnafu)?;

        Ok(row.map(|(id, username, password)| Self {
            id,
            username,
            password: SecretString::from(password),
        }))
    }

    pub async fn get_by_id(id: i64, conn: &mut SqliteConnection) -> GradebookResult<Option<Self>> {
        let row: Option<(i64, String, String)> =
            sqlx::query_as("SELECT id, username, password FROM teachers WHERE id = ?")
                .bind(id)
                .fetch_optional(conn)
                .await
                .context(MakeQuerySnafu)?;

        Ok(row.map(|(id, username, password)| Self {
            id,
            username,
            password: SecretString::from(password),
        }))
    }

    /// Inserts the default account unless a row with that username already
    /// exists. The UNIQUE constraint on `username` backstops concurrent seeds.
    pub async fn seed_default(conn: &mut SqliteConnection) -> GradebookResult<()> {
        if Self::get_by_username(DEFAULT_USERNAME, &mut *conn)
            .await?
            .is_some()
        {
            return Ok(());
        }

        let hashed = hash_password(SecretString::from(DEFAULT_PASSWORD)).await?;
        sqlx::query("INSERT INTO teachers (username, password) VALUES (?, ?)")
            .bind(DEFAULT_USERNAME)
            .bind(hashed)
            .execute(conn)
            .await
            .context(MakeQuerySnafu)?;

        info!(username = DEFAULT_USERNAME, "seeded default teacher account");
        Ok(())
    }
}

impl AuthUser for Teacher {
    type Id = i64;

    fn id(&self) -> Self::Id {
        self.id
    }

    fn session_auth_hash(&self) -> &[u8] {
        self.password.expose_secret().as_bytes()
    }
}
