use crate::auth::backend::GradebookAuthBackend;
use axum::{
    Json,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use maud::html;
use serde_json::json;
use snafu::Snafu;

pub type GradebookResult<T> = Result<T, GradebookError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum GradebookError {
    #[snafu(display("Error opening database"))]
    OpenDatabase { source: sqlx::Error },
    #[snafu(display("Error getting db connection"))]
    GetDatabaseConnection { source: sqlx::Error },
    #[snafu(display("Error making SQL query"))]
    MakeQuery { source: sqlx::Error },
    #[snafu(display("Error migrating DB schema"))]
    MigrateError { source: sqlx::migrate::MigrateError },
    #[snafu(display("Error serialising with rmp_serde"))]
    RmpSerdeEncode { source: rmp_serde::encode::Error },
    #[snafu(display("Error deserialising with rmp_serde"))]
    RmpSerdeDecode { source: rmp_serde::decode::Error },
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to find student with id: {}", id))]
    MissingStudent { id: i64 },
    #[snafu(display("No teacher with username: {:?}", username))]
    UnknownUser { username: String },
    #[snafu(display("Password did not match the stored hash"))]
    BadPassword,
    #[snafu(display("No authenticated session on a guarded route"))]
    NotLoggedIn,
    #[snafu(display("Malformed student payload: {}", source))]
    InvalidBody { source: serde_json::Error },
    #[snafu(display("Field `{}` must not be empty", field))]
    EmptyField { field: &'static str },
    #[snafu(display("Error with hashing/password verification"))]
    Bcrypt { source: bcrypt::BcryptError },
    #[snafu(display("Error with sessions"))]
    TowerSession {
        source: axum_login::tower_sessions::session::Error,
    },
    #[snafu(display("Session expiry timestamp {} out of range", timestamp))]
    InvalidExpiry {
        source: axum_login::tower_sessions::cookie::time::error::ComponentRange,
        timestamp: i64,
    },
}

impl From<axum_login::Error<GradebookAuthBackend>> for GradebookError {
    fn from(value: axum_login::Error<GradebookAuthBackend>) -> Self {
        match value {
            axum_login::Error::Session(source) => Self::TowerSession { source },
            axum_login::Error::Backend(backend) => backend,
        }
    }
}

impl IntoResponse for GradebookError {
    fn into_response(self) -> Response {
        const ISE: StatusCode = StatusCode::INTERNAL_SERVER_ERROR;
        const NF: StatusCode = StatusCode::NOT_FOUND;
        const UNAUTH: StatusCode = StatusCode::UNAUTHORIZED;
        const BI: StatusCode = StatusCode::UNPROCESSABLE_ENTITY; //bad input

        error!(?self, "Error!");

        // the record API speaks JSON; everything else gets the page fragment
        match &self {
            Self::MissingStudent { .. } => {
                (NF, Json(json!({"error": "Student not found"}))).into_response()
            }
            Self::InvalidBody { source } => (
                BI,
                Json(json!({"error": format!("Malformed student payload: {source}")})),
            )
                .into_response(),
            Self::EmptyField { field } => (
                BI,
                Json(json!({"error": format!("Field `{field}` must not be empty")})),
            )
                .into_response(),
            Self::NotLoggedIn => {
                (UNAUTH, Json(json!({"error": "Authentication required"}))).into_response()
            }
            // these are re-rendered inline by the login route; if one escapes,
            // don't leak which half of the credential pair was wrong
            Self::UnknownUser { .. } | Self::BadPassword => {
                (UNAUTH, Json(json!({"error": "Invalid credentials"}))).into_response()
            }
            _ => {
                let desc = self.to_string();
                let markup = html! {
                    div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded relative mb-4" role="alert" {
                        strong class="font-bold" {"Gradebook Error"}
                        span {(desc)}
                    }
                };
                (ISE, Html(markup.into_string())).into_response()
            }
        }
    }
}
