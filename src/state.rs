use crate::{
    auth::GradebookSession,
    config::RuntimeConfiguration,
    data::teacher::Teacher,
    error::{GetDatabaseConnectionSnafu, GradebookResult, MigrateSnafu, OpenDatabaseSnafu},
    maud_conveniences::render_nav,
};
use maud::{DOCTYPE, Markup, html};
use snafu::ResultExt;
use sqlx::{Pool, Sqlite, pool::PoolConnection, sqlite::SqlitePoolOptions};
use std::ops::Deref;

#[derive(Clone, Debug)]
pub struct GradebookState {
    pool: Pool<Sqlite>,
    config: RuntimeConfiguration,
}

impl GradebookState {
    /// Opens the pool, runs the idempotent schema migration and seeds the
    /// default teacher account if no `admin` row exists yet. Safe to call
    /// against an already-initialised database file.
    pub async fn new(
        options: SqlitePoolOptions,
        config: RuntimeConfiguration,
    ) -> GradebookResult<Self> {
        let pool = options
            .connect_with(config.db_config().connect_options())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        let mut conn = pool.acquire().await.context(GetDatabaseConnectionSnafu)?;
        Teacher::seed_default(&mut conn).await?;

        Ok(Self { pool, config })
    }

    pub const fn config(&self) -> &RuntimeConfiguration {
        &self.config
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, auth_session: GradebookSession, markup: Markup) -> Markup {
        let nav = render_nav(auth_session.user);

        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Gradebook" }
                }
                body class="bg-gray-900 h-screen flex flex-col items-center justify-center text-white" {
                    (nav)
                    (markup)
                }
            }
        }
    }

    pub async fn get_connection(&self) -> GradebookResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }
}

impl Deref for GradebookState {
    type Target = Pool<Sqlite>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
