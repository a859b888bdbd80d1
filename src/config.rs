use crate::error::{GradebookError, GradebookResult};
use dotenvy::var;
use sqlx::sqlite::SqliteConnectOptions;
use std::{env::VarError, path::PathBuf, sync::Arc};

/// Reads an env var, falling back to `default` when it simply isn't set.
fn var_or(name: &'static str, default: &str) -> GradebookResult<String> {
    match var(name) {
        Ok(value) => Ok(value),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(default.to_owned()),
        Err(source) => Err(GradebookError::BadEnvVar { source, name }),
    }
}

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    db_config: Arc<DbConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> GradebookResult<Self> {
        Ok(Self {
            db_config: Arc::new(DbConfig::new()?),
            server_ip: var_or("GRADEBOOK_SERVER_IP", "127.0.0.1:8080")?,
        })
    }

    /// Configuration pointing at a specific database file, for tests and tools
    /// that don't want env lookups.
    pub fn for_database(path: impl Into<PathBuf>) -> Self {
        Self {
            db_config: Arc::new(DbConfig { path: path.into() }),
            server_ip: "127.0.0.1:8080".to_owned(),
        }
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

#[derive(Debug)]
pub struct DbConfig {
    path: PathBuf,
}

impl DbConfig {
    fn new() -> GradebookResult<Self> {
        Ok(Self {
            path: var_or("GRADEBOOK_DB_PATH", "students.db")?.into(),
        })
    }

    pub fn connect_options(&self) -> SqliteConnectOptions {
        SqliteConnectOptions::new()
            .filename(&self.path)
            .create_if_missing(true)
    }
}
