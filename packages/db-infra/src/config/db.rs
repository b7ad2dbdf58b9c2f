use std::env;
use std::path::PathBuf;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::error::DbInfraError;

/// Userinfo escaping: everything except RFC 3986 unreserved characters.
const USERINFO: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Which environment the connection is for. Test enforces the `_test` suffix
/// on Postgres database names and uses a separate SQLite file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeEnv {
    Prod,
    Test,
}

/// Storage engine backing the connection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    SqliteMemory,
}

/// Credentials to connect with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DbOwner {
    /// Application-level access (limited permissions)
    App,
    /// Owner-level access (full permissions for migrations)
    Owner,
}

impl From<DbKind> for sea_orm::DatabaseBackend {
    fn from(kind: DbKind) -> Self {
        match kind {
            DbKind::Postgres => sea_orm::DatabaseBackend::Postgres,
            DbKind::SqliteFile | DbKind::SqliteMemory => sea_orm::DatabaseBackend::Sqlite,
        }
    }
}

impl std::str::FromStr for DbKind {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "pg" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite_file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "sqlite_memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(DbInfraError::config(format!("unknown database kind '{other}'"))),
        }
    }
}

impl std::str::FromStr for RuntimeEnv {
    type Err = DbInfraError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Ok(RuntimeEnv::Prod),
            "test" => Ok(RuntimeEnv::Test),
            other => Err(DbInfraError::config(format!("unknown runtime env '{other}'"))),
        }
    }
}

/// Reads `BEQST_DB`, defaulting to Postgres when unset.
pub fn db_kind_from_env() -> Result<DbKind, DbInfraError> {
    match env::var("BEQST_DB") {
        Ok(v) if !v.trim().is_empty() => v.parse(),
        _ => Ok(DbKind::Postgres),
    }
}

/// Builds the connection string for the given environment, engine and owner.
pub fn make_conn_spec(
    env: RuntimeEnv,
    db_kind: DbKind,
    owner: DbOwner,
) -> Result<String, DbInfraError> {
    match db_kind {
        DbKind::Postgres => {
            let host = env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string());
            let port = env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string());
            let db_name = db_name(env)?;
            let (username, password) = credentials(owner)?;

            Ok(format!(
                "postgresql://{}:{}@{host}:{port}/{db_name}",
                utf8_percent_encode(&username, USERINFO),
                utf8_percent_encode(&password, USERINFO),
            ))
        }
        DbKind::SqliteFile => {
            let path = sqlite_file_path(env);
            Ok(format!("sqlite://{}?mode=rwc", path.display()))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Checks the environment for the variables the profile needs before any
/// connection attempt, so misconfiguration fails fast with a named variable.
pub fn validate_db_config(env: RuntimeEnv, db_kind: DbKind) -> Result<(), DbInfraError> {
    match db_kind {
        DbKind::Postgres => {
            db_name(env)?;
            credentials(DbOwner::Owner)?;
            Ok(())
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => Ok(()),
    }
}

/// Directory holding SQLite files (`SQLITE_DB_DIR`, default `./data/sqlite`).
pub fn sqlite_dir() -> PathBuf {
    env::var("SQLITE_DB_DIR")
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("./data/sqlite"))
}

pub fn sqlite_file_path(env: RuntimeEnv) -> PathBuf {
    let file = match env {
        RuntimeEnv::Prod => "beqst.db",
        RuntimeEnv::Test => "beqst_test.db",
    };
    sqlite_dir().join(file)
}

fn db_name(env: RuntimeEnv) -> Result<String, DbInfraError> {
    match env {
        RuntimeEnv::Prod => must_var("PROD_DB"),
        RuntimeEnv::Test => {
            let name = must_var("TEST_DB")?;
            if !name.ends_with("_test") {
                return Err(DbInfraError::config(format!(
                    "Test profile requires database name to end with '_test', but got: '{name}'"
                )));
            }
            Ok(name)
        }
    }
}

fn credentials(owner: DbOwner) -> Result<(String, String), DbInfraError> {
    match owner {
        DbOwner::App => Ok((must_var("APP_DB_USER")?, must_var("APP_DB_PASSWORD")?)),
        DbOwner::Owner => Ok((
            must_var("BEQST_OWNER_USER")?,
            must_var("BEQST_OWNER_PASSWORD")?,
        )),
    }
}

fn must_var(name: &str) -> Result<String, DbInfraError> {
    env::var(name).map_err(|_| {
        DbInfraError::config(format!("Required environment variable '{name}' is not set"))
    })
}
