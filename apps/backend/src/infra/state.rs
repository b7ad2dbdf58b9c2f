use db_infra::{bootstrap_db, DbInfraError};
use tracing::info;

use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;
use crate::state::app_state::AppState;
use crate::state::security_config::SecurityConfig;

/// Builds `AppState` for both the binary and the tests.
pub struct StateBuilder {
    security_config: SecurityConfig,
    env: RuntimeEnv,
    db_kind: Option<DbKind>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self {
            security_config: SecurityConfig::default(),
            env: RuntimeEnv::Test,
            db_kind: None,
        }
    }

    pub fn with_env(mut self, env: RuntimeEnv) -> Self {
        self.env = env;
        self
    }

    pub fn with_db(mut self, db_kind: DbKind) -> Self {
        self.db_kind = Some(db_kind);
        self
    }

    pub fn with_security(mut self, security_config: SecurityConfig) -> Self {
        self.security_config = security_config;
        self
    }

    /// Connects and migrates when a database was requested.
    pub async fn build(self) -> Result<AppState, AppError> {
        match self.db_kind {
            Some(db_kind) => {
                let conn = bootstrap_db(self.env, db_kind).await.map_err(|e| match e {
                    DbInfraError::Connect { .. } => {
                        tracing::error!(error = %e, "database connection failed");
                        AppError::db_unavailable()
                    }
                    other => AppError::config(other.to_string()),
                })?;
                info!(env = ?self.env, db_kind = ?db_kind, "database ready");
                Ok(AppState::new(conn, self.security_config))
            }
            None => Ok(AppState::new_without_db(self.security_config)),
        }
    }
}

impl Default for StateBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
