//! Server configuration read from the environment at startup.

use std::str::FromStr;

use crate::config::db::{DbKind, RuntimeEnv};
use crate::error::AppError;

pub const MIN_JWT_SECRET_LEN: usize = 32;
const DEFAULT_MAX_JSON_PAYLOAD: usize = 256 * 1024;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub runtime_env: RuntimeEnv,
    pub db_kind: DbKind,
    pub jwt_secret: String,
    pub max_json_payload_size: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup; `from_env` passes `std::env::var`.
    pub fn from_lookup<F>(get: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = get("BACKEND_HOST").unwrap_or_else(|| "0.0.0.0".to_string());

        let port_raw = get("BACKEND_PORT").unwrap_or_else(|| "3001".to_string());
        let port = port_raw.parse::<u16>().map_err(|_| {
            AppError::config(format!(
                "BACKEND_PORT must be a valid port number, got '{port_raw}'"
            ))
        })?;

        let db_kind = match get("BEQST_DB") {
            Some(raw) => DbKind::from_str(&raw).map_err(|e| AppError::config(e.to_string()))?,
            None => DbKind::Postgres,
        };

        let jwt_secret = get("BACKEND_JWT_SECRET")
            .ok_or_else(|| AppError::config("BACKEND_JWT_SECRET must be set"))?;
        if jwt_secret.len() < MIN_JWT_SECRET_LEN {
            return Err(AppError::config(format!(
                "BACKEND_JWT_SECRET must be at least {MIN_JWT_SECRET_LEN} characters"
            )));
        }

        let max_json_payload_size = get("MAX_JSON_PAYLOAD_SIZE")
            .and_then(|s| s.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_JSON_PAYLOAD);

        Ok(Self {
            host,
            port,
            runtime_env: RuntimeEnv::Prod,
            db_kind,
            jwt_secret,
            max_json_payload_size,
        })
    }
}
