//! Database configuration, pool construction and migration orchestration.
//! Shared by the backend and the migration CLI.

pub mod config;
pub mod error;
pub mod infra;

pub use config::db;
pub use error::DbInfraError;
pub use infra::db::core::{bootstrap_db, build_admin_pool, build_app_pool, orchestrate_migration};
