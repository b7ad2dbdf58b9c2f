pub mod core;

pub use core::{bootstrap_db, build_admin_pool, build_app_pool, orchestrate_migration};
