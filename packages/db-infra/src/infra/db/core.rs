use std::future::Future;
use std::time::{Duration, Instant};

use migration::{migrate, MigrationCommand, Migrator, MigratorTrait};
use rand::Rng;
use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, DbErr,
    Statement,
};
use tracing::{debug, info, trace, warn};

use crate::config::db::{make_conn_spec, validate_db_config, DbKind, DbOwner, RuntimeEnv};
use crate::error::DbInfraError;

fn get_db_engine(db_kind: DbKind) -> &'static str {
    match db_kind {
        DbKind::Postgres => "postgresql",
        DbKind::SqliteFile | DbKind::SqliteMemory => "sqlite",
    }
}

/// Retries `connect_fn` with a fixed interval plus a little jitter.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, DbInfraError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, DbInfraError>>,
{
    let mut last_error = None;

    for attempt in 1..=max_attempts {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) => {
                last_error = Some(e);
                if attempt < max_attempts {
                    let jitter_ms = rand::rng().random_range(0..50u64);
                    warn!(
                        attempt,
                        max_attempts, interval_ms, "connection_retry=failed"
                    );
                    tokio::time::sleep(Duration::from_millis(interval_ms + jitter_ms)).await;
                }
            }
        }
    }

    Err(last_error
        .unwrap_or_else(|| DbInfraError::connect("no connection attempt was made")))
}

async fn connect(
    url: &str,
    db_kind: DbKind,
    max_connections: u32,
) -> Result<DatabaseConnection, DbInfraError> {
    let mut opt = ConnectOptions::new(url.to_owned());
    opt.min_connections(1)
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(5))
        .sqlx_logging(false);

    let pool = match db_kind {
        DbKind::Postgres => {
            retry_connection(
                || {
                    let opt = opt.clone();
                    async move {
                        Database::connect(opt).await.map_err(|e| {
                            DbInfraError::connect(format!("failed to connect to Postgres: {e}"))
                        })
                    }
                },
                5,
                500,
            )
            .await?
        }
        DbKind::SqliteFile | DbKind::SqliteMemory => {
            if let DbKind::SqliteFile = db_kind {
                ensure_sqlite_dir(url)?;
            }
            Database::connect(opt).await.map_err(|e| {
                DbInfraError::connect(format!("failed to connect to SQLite: {e}"))
            })?
        }
    };

    if !matches!(db_kind, DbKind::Postgres) {
        apply_sqlite_pragmas(&pool, db_kind).await?;
    }

    Ok(pool)
}

fn ensure_sqlite_dir(url: &str) -> Result<(), DbInfraError> {
    let path = url
        .trim_start_matches("sqlite://")
        .split('?')
        .next()
        .unwrap_or_default();
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| {
                DbInfraError::config(format!(
                    "failed to create SQLite directory {}: {e}",
                    parent.display()
                ))
            })?;
        }
    }
    Ok(())
}

async fn apply_sqlite_pragmas(
    pool: &DatabaseConnection,
    db_kind: DbKind,
) -> Result<(), DbInfraError> {
    let mut pragmas = vec!["PRAGMA foreign_keys = ON;"];
    if matches!(db_kind, DbKind::SqliteFile) {
        pragmas.push("PRAGMA journal_mode = WAL;");
        pragmas.push("PRAGMA synchronous = NORMAL;");
    }
    for pragma in pragmas {
        pool.execute(Statement::from_string(DatabaseBackend::Sqlite, pragma))
            .await
            .map_err(|e| DbInfraError::config(format!("failed to apply '{pragma}': {e}")))?;
    }
    Ok(())
}

/// Owner-credential pool with a single connection, for schema changes.
pub async fn build_admin_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, DbOwner::Owner)?;
    connect(&url, db_kind, 1).await
}

/// Application pool. In-memory SQLite is pinned to one connection because
/// every connection would otherwise see its own empty database.
pub async fn build_app_pool(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    let url = make_conn_spec(env, db_kind, DbOwner::App)?;
    let max = match db_kind {
        DbKind::Postgres => 10,
        DbKind::SqliteFile => 4,
        DbKind::SqliteMemory => 1,
    };
    debug!(url = %sanitize_db_url(&url), max_connections = max, "building app pool");
    connect(&url, db_kind, max).await
}

/// Masks the password in a connection string.
pub fn sanitize_db_url(url: &str) -> String {
    let Some((auth_part, host_part)) = url.rsplit_once('@') else {
        return url.to_string();
    };
    let Some((scheme, creds)) = auth_part.split_once("://") else {
        return url.to_string();
    };
    match creds.split_once(':') {
        Some((user, _)) => format!("{scheme}://{user}:***@{host_part}"),
        None => url.to_string(),
    }
}

/// True when every known migration is already applied.
pub async fn fast_path_schema_check(conn: &DatabaseConnection) -> Result<bool, DbInfraError> {
    let expected_count = Migrator::migrations().len();
    let expected_last = Migrator::migrations()
        .last()
        .map(|m| m.name().to_string())
        .unwrap_or_default();

    let (current_count, current_last) = match Migrator::get_applied_migrations(conn).await {
        Ok(migrations) => (
            migrations.len(),
            migrations.last().map(|m| m.name().to_string()),
        ),
        Err(DbErr::Exec(_)) | Err(DbErr::Query(_)) => {
            trace!(fastpath = "miss", reason = "migration_table_missing");
            return Ok(false);
        }
        Err(e) => {
            return Err(DbInfraError::migration(format!(
                "failed to get applied migrations: {e}"
            )))
        }
    };

    let up_to_date = current_count == expected_count
        && !expected_last.is_empty()
        && current_last.as_deref() == Some(expected_last.as_str());

    trace!(
        fastpath = if up_to_date { "hit" } else { "miss" },
        current_count,
        expected_count,
        current_last = %current_last.as_deref().unwrap_or(""),
        expected_last = %expected_last
    );

    Ok(up_to_date)
}

/// Connects with owner credentials and runs `command`.
pub async fn orchestrate_migration(
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    validate_db_config(env, db_kind)?;
    let admin_pool = build_admin_pool(env, db_kind).await?;
    run_migration(&admin_pool, env, db_kind, command).await
}

/// Runs `command` on an existing pool and verifies the applied count afterwards.
pub async fn run_migration(
    pool: &DatabaseConnection,
    env: RuntimeEnv,
    db_kind: DbKind,
    command: MigrationCommand,
) -> Result<(), DbInfraError> {
    let start = Instant::now();
    info!(
        env = ?env,
        db_kind = ?db_kind,
        engine = get_db_engine(db_kind),
        command = ?command,
        "migrate=start"
    );

    if matches!(command, MigrationCommand::Up) && fast_path_schema_check(pool).await? {
        info!("migrate=skipped up_to_date=true");
        return Ok(());
    }

    migrate(pool, command)
        .await
        .map_err(|e| DbInfraError::migration(format!("migration execution failed: {e}")))?;

    let expected_count = Migrator::migrations().len();
    let applied_count = Migrator::get_applied_migrations(pool)
        .await
        .map(|m| m.len())
        .unwrap_or(0);

    match command {
        MigrationCommand::Reset if applied_count != 0 => {
            return Err(DbInfraError::migration(format!(
                "reset should leave 0 migrations applied, but {applied_count} were found"
            )));
        }
        MigrationCommand::Up | MigrationCommand::Fresh | MigrationCommand::Refresh
            if applied_count != expected_count =>
        {
            return Err(DbInfraError::migration(format!(
                "expected {expected_count} migrations, but {applied_count} were applied"
            )));
        }
        _ => {}
    }

    info!(
        applied_count,
        expected_count,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "migrate=done"
    );
    Ok(())
}

/// Returns an application pool with the schema brought up to date.
pub async fn bootstrap_db(
    env: RuntimeEnv,
    db_kind: DbKind,
) -> Result<DatabaseConnection, DbInfraError> {
    validate_db_config(env, db_kind)?;

    match db_kind {
        // Owner and app share the one connection that holds the database.
        DbKind::SqliteMemory => {
            let pool = build_app_pool(env, db_kind).await?;
            run_migration(&pool, env, db_kind, MigrationCommand::Up).await?;
            Ok(pool)
        }
        DbKind::SqliteFile => {
            let pool = build_app_pool(env, db_kind).await?;
            if !fast_path_schema_check(&pool).await? {
                run_migration(&pool, env, db_kind, MigrationCommand::Up).await?;
            }
            Ok(pool)
        }
        DbKind::Postgres => {
            let admin = build_admin_pool(env, db_kind).await?;
            if !fast_path_schema_check(&admin).await? {
                run_migration(&admin, env, db_kind, MigrationCommand::Up).await?;
            }
            admin.close().await.ok();
            build_app_pool(env, db_kind).await
        }
    }
}
