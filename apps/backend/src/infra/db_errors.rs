//! SeaORM -> DomainError translation.
//!
//! Adapters return `sea_orm::DbErr`; repos and services convert it here and
//! higher layers map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(&format!("SQLSTATE({code})")) || msg.contains(&format!("code: {code}"))
}

/// `table.column` from SQLite's "UNIQUE constraint failed: table.column".
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == ',' || c == '"')
        .next()
        .filter(|s| !s.is_empty())
}

fn map_unique_target_to_conflict(target: &str) -> Option<(ConflictKind, &'static str)> {
    match target {
        "users.email" | "users_email_key" | "ux_users_email" => {
            Some((ConflictKind::UniqueEmail, "Email already registered"))
        }
        "allocations.asset_id" | "ux_allocations_asset_beneficiary" => Some((
            ConflictKind::Other("UniqueAllocation".into()),
            "Allocation already exists for this asset and beneficiary",
        )),
        _ => None,
    }
}

fn map_postgres_constraint_to_conflict(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    ["ux_users_email", "users_email_key", "ux_allocations_asset_beneficiary"]
        .into_iter()
        .find(|name| error_msg.contains(name))
        .and_then(map_unique_target_to_conflict)
}

/// Translate a `DbErr` into a `DomainError` with PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found");
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some(target) = extract_sqlite_table_column(&error_msg) {
            if let Some((kind, detail)) = map_unique_target_to_conflict(target) {
                return DomainError::conflict(kind, detail);
            }
        }
        if let Some((kind, detail)) = map_postgres_constraint_to_conflict(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation_other("Foreign key constraint violation");
    }

    if mentions_sqlstate(&error_msg, "23514") || error_msg.contains("CHECK constraint failed") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Check constraint violation");
        return DomainError::validation_other("Check constraint violation");
    }

    if error_msg.contains("timed out") || error_msg.contains("timeout") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
