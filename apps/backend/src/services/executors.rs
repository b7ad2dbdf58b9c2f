use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::validation::{optional_email, optional_text, required};
use crate::domain::{ExecutorRole, LimitedResource};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::executors::{self, Executor, NewExecutor};
use crate::services::{estates, limits};

#[derive(Debug, Clone)]
pub struct ExecutorInput {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: ExecutorRole,
    pub instructions: Option<String>,
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Executor>, DomainError> {
    match estates::primary(conn, user_id).await? {
        Some(estate) => executors::list_by_estate(conn, estate.id).await,
        None => Ok(Vec::new()),
    }
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    input: ExecutorInput,
) -> Result<Executor, DomainError> {
    let new_executor = NewExecutor {
        name: required("Name", &input.name)?,
        email: optional_email(input.email)?,
        phone: optional_text(input.phone),
        role: input.role,
        instructions: optional_text(input.instructions),
    };

    limits::ensure_within_limit(conn, user_id, LimitedResource::Executors).await?;
    let estate = estates::ensure_primary(conn, user_id).await?;

    let executor = executors::create_executor(conn, estate.id, new_executor).await?;
    info!(user_id, estate_id = estate.id, executor_id = executor.id, "executor created");
    Ok(executor)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    executor_id: i64,
) -> Result<(), DomainError> {
    let estate_id =
        estates::require_primary_id(conn, user_id, NotFoundKind::Executor, "Executor not found")
            .await?;
    if !executors::delete_executor(conn, estate_id, executor_id).await? {
        return Err(DomainError::not_found(
            NotFoundKind::Executor,
            "Executor not found",
        ));
    }
    info!(user_id, executor_id, "executor deleted");
    Ok(())
}
