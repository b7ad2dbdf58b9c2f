//! Executor repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::executors_sea::{self as executors_adapter, ExecutorCreate};
use crate::domain::ExecutorRole;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Executor {
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: ExecutorRole,
    pub instructions: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

#[derive(Debug, Clone)]
pub struct NewExecutor {
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: ExecutorRole,
    pub instructions: Option<String>,
}

pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<Executor>, DomainError> {
    executors_adapter::list_by_estate(conn, estate_id)
        .await?
        .into_iter()
        .map(Executor::try_from)
        .collect()
}

pub async fn find_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    executor_id: i64,
) -> Result<Option<Executor>, DomainError> {
    executors_adapter::find_in_estate(conn, estate_id, executor_id)
        .await?
        .map(Executor::try_from)
        .transpose()
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, DomainError> {
    Ok(executors_adapter::count_by_estate(conn, estate_id).await?)
}

pub async fn create_executor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    executor: NewExecutor,
) -> Result<Executor, DomainError> {
    let dto = ExecutorCreate {
        estate_id,
        name: executor.name,
        email: executor.email,
        phone: executor.phone,
        role: executor.role.as_str().to_string(),
        instructions: executor.instructions,
    };
    Executor::try_from(executors_adapter::create_executor(conn, dto).await?)
}

pub async fn delete_executor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    executor_id: i64,
) -> Result<bool, DomainError> {
    Ok(executors_adapter::delete_in_estate(conn, estate_id, executor_id).await? > 0)
}

impl TryFrom<crate::entities::executors::Model> for Executor {
    type Error = DomainError;

    fn try_from(model: crate::entities::executors::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            role: ExecutorRole::from_db(&model.role, model.id)?,
            id: model.id,
            estate_id: model.estate_id,
            name: model.name,
            email: model.email,
            phone: model.phone,
            instructions: model.instructions,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
