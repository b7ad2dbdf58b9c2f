//! Estate repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::estates_sea as estates_adapter;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Estate {
    pub id: i64,
    pub owner_id: i64,
    pub name: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

pub async fn list_by_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
) -> Result<Vec<Estate>, DomainError> {
    let rows = estates_adapter::list_by_owner(conn, owner_id).await?;
    Ok(rows.into_iter().map(Estate::from).collect())
}

pub async fn find_primary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
) -> Result<Option<Estate>, DomainError> {
    let estate = estates_adapter::find_primary(conn, owner_id).await?;
    Ok(estate.map(Estate::from))
}

pub async fn create_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    name: &str,
) -> Result<Estate, DomainError> {
    let estate = estates_adapter::create_estate(conn, owner_id, name).await?;
    Ok(Estate::from(estate))
}

impl From<crate::entities::estates::Model> for Estate {
    fn from(model: crate::entities::estates::Model) -> Self {
        Self {
            id: model.id,
            owner_id: model.owner_id,
            name: model.name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
