//! Allocation repository functions.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::allocations_sea as allocations_adapter;
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub id: i64,
    pub asset_id: i64,
    pub beneficiary_id: i64,
    pub percentage: f64,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

pub async fn list_by_asset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_id: i64,
) -> Result<Vec<Allocation>, DomainError> {
    let rows = allocations_adapter::list_by_asset(conn, asset_id).await?;
    Ok(rows.into_iter().map(Allocation::from).collect())
}

pub async fn list_by_assets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_ids: &[i64],
) -> Result<Vec<Allocation>, DomainError> {
    let rows = allocations_adapter::list_by_assets(conn, asset_ids).await?;
    Ok(rows.into_iter().map(Allocation::from).collect())
}

pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_id: i64,
    beneficiary_id: i64,
    percentage: f64,
) -> Result<Allocation, DomainError> {
    let row = allocations_adapter::upsert(conn, asset_id, beneficiary_id, percentage).await?;
    Ok(Allocation::from(row))
}

pub async fn delete_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_id: i64,
    beneficiary_id: i64,
) -> Result<bool, DomainError> {
    Ok(allocations_adapter::delete_pair(conn, asset_id, beneficiary_id).await? > 0)
}

impl From<crate::entities::allocations::Model> for Allocation {
    fn from(model: crate::entities::allocations::Model) -> Self {
        Self {
            id: model.id,
            asset_id: model.asset_id,
            beneficiary_id: model.beneficiary_id,
            percentage: model.percentage,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
