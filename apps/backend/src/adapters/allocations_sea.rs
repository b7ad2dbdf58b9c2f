//! SeaORM adapter for allocations.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::allocations;

pub async fn find_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_id: i64,
    beneficiary_id: i64,
) -> Result<Option<allocations::Model>, sea_orm::DbErr> {
    allocations::Entity::find()
        .filter(allocations::Column::AssetId.eq(asset_id))
        .filter(allocations::Column::BeneficiaryId.eq(beneficiary_id))
        .one(conn)
        .await
}

pub async fn list_by_asset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_id: i64,
) -> Result<Vec<allocations::Model>, sea_orm::DbErr> {
    list_by_assets(conn, &[asset_id]).await
}

pub async fn list_by_assets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_ids: &[i64],
) -> Result<Vec<allocations::Model>, sea_orm::DbErr> {
    if asset_ids.is_empty() {
        return Ok(Vec::new());
    }
    allocations::Entity::find()
        .filter(allocations::Column::AssetId.is_in(asset_ids.iter().copied()))
        .order_by_asc(allocations::Column::AssetId)
        .order_by_asc(allocations::Column::BeneficiaryId)
        .all(conn)
        .await
}

/// Insert, or overwrite the percentage of the existing pair.
pub async fn upsert<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_id: i64,
    beneficiary_id: i64,
    percentage: f64,
) -> Result<allocations::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    match find_pair(conn, asset_id, beneficiary_id).await? {
        Some(existing) => {
            let mut active: allocations::ActiveModel = existing.into();
            active.percentage = Set(percentage);
            active.updated_at = Set(now);
            active.update(conn).await
        }
        None => {
            allocations::ActiveModel {
                id: NotSet,
                asset_id: Set(asset_id),
                beneficiary_id: Set(beneficiary_id),
                percentage: Set(percentage),
                created_at: Set(now),
                updated_at: Set(now),
            }
            .insert(conn)
            .await
        }
    }
}

pub async fn delete_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    asset_id: i64,
    beneficiary_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = allocations::Entity::delete_many()
        .filter(allocations::Column::AssetId.eq(asset_id))
        .filter(allocations::Column::BeneficiaryId.eq(beneficiary_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
