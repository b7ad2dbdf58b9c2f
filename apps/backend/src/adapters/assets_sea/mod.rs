//! SeaORM adapter for assets.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::assets;

pub mod dto;

pub use dto::{AssetCreate, AssetUpdate};

pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<assets::Model>, sea_orm::DbErr> {
    assets::Entity::find()
        .filter(assets::Column::EstateId.eq(estate_id))
        .order_by_asc(assets::Column::Id)
        .all(conn)
        .await
}

/// Scoped by estate so another owner's id reads as absent.
pub async fn find_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    asset_id: i64,
) -> Result<Option<assets::Model>, sea_orm::DbErr> {
    assets::Entity::find()
        .filter(assets::Column::Id.eq(asset_id))
        .filter(assets::Column::EstateId.eq(estate_id))
        .one(conn)
        .await
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    assets::Entity::find()
        .filter(assets::Column::EstateId.eq(estate_id))
        .count(conn)
        .await
}

pub async fn create_asset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AssetCreate,
) -> Result<assets::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    assets::ActiveModel {
        id: NotSet,
        estate_id: Set(dto.estate_id),
        name: Set(dto.name),
        category: Set(dto.category),
        sub_type: Set(dto.sub_type),
        value: Set(dto.value),
        metadata: Set(dto.metadata),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn update_asset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    current: assets::Model,
    dto: AssetUpdate,
) -> Result<assets::Model, sea_orm::DbErr> {
    if dto.is_empty() {
        return Ok(current);
    }

    let mut active: assets::ActiveModel = current.into();
    if let Some(name) = dto.name {
        active.name = Set(name);
    }
    if let Some(category) = dto.category {
        active.category = Set(category);
    }
    if let Some(sub_type) = dto.sub_type {
        active.sub_type = Set(sub_type);
    }
    if let Some(value) = dto.value {
        active.value = Set(value);
    }
    if let Some(metadata) = dto.metadata {
        active.metadata = Set(metadata);
    }
    active.updated_at = Set(time::OffsetDateTime::now_utc());

    active.update(conn).await
}

/// Rows deleted (0 or 1).
pub async fn delete_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    asset_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = assets::Entity::delete_many()
        .filter(assets::Column::Id.eq(asset_id))
        .filter(assets::Column::EstateId.eq(estate_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
