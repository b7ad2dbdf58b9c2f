//! SeaORM adapter for estates.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, QueryOrder,
    Set,
};

use crate::entities::estates;

pub async fn list_by_owner<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
) -> Result<Vec<estates::Model>, sea_orm::DbErr> {
    estates::Entity::find()
        .filter(estates::Column::OwnerId.eq(owner_id))
        .order_by_asc(estates::Column::Id)
        .all(conn)
        .await
}

/// The owner's first (lowest id) estate.
pub async fn find_primary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
) -> Result<Option<estates::Model>, sea_orm::DbErr> {
    estates::Entity::find()
        .filter(estates::Column::OwnerId.eq(owner_id))
        .order_by_asc(estates::Column::Id)
        .one(conn)
        .await
}

pub async fn create_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    owner_id: i64,
    name: &str,
) -> Result<estates::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    estates::ActiveModel {
        id: NotSet,
        owner_id: Set(owner_id),
        name: Set(name.to_string()),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}
