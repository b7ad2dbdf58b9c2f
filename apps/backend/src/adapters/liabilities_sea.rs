//! SeaORM adapter for liabilities.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::liabilities;

#[derive(Debug, Clone)]
pub struct LiabilityCreate {
    pub estate_id: i64,
    pub name: String,
    pub liability_type: String,
    pub amount: Option<f64>,
    pub creditor: Option<String>,
    pub linked_asset_id: Option<i64>,
}

/// Newest first.
pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<liabilities::Model>, sea_orm::DbErr> {
    liabilities::Entity::find()
        .filter(liabilities::Column::EstateId.eq(estate_id))
        .order_by_desc(liabilities::Column::CreatedAt)
        .order_by_desc(liabilities::Column::Id)
        .all(conn)
        .await
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    liabilities::Entity::find()
        .filter(liabilities::Column::EstateId.eq(estate_id))
        .count(conn)
        .await
}

pub async fn create_liability<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: LiabilityCreate,
) -> Result<liabilities::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    liabilities::ActiveModel {
        id: NotSet,
        estate_id: Set(dto.estate_id),
        name: Set(dto.name),
        liability_type: Set(dto.liability_type),
        amount: Set(dto.amount),
        creditor: Set(dto.creditor),
        linked_asset_id: Set(dto.linked_asset_id),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn delete_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    liability_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = liabilities::Entity::delete_many()
        .filter(liabilities::Column::Id.eq(liability_id))
        .filter(liabilities::Column::EstateId.eq(estate_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
