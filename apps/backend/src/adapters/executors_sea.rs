//! SeaORM adapter for executors.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::executors;

#[derive(Debug, Clone)]
pub struct ExecutorCreate {
    pub estate_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    pub instructions: Option<String>,
}

pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<executors::Model>, sea_orm::DbErr> {
    executors::Entity::find()
        .filter(executors::Column::EstateId.eq(estate_id))
        .order_by_asc(executors::Column::Id)
        .all(conn)
        .await
}

pub async fn find_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    executor_id: i64,
) -> Result<Option<executors::Model>, sea_orm::DbErr> {
    executors::Entity::find()
        .filter(executors::Column::Id.eq(executor_id))
        .filter(executors::Column::EstateId.eq(estate_id))
        .one(conn)
        .await
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    executors::Entity::find()
        .filter(executors::Column::EstateId.eq(estate_id))
        .count(conn)
        .await
}

pub async fn create_executor<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ExecutorCreate,
) -> Result<executors::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    executors::ActiveModel {
        id: NotSet,
        estate_id: Set(dto.estate_id),
        name: Set(dto.name),
        email: Set(dto.email),
        phone: Set(dto.phone),
        role: Set(dto.role),
        instructions: Set(dto.instructions),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn delete_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    executor_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = executors::Entity::delete_many()
        .filter(executors::Column::Id.eq(executor_id))
        .filter(executors::Column::EstateId.eq(estate_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
