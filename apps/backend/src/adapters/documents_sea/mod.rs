//! SeaORM adapter for documents and their access logs.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, Set,
};

use crate::entities::{document_access_logs, documents};

pub mod dto;

pub use dto::{AccessLogCreate, DocumentCreate};

/// Newest first.
pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<documents::Model>, sea_orm::DbErr> {
    documents::Entity::find()
        .filter(documents::Column::EstateId.eq(estate_id))
        .order_by_desc(documents::Column::CreatedAt)
        .order_by_desc(documents::Column::Id)
        .all(conn)
        .await
}

pub async fn find_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    document_id: i64,
) -> Result<Option<documents::Model>, sea_orm::DbErr> {
    documents::Entity::find()
        .filter(documents::Column::Id.eq(document_id))
        .filter(documents::Column::EstateId.eq(estate_id))
        .one(conn)
        .await
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    documents::Entity::find()
        .filter(documents::Column::EstateId.eq(estate_id))
        .count(conn)
        .await
}

/// Sizes of every document in the estate, in bytes.
pub async fn file_sizes<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<i64>, sea_orm::DbErr> {
    documents::Entity::find()
        .select_only()
        .column(documents::Column::FileSize)
        .filter(documents::Column::EstateId.eq(estate_id))
        .into_tuple::<i64>()
        .all(conn)
        .await
}

pub async fn create_document<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: DocumentCreate,
) -> Result<documents::Model, sea_orm::DbErr> {
    documents::ActiveModel {
        id: NotSet,
        estate_id: Set(dto.estate_id),
        name: Set(dto.name),
        file_url: Set(dto.file_url),
        file_type: Set(dto.file_type),
        file_size: Set(dto.file_size),
        document_type: Set(dto.document_type),
        asset_id: Set(dto.asset_id),
        beneficiary_id: Set(dto.beneficiary_id),
        executor_id: Set(dto.executor_id),
        created_at: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

pub async fn delete_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    document_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = documents::Entity::delete_many()
        .filter(documents::Column::Id.eq(document_id))
        .filter(documents::Column::EstateId.eq(estate_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}

pub async fn create_access_log<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: AccessLogCreate,
) -> Result<document_access_logs::Model, sea_orm::DbErr> {
    document_access_logs::ActiveModel {
        id: NotSet,
        document_id: Set(dto.document_id),
        accessed_by: Set(dto.accessed_by),
        action: Set(dto.action),
        timestamp: Set(time::OffsetDateTime::now_utc()),
    }
    .insert(conn)
    .await
}

/// At most `limit` logs, newest first.
pub async fn recent_access_logs<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    document_id: i64,
    limit: u64,
) -> Result<Vec<document_access_logs::Model>, sea_orm::DbErr> {
    document_access_logs::Entity::find()
        .filter(document_access_logs::Column::DocumentId.eq(document_id))
        .order_by_desc(document_access_logs::Column::Timestamp)
        .order_by_desc(document_access_logs::Column::Id)
        .limit(limit)
        .all(conn)
        .await
}
