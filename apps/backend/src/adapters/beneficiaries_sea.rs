//! SeaORM adapter for beneficiaries.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};

use crate::entities::beneficiaries;

#[derive(Debug, Clone)]
pub struct BeneficiaryCreate {
    pub estate_id: i64,
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub beneficiary_type: String,
}

pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<beneficiaries::Model>, sea_orm::DbErr> {
    beneficiaries::Entity::find()
        .filter(beneficiaries::Column::EstateId.eq(estate_id))
        .order_by_asc(beneficiaries::Column::Id)
        .all(conn)
        .await
}

pub async fn find_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    beneficiary_id: i64,
) -> Result<Option<beneficiaries::Model>, sea_orm::DbErr> {
    beneficiaries::Entity::find()
        .filter(beneficiaries::Column::Id.eq(beneficiary_id))
        .filter(beneficiaries::Column::EstateId.eq(estate_id))
        .one(conn)
        .await
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    beneficiaries::Entity::find()
        .filter(beneficiaries::Column::EstateId.eq(estate_id))
        .count(conn)
        .await
}

pub async fn create_beneficiary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: BeneficiaryCreate,
) -> Result<beneficiaries::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    beneficiaries::ActiveModel {
        id: NotSet,
        estate_id: Set(dto.estate_id),
        name: Set(dto.name),
        relationship: Set(dto.relationship),
        email: Set(dto.email),
        phone: Set(dto.phone),
        beneficiary_type: Set(dto.beneficiary_type),
        created_at: Set(now),
        updated_at: Set(now),
    }
    .insert(conn)
    .await
}

pub async fn delete_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    beneficiary_id: i64,
) -> Result<u64, sea_orm::DbErr> {
    let res = beneficiaries::Entity::delete_many()
        .filter(beneficiaries::Column::Id.eq(beneficiary_id))
        .filter(beneficiaries::Column::EstateId.eq(estate_id))
        .exec(conn)
        .await?;
    Ok(res.rows_affected)
}
