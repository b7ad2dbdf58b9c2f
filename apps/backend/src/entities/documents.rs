use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

/// Document metadata. The bytes themselves are never stored.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "documents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    pub file_url: String,
    pub file_type: String,
    pub file_size: i64,
    pub document_type: String,
    pub asset_id: Option<i64>,
    pub beneficiary_id: Option<i64>,
    pub executor_id: Option<i64>,
    pub created_at: OffsetDateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::estates::Entity",
        from = "Column::EstateId",
        to = "super::estates::Column::Id",
        on_delete = "Cascade"
    )]
    Estates,
    #[sea_orm(has_many = "super::document_access_logs::Entity")]
    AccessLogs,
}

impl Related<super::estates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estates.def()
    }
}

impl Related<super::document_access_logs::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessLogs.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
