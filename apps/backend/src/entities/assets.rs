use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    /// `AssetCategory` string
    pub category: String,
    /// `AssetSubType` string
    pub sub_type: String,
    pub value: Option<f64>,
    pub metadata: Option<Json>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
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
    #[sea_orm(has_many = "super::allocations::Entity")]
    Allocations,
}

impl Related<super::estates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estates.def()
    }
}

impl Related<super::allocations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Allocations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
