use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "liabilities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    pub liability_type: String,
    pub amount: Option<f64>,
    pub creditor: Option<String>,
    pub linked_asset_id: Option<i64>,
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
    #[sea_orm(
        belongs_to = "super::assets::Entity",
        from = "Column::LinkedAssetId",
        to = "super::assets::Column::Id",
        on_delete = "SetNull"
    )]
    LinkedAsset,
}

impl Related<super::estates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
