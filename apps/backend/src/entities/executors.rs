use sea_orm::entity::prelude::*;
use time::OffsetDateTime;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "executors")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub instructions: Option<String>,
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
}

impl Related<super::estates::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Estates.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
