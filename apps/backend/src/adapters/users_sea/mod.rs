//! SeaORM adapter for users.

use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, NotSet, QueryFilter, Set,
};

use crate::entities::users;

pub mod dto;

pub use dto::{ProfileUpdate, UserCreate};

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find_by_id(user_id).one(conn).await
}

/// `email` must already be normalized.
pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<users::Model>, sea_orm::DbErr> {
    users::Entity::find()
        .filter(users::Column::Email.eq(email))
        .one(conn)
        .await
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: UserCreate,
) -> Result<users::Model, sea_orm::DbErr> {
    let now = time::OffsetDateTime::now_utc();
    let user = users::ActiveModel {
        id: NotSet,
        email: Set(dto.email),
        password_hash: Set(Some(dto.password_hash)),
        name: Set(dto.name),
        first_name: Set(None),
        last_name: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    };

    user.insert(conn).await
}

pub async fn update_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    dto: ProfileUpdate,
) -> Result<users::Model, sea_orm::DbErr> {
    let name = dto.display_name();
    let user = users::ActiveModel {
        id: Set(dto.id),
        first_name: Set(Some(dto.first_name)),
        last_name: Set(Some(dto.last_name)),
        name: Set(Some(name)),
        updated_at: Set(time::OffsetDateTime::now_utc()),
        ..Default::default()
    };

    user.update(conn).await
}
