//! User repository functions (generic over ConnectionTrait).

use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::users_sea::{self as users_adapter, ProfileUpdate, UserCreate};
use crate::errors::domain::DomainError;

/// User domain model. The password hash never leaves the server.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i64,
    pub email: String,
    #[serde(skip)]
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_id(conn, user_id).await?;
    Ok(user.map(User::from))
}

pub async fn find_by_email<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
) -> Result<Option<User>, DomainError> {
    let user = users_adapter::find_by_email(conn, email).await?;
    Ok(user.map(User::from))
}

pub async fn create_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    password_hash: &str,
) -> Result<User, DomainError> {
    let user = users_adapter::create_user(conn, UserCreate::new(email, password_hash)).await?;
    Ok(User::from(user))
}

pub async fn update_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    first_name: String,
    last_name: String,
) -> Result<User, DomainError> {
    let user = users_adapter::update_profile(
        conn,
        ProfileUpdate {
            id: user_id,
            first_name,
            last_name,
        },
    )
    .await?;
    Ok(User::from(user))
}

impl From<crate::entities::users::Model> for User {
    fn from(model: crate::entities::users::Model) -> Self {
        Self {
            id: model.id,
            email: model.email,
            password_hash: model.password_hash,
            name: model.name,
            first_name: model.first_name,
            last_name: model.last_name,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
