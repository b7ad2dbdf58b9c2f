use sea_orm::ConnectionTrait;
use tracing::info;

use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::estates::{self, Estate};
use crate::repos::users::{self, User};

/// `"{name or email}'s Estate"`
pub fn default_estate_name(user: &User) -> String {
    let owner = user
        .name
        .as_deref()
        .filter(|n| !n.trim().is_empty())
        .unwrap_or(&user.email);
    format!("{owner}'s Estate")
}

async fn require_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    users::find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found"))
}

/// The caller's estates, creating the first one when there are none.
pub async fn list_or_create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Estate>, DomainError> {
    let existing = estates::list_by_owner(conn, user_id).await?;
    if !existing.is_empty() {
        return Ok(existing);
    }
    Ok(vec![ensure_primary(conn, user_id).await?])
}

/// The first estate, created on demand.
pub async fn ensure_primary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Estate, DomainError> {
    if let Some(estate) = estates::find_primary(conn, user_id).await? {
        return Ok(estate);
    }
    let user = require_user(conn, user_id).await?;
    let estate = estates::create_estate(conn, user_id, &default_estate_name(&user)).await?;
    info!(user_id, estate_id = estate.id, "estate created");
    Ok(estate)
}

pub async fn primary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Option<Estate>, DomainError> {
    estates::find_primary(conn, user_id).await
}

/// Id of the caller's estate, or NotFound of `kind` when there is none yet.
/// Used by read-by-id, update and delete paths, where no estate means no record.
pub async fn require_primary_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    kind: NotFoundKind,
    detail: &str,
) -> Result<i64, DomainError> {
    estates::find_primary(conn, user_id)
        .await?
        .map(|e| e.id)
        .ok_or_else(|| DomainError::not_found(kind, detail))
}
