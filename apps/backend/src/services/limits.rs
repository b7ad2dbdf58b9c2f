//! Quota enforcement and usage reporting.

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;

use crate::domain::limits::{check_limit, limit_reached_message, storage_usage, LimitCheck};
use crate::domain::{LimitedResource, Tier};
use crate::errors::domain::{DomainError, ForbiddenKind};
use crate::repos::{assets, beneficiaries, documents, estates, executors};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceUsage {
    pub resource: LimitedResource,
    pub used: u64,
    pub limit: u64,
    pub remaining: u64,
    pub reached: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageUsage {
    pub used_bytes: u64,
    pub limit_bytes: u64,
    /// Capped at 100
    pub used_percentage: f64,
    pub near_limit: bool,
    pub document_count: u64,
    pub document_limit: u64,
    pub at_document_limit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LimitsView {
    pub tier: Tier,
    pub resources: Vec<ResourceUsage>,
}

/// Every user is on the free tier.
pub fn tier_for_user(_user_id: i64) -> Tier {
    Tier::Free
}

async fn count_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    resource: LimitedResource,
) -> Result<u64, DomainError> {
    match resource {
        LimitedResource::Assets => assets::count_by_estate(conn, estate_id).await,
        LimitedResource::Beneficiaries => beneficiaries::count_by_estate(conn, estate_id).await,
        LimitedResource::Executors => executors::count_by_estate(conn, estate_id).await,
        LimitedResource::Documents => documents::count_by_estate(conn, estate_id).await,
    }
}

/// Current count of `resource` in the caller's estate; zero without an estate.
pub async fn current_count<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    resource: LimitedResource,
) -> Result<u64, DomainError> {
    match estates::find_primary(conn, user_id).await? {
        Some(estate) => count_in_estate(conn, estate.id, resource).await,
        None => Ok(0),
    }
}

/// Forbidden(LimitReached) when one more `resource` would exceed the tier.
pub async fn ensure_within_limit<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    resource: LimitedResource,
) -> Result<(), DomainError> {
    let tier = tier_for_user(user_id);
    let count = current_count(conn, user_id, resource).await?;

    match check_limit(tier, resource, count) {
        LimitCheck::Allowed => Ok(()),
        LimitCheck::Reached { limit } => {
            info!(user_id, resource = resource.as_str(), limit, "limit reached");
            Err(DomainError::forbidden(
                ForbiddenKind::LimitReached { resource, limit },
                limit_reached_message(limit),
            ))
        }
    }
}

pub async fn usage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<LimitsView, DomainError> {
    let tier = tier_for_user(user_id);
    let mut resources = Vec::with_capacity(LimitedResource::ALL.len());

    for resource in LimitedResource::ALL {
        let used = current_count(conn, user_id, resource).await?;
        let limit = tier.ceiling(resource);
        resources.push(ResourceUsage {
            resource,
            used,
            limit,
            remaining: limit.saturating_sub(used),
            reached: !check_limit(tier, resource, used).is_allowed(),
        });
    }

    Ok(LimitsView { tier, resources })
}

pub async fn storage<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<StorageUsage, DomainError> {
    let tier = tier_for_user(user_id);
    let (used_bytes, document_count) = match estates::find_primary(conn, user_id).await? {
        Some(estate) => (
            documents::total_file_size(conn, estate.id).await?,
            documents::count_by_estate(conn, estate.id).await?,
        ),
        None => (0, 0),
    };

    let (percentage, near_limit) = storage_usage(tier, used_bytes);
    let document_limit = tier.ceiling(LimitedResource::Documents);

    Ok(StorageUsage {
        used_bytes,
        limit_bytes: tier.storage_bytes(),
        used_percentage: percentage.min(100.0),
        near_limit,
        document_count,
        document_limit,
        at_document_limit: document_count >= document_limit,
    })
}
