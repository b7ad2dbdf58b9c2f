//! Asset to beneficiary percentage splits.

use sea_orm::ConnectionTrait;
use tracing::info;

use crate::domain::validation::{allocation_total, percentage};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::allocations::{self, Allocation};
use crate::repos::{assets, beneficiaries};
use crate::services::estates;

/// Both ids must be in the caller's estate.
async fn check_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    asset_id: i64,
    beneficiary_id: i64,
) -> Result<(), DomainError> {
    let estate_id =
        estates::require_primary_id(conn, user_id, NotFoundKind::Asset, "Asset not found").await?;
    if assets::find_in_estate(conn, estate_id, asset_id).await?.is_none() {
        return Err(DomainError::not_found(NotFoundKind::Asset, "Asset not found"));
    }
    if beneficiaries::find_in_estate(conn, estate_id, beneficiary_id)
        .await?
        .is_none()
    {
        return Err(DomainError::not_found(
            NotFoundKind::Beneficiary,
            "Beneficiary not found",
        ));
    }
    Ok(())
}

/// Creates or replaces the allocation for the pair. The asset's total,
/// counting the new value in place of any existing one, may not pass 100.
pub async fn set<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    asset_id: i64,
    beneficiary_id: i64,
    requested: f64,
) -> Result<Allocation, DomainError> {
    let requested = percentage(requested)?;
    check_pair(conn, user_id, asset_id, beneficiary_id).await?;

    let others: f64 = allocations::list_by_asset(conn, asset_id)
        .await?
        .iter()
        .filter(|a| a.beneficiary_id != beneficiary_id)
        .map(|a| a.percentage)
        .sum();
    allocation_total(others, requested)?;

    let allocation = allocations::upsert(conn, asset_id, beneficiary_id, requested).await?;
    info!(user_id, asset_id, beneficiary_id, percentage = requested, "allocation set");
    Ok(allocation)
}

pub async fn remove<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    asset_id: i64,
    beneficiary_id: i64,
) -> Result<(), DomainError> {
    check_pair(conn, user_id, asset_id, beneficiary_id).await?;
    if !allocations::delete_pair(conn, asset_id, beneficiary_id).await? {
        return Err(DomainError::not_found(
            NotFoundKind::Allocation,
            "Allocation not found",
        ));
    }
    info!(user_id, asset_id, beneficiary_id, "allocation removed");
    Ok(())
}
