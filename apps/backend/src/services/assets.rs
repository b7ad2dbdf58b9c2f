use std::collections::HashMap;

use sea_orm::prelude::Json;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;

use crate::domain::validation::{money, required};
use crate::domain::{AssetCategory, AssetSubType, LimitedResource};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::allocations::{self, Allocation};
use crate::repos::assets::{self, Asset, AssetChanges, NewAsset};
use crate::repos::beneficiaries;
use crate::services::{estates, limits};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocationView {
    pub beneficiary_id: i64,
    pub beneficiary_name: String,
    pub percentage: f64,
}

/// An asset with its allocations and the sum of their percentages.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetWithAllocations {
    #[serde(flatten)]
    pub asset: Asset,
    pub allocations: Vec<AllocationView>,
    pub allocated_percentage: f64,
}

/// Unvalidated create input.
#[derive(Debug, Clone)]
pub struct AssetInput {
    pub name: String,
    pub category: AssetCategory,
    pub sub_type: AssetSubType,
    pub value: Option<f64>,
    pub metadata: Option<Json>,
}

/// Unvalidated patch. `Some(None)` clears `value` or `metadata`.
#[derive(Debug, Clone, Default)]
pub struct AssetPatch {
    pub name: Option<String>,
    pub category: Option<AssetCategory>,
    pub sub_type: Option<AssetSubType>,
    pub value: Option<Option<f64>>,
    pub metadata: Option<Option<Json>>,
}

fn asset_not_found() -> DomainError {
    DomainError::not_found(NotFoundKind::Asset, "Asset not found")
}

/// Groups allocations under their assets, resolving beneficiary names.
/// Allocations to beneficiaries outside `names` are dropped.
pub(crate) fn attach_allocations(
    assets: Vec<Asset>,
    allocations: Vec<Allocation>,
    names: &HashMap<i64, String>,
) -> Vec<AssetWithAllocations> {
    let mut by_asset: HashMap<i64, Vec<AllocationView>> = HashMap::new();
    for a in allocations {
        let Some(name) = names.get(&a.beneficiary_id) else {
            continue;
        };
        by_asset.entry(a.asset_id).or_default().push(AllocationView {
            beneficiary_id: a.beneficiary_id,
            beneficiary_name: name.clone(),
            percentage: a.percentage,
        });
    }

    assets
        .into_iter()
        .map(|asset| {
            let mut allocations = by_asset.remove(&asset.id).unwrap_or_default();
            allocations.sort_by_key(|a| a.beneficiary_id);
            let allocated_percentage = allocations.iter().map(|a| a.percentage).sum();
            AssetWithAllocations {
                asset,
                allocations,
                allocated_percentage,
            }
        })
        .collect()
}

/// Every asset of the estate with its allocations.
pub(crate) async fn load_with_allocations<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<AssetWithAllocations>, DomainError> {
    let assets = assets::list_by_estate(conn, estate_id).await?;
    let ids: Vec<i64> = assets.iter().map(|a| a.id).collect();
    let allocations = allocations::list_by_assets(conn, &ids).await?;
    let names: HashMap<i64, String> = beneficiaries::list_by_estate(conn, estate_id)
        .await?
        .into_iter()
        .map(|b| (b.id, b.name))
        .collect();
    Ok(attach_allocations(assets, allocations, &names))
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<AssetWithAllocations>, DomainError> {
    match estates::primary(conn, user_id).await? {
        Some(estate) => load_with_allocations(conn, estate.id).await,
        None => Ok(Vec::new()),
    }
}

pub async fn get<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    asset_id: i64,
) -> Result<AssetWithAllocations, DomainError> {
    let estate_id =
        estates::require_primary_id(conn, user_id, NotFoundKind::Asset, "Asset not found").await?;
    let asset = assets::find_in_estate(conn, estate_id, asset_id)
        .await?
        .ok_or_else(asset_not_found)?;
    let allocations = allocations::list_by_asset(conn, asset.id).await?;
    let names: HashMap<i64, String> = beneficiaries::list_by_estate(conn, estate_id)
        .await?
        .into_iter()
        .map(|b| (b.id, b.name))
        .collect();
    attach_allocations(vec![asset], allocations, &names)
        .pop()
        .ok_or_else(asset_not_found)
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    input: AssetInput,
) -> Result<Asset, DomainError> {
    let new_asset = NewAsset {
        name: required("Name", &input.name)?,
        category: input.category,
        sub_type: input.sub_type,
        value: money("Value", input.value)?,
        metadata: input.metadata,
    };

    limits::ensure_within_limit(conn, user_id, LimitedResource::Assets).await?;
    let estate = estates::ensure_primary(conn, user_id).await?;

    let asset = assets::create_asset(conn, estate.id, new_asset).await?;
    info!(user_id, estate_id = estate.id, asset_id = asset.id, "asset created");
    Ok(asset)
}

pub async fn update<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    asset_id: i64,
    patch: AssetPatch,
) -> Result<Asset, DomainError> {
    let changes = AssetChanges {
        name: patch.name.map(|n| required("Name", &n)).transpose()?,
        category: patch.category,
        sub_type: patch.sub_type,
        value: match patch.value {
            Some(v) => Some(money("Value", v)?),
            None => None,
        },
        metadata: patch.metadata,
    };

    let estate_id =
        estates::require_primary_id(conn, user_id, NotFoundKind::Asset, "Asset not found").await?;
    let asset = assets::update_asset(conn, estate_id, asset_id, changes)
        .await?
        .ok_or_else(asset_not_found)?;
    info!(user_id, asset_id, "asset updated");
    Ok(asset)
}

pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    asset_id: i64,
) -> Result<(), DomainError> {
    let estate_id =
        estates::require_primary_id(conn, user_id, NotFoundKind::Asset, "Asset not found").await?;
    if !assets::delete_asset(conn, estate_id, asset_id).await? {
        return Err(asset_not_found());
    }
    info!(user_id, asset_id, "asset deleted");
    Ok(())
}
