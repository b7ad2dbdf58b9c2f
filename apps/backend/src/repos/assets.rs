//! Asset repository functions.

use sea_orm::prelude::Json;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::adapters::assets_sea::{self as assets_adapter, AssetCreate, AssetUpdate};
use crate::domain::{AssetCategory, AssetSubType};
use crate::errors::domain::DomainError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Asset {
    pub id: i64,
    pub estate_id: i64,
    pub name: String,
    pub category: AssetCategory,
    pub sub_type: AssetSubType,
    pub value: Option<f64>,
    pub metadata: Option<Json>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,
}

/// Validated input for a new asset.
#[derive(Debug, Clone)]
pub struct NewAsset {
    pub name: String,
    pub category: AssetCategory,
    pub sub_type: AssetSubType,
    pub value: Option<f64>,
    pub metadata: Option<Json>,
}

/// Validated partial update. `Some(None)` clears `value` or `metadata`.
#[derive(Debug, Clone, Default)]
pub struct AssetChanges {
    pub name: Option<String>,
    pub category: Option<AssetCategory>,
    pub sub_type: Option<AssetSubType>,
    pub value: Option<Option<f64>>,
    pub metadata: Option<Option<Json>>,
}

pub async fn list_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<Vec<Asset>, DomainError> {
    assets_adapter::list_by_estate(conn, estate_id)
        .await?
        .into_iter()
        .map(Asset::try_from)
        .collect()
}

pub async fn find_in_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    asset_id: i64,
) -> Result<Option<Asset>, DomainError> {
    assets_adapter::find_in_estate(conn, estate_id, asset_id)
        .await?
        .map(Asset::try_from)
        .transpose()
}

pub async fn count_by_estate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
) -> Result<u64, DomainError> {
    Ok(assets_adapter::count_by_estate(conn, estate_id).await?)
}

pub async fn create_asset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    asset: NewAsset,
) -> Result<Asset, DomainError> {
    let dto = AssetCreate {
        estate_id,
        name: asset.name,
        category: asset.category.as_str().to_string(),
        sub_type: asset.sub_type.as_str().to_string(),
        value: asset.value,
        metadata: asset.metadata,
    };
    Asset::try_from(assets_adapter::create_asset(conn, dto).await?)
}

/// `None` when the asset is not in `estate_id`.
pub async fn update_asset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    asset_id: i64,
    changes: AssetChanges,
) -> Result<Option<Asset>, DomainError> {
    let Some(current) = assets_adapter::find_in_estate(conn, estate_id, asset_id).await? else {
        return Ok(None);
    };
    let dto = AssetUpdate {
        name: changes.name,
        category: changes.category.map(|c| c.as_str().to_string()),
        sub_type: changes.sub_type.map(|s| s.as_str().to_string()),
        value: changes.value,
        metadata: changes.metadata,
    };
    let updated = assets_adapter::update_asset(conn, current, dto).await?;
    Asset::try_from(updated).map(Some)
}

/// True when a row was deleted.
pub async fn delete_asset<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    estate_id: i64,
    asset_id: i64,
) -> Result<bool, DomainError> {
    Ok(assets_adapter::delete_in_estate(conn, estate_id, asset_id).await? > 0)
}

impl TryFrom<crate::entities::assets::Model> for Asset {
    type Error = DomainError;

    fn try_from(model: crate::entities::assets::Model) -> Result<Self, Self::Error> {
        Ok(Self {
            category: AssetCategory::from_db(&model.category, model.id)?,
            sub_type: AssetSubType::from_db(&model.sub_type, model.id)?,
            id: model.id,
            estate_id: model.estate_id,
            name: model.name,
            value: model.value,
            metadata: model.metadata,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
