use std::collections::HashMap;

use sea_orm::ConnectionTrait;
use serde::Serialize;
use tracing::info;

use crate::domain::validation::{optional_email, optional_text, required};
use crate::domain::{BeneficiaryType, LimitedResource};
use crate::errors::domain::{DomainError, NotFoundKind};
use crate::repos::allocations;
use crate::repos::assets::{self, Asset};
use crate::repos::beneficiaries::{self, Beneficiary, NewBeneficiary};
use crate::services::{estates, limits};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryAllocation {
    pub asset_id: i64,
    pub asset_name: String,
    pub asset_value: Option<f64>,
    pub percentage: f64,
    /// `value * percentage / 100`, zero for an unvalued asset
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryView {
    #[serde(flatten)]
    pub beneficiary: Beneficiary,
    pub allocations: Vec<BeneficiaryAllocation>,
    pub total_inheritance: f64,
}

#[derive(Debug, Clone)]
pub struct BeneficiaryInput {
    pub name: String,
    pub relationship: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub beneficiary_type: BeneficiaryType,
}

fn share_of(asset: &Asset, percentage: f64) -> f64 {
    match asset.value {
        Some(v) if v.is_finite() && v > 0.0 && percentage > 0.0 => v * percentage / 100.0,
        _ => 0.0,
    }
}

pub async fn list<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<BeneficiaryView>, DomainError> {
    let Some(estate) = estates::primary(conn, user_id).await? else {
        return Ok(Vec::new());
    };

    let beneficiaries = beneficiaries::list_by_estate(conn, estate.id).await?;
    let assets: HashMap<i64, Asset> = assets::list_by_estate(conn, estate.id)
        .await?
        .into_iter()
        .map(|a| (a.id, a))
        .collect();
    let asset_ids: Vec<i64> = assets.keys().copied().collect();

    let mut by_beneficiary: HashMap<i64, Vec<BeneficiaryAllocation>> = HashMap::new();
    for alloc in allocations::list_by_assets(conn, &asset_ids).await? {
        let Some(asset) = assets.get(&alloc.asset_id) else {
            continue;
        };
        by_beneficiary
            .entry(alloc.beneficiary_id)
            .or_default()
            .push(BeneficiaryAllocation {
                asset_id: asset.id,
                asset_name: asset.name.clone(),
                asset_value: asset.value,
                percentage: alloc.percentage,
                amount: share_of(asset, alloc.percentage),
            });
    }

    Ok(beneficiaries
        .into_iter()
        .map(|beneficiary| {
            let mut allocations = by_beneficiary.remove(&beneficiary.id).unwrap_or_default();
            allocations.sort_by_key(|a| a.asset_id);
            let total_inheritance = allocations.iter().map(|a| a.amount).sum();
            BeneficiaryView {
                beneficiary,
                allocations,
                total_inheritance,
            }
        })
        .collect())
}

pub async fn create<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    input: BeneficiaryInput,
) -> Result<Beneficiary, DomainError> {
    let new_beneficiary = NewBeneficiary {
        name: required("Name", &input.name)?,
        relationship: required("Relationship", &input.relationship)?,
        email: optional_email(input.email)?,
        phone: optional_text(input.phone),
        beneficiary_type: input.beneficiary_type,
    };

    limits::ensure_within_limit(conn, user_id, LimitedResource::Beneficiaries).await?;
    let estate = estates::ensure_primary(conn, user_id).await?;

    let beneficiary = beneficiaries::create_beneficiary(conn, estate.id, new_beneficiary).await?;
    info!(
        user_id,
        estate_id = estate.id,
        beneficiary_id = beneficiary.id,
        "beneficiary created"
    );
    Ok(beneficiary)
}

/// Removing a beneficiary also removes their allocations.
pub async fn delete<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    beneficiary_id: i64,
) -> Result<(), DomainError> {
    let estate_id = estates::require_primary_id(
        conn,
        user_id,
        NotFoundKind::Beneficiary,
        "Beneficiary not found",
    )
    .await?;
    if !beneficiaries::delete_beneficiary(conn, estate_id, beneficiary_id).await? {
        return Err(DomainError::not_found(
            NotFoundKind::Beneficiary,
            "Beneficiary not found",
        ));
    }
    info!(user_id, beneficiary_id, "beneficiary deleted");
    Ok(())
}
