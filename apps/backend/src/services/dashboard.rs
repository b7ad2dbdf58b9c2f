//! Estate summary: counts, totals, net worth and the inheritance split.

use sea_orm::ConnectionTrait;
use serde::Serialize;

use crate::domain::valuation::{
    beneficiary_inheritance, completion_percentage, net_worth, next_action,
    total_asset_value, total_liability_amount, unallocated_value, AllocationShare,
    AssetAllocations, EstateCounts, NextAction,
};
use crate::errors::domain::DomainError;
use crate::repos::{beneficiaries, documents, executors, liabilities};
use crate::services::assets::{load_with_allocations, AssetWithAllocations};
use crate::services::estates;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceEntry {
    pub beneficiary_id: i64,
    pub beneficiary_name: String,
    pub amount: f64,
    /// Share of the total asset value, 0 when there is no value
    pub share: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NextActionView {
    pub action: NextAction,
    pub label: &'static str,
    pub href: &'static str,
}

impl From<NextAction> for NextActionView {
    fn from(action: NextAction) -> Self {
        Self {
            action,
            label: action.label(),
            href: action.href(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub estate_id: Option<i64>,
    pub counts: EstateCounts,
    pub total_assets: f64,
    pub total_liabilities: f64,
    pub net_worth: f64,
    pub inheritance: Vec<InheritanceEntry>,
    pub unallocated: f64,
    pub completion_percentage: u8,
    pub next_action: NextActionView,
}

impl Dashboard {
    fn empty() -> Self {
        let counts = EstateCounts::default();
        Self {
            estate_id: None,
            counts,
            total_assets: 0.0,
            total_liabilities: 0.0,
            net_worth: 0.0,
            inheritance: Vec::new(),
            unallocated: 0.0,
            completion_percentage: completion_percentage(&counts),
            next_action: next_action(&counts).into(),
        }
    }
}

fn to_valuation_input(assets: &[AssetWithAllocations]) -> Vec<AssetAllocations> {
    assets
        .iter()
        .map(|a| AssetAllocations {
            value: a.asset.value,
            allocations: a
                .allocations
                .iter()
                .map(|s| AllocationShare {
                    beneficiary_id: s.beneficiary_id,
                    beneficiary_name: s.beneficiary_name.clone(),
                    percentage: s.percentage,
                })
                .collect(),
        })
        .collect()
}

/// Does not create an estate; without one every figure is zero.
pub async fn summary<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Dashboard, DomainError> {
    let Some(estate) = estates::primary(conn, user_id).await? else {
        return Ok(Dashboard::empty());
    };

    let assets = load_with_allocations(conn, estate.id).await?;
    let liabilities = liabilities::list_by_estate(conn, estate.id).await?;
    let counts = EstateCounts {
        assets: assets.len() as u64,
        liabilities: liabilities.len() as u64,
        beneficiaries: beneficiaries::count_by_estate(conn, estate.id).await?,
        executors: executors::count_by_estate(conn, estate.id).await?,
        documents: documents::count_by_estate(conn, estate.id).await?,
    };

    let valuation = to_valuation_input(&assets);
    let total_assets = total_asset_value(valuation.iter().map(|a| a.value));
    let total_liabilities = total_liability_amount(liabilities.iter().map(|l| l.amount));

    let inheritance = beneficiary_inheritance(&valuation)
        .into_iter()
        .map(|s| InheritanceEntry {
            share: if total_assets > 0.0 {
                s.amount / total_assets * 100.0
            } else {
                0.0
            },
            beneficiary_id: s.beneficiary_id,
            beneficiary_name: s.beneficiary_name,
            amount: s.amount,
        })
        .collect();

    Ok(Dashboard {
        estate_id: Some(estate.id),
        counts,
        total_assets,
        total_liabilities,
        net_worth: net_worth(total_assets, total_liabilities),
        inheritance,
        unallocated: unallocated_value(&valuation),
        completion_percentage: completion_percentage(&counts),
        next_action: next_action(&counts).into(),
    })
}
