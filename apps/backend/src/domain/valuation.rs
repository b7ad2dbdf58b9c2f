//! Estate valuation: totals, net worth and the inheritance split.
//!
//! All functions are pure reductions over records already loaded by the
//! caller. Missing monetary values count as zero.

use std::collections::BTreeMap;

use serde::Serialize;

/// One beneficiary's percentage of one asset.
#[derive(Debug, Clone, PartialEq)]
pub struct AllocationShare {
    pub beneficiary_id: i64,
    pub beneficiary_name: String,
    pub percentage: f64,
}

/// An asset's value together with its allocations.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssetAllocations {
    pub value: Option<f64>,
    pub allocations: Vec<AllocationShare>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BeneficiaryShare {
    pub beneficiary_id: i64,
    pub beneficiary_name: String,
    pub amount: f64,
}

/// Record counts for one estate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EstateCounts {
    pub assets: u64,
    pub liabilities: u64,
    pub beneficiaries: u64,
    pub executors: u64,
    pub documents: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum NextAction {
    AddAsset,
    AddBeneficiary,
    AddExecutor,
    ViewEstate,
}

impl NextAction {
    pub const fn label(&self) -> &'static str {
        match self {
            NextAction::AddAsset => "Add your first asset",
            NextAction::AddBeneficiary => "Add a beneficiary",
            NextAction::AddExecutor => "Designate an executor",
            NextAction::ViewEstate => "View your estate",
        }
    }

    pub const fn href(&self) -> &'static str {
        match self {
            NextAction::AddAsset => "/assets/new",
            NextAction::AddBeneficiary => "/beneficiaries/new",
            NextAction::AddExecutor => "/executors/new",
            NextAction::ViewEstate => "/assets",
        }
    }
}

fn value_or_zero(v: Option<f64>) -> f64 {
    match v {
        Some(x) if x.is_finite() => x,
        _ => 0.0,
    }
}

pub fn total_asset_value<I>(values: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    values.into_iter().map(value_or_zero).sum()
}

pub fn total_liability_amount<I>(amounts: I) -> f64
where
    I: IntoIterator<Item = Option<f64>>,
{
    amounts.into_iter().map(value_or_zero).sum()
}

pub fn net_worth(total_assets: f64, total_liabilities: f64) -> f64 {
    total_assets - total_liabilities
}

/// Sums `value * percentage / 100` per beneficiary, over assets with a
/// positive value and allocations with a positive percentage. Ordered by
/// beneficiary id.
pub fn beneficiary_inheritance(assets: &[AssetAllocations]) -> Vec<BeneficiaryShare> {
    let mut by_id: BTreeMap<i64, BeneficiaryShare> = BTreeMap::new();

    for asset in assets {
        let value = value_or_zero(asset.value);
        if value <= 0.0 {
            continue;
        }
        for alloc in &asset.allocations {
            if !(alloc.percentage.is_finite() && alloc.percentage > 0.0) {
                continue;
            }
            let entry = by_id
                .entry(alloc.beneficiary_id)
                .or_insert_with(|| BeneficiaryShare {
                    beneficiary_id: alloc.beneficiary_id,
                    beneficiary_name: alloc.beneficiary_name.clone(),
                    amount: 0.0,
                });
            entry.amount += value * alloc.percentage / 100.0;
        }
    }

    by_id.into_values().collect()
}

/// Value not covered by any allocation, clamped at zero.
pub fn unallocated_value(assets: &[AssetAllocations]) -> f64 {
    let total = total_asset_value(assets.iter().map(|a| a.value));
    let allocated: f64 = beneficiary_inheritance(assets)
        .iter()
        .map(|s| s.amount)
        .sum();
    (total - allocated).max(0.0)
}

/// 30 for any asset, 35 for any beneficiary, 35 for any executor.
pub fn completion_percentage(counts: &EstateCounts) -> u8 {
    let mut pct: u8 = 0;
    if counts.assets > 0 {
        pct += 30;
    }
    if counts.beneficiaries > 0 {
        pct += 35;
    }
    if counts.executors > 0 {
        pct += 35;
    }
    pct.min(100)
}

pub fn next_action(counts: &EstateCounts) -> NextAction {
    if counts.assets == 0 {
        NextAction::AddAsset
    } else if counts.beneficiaries == 0 {
        NextAction::AddBeneficiary
    } else if counts.executors == 0 {
        NextAction::AddExecutor
    } else {
        NextAction::ViewEstate
    }
}
