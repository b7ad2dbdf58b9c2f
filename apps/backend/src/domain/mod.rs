//! Domain layer: pure estate types and calculations. No HTTP or SeaORM here.

pub mod enums;
pub mod limits;
pub mod validation;
pub mod valuation;

#[cfg(test)]
mod tests_props_valuation;

pub use enums::{
    AccessAction, AssetCategory, AssetSubType, BeneficiaryType, DocumentLinkType, DocumentType,
    ExecutorRole, LiabilityType,
};
pub use limits::{check_limit, LimitCheck, LimitedResource, Tier};
pub use valuation::{
    beneficiary_inheritance, completion_percentage, net_worth, next_action,
    total_asset_value, total_liability_amount, unallocated_value, AllocationShare,
    AssetAllocations, BeneficiaryShare, EstateCounts, NextAction,
};
