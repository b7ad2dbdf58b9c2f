//! Property tests for the inheritance split (pure domain, no DB).
//!
//! - The split never exceeds the total asset value
//! - Fully allocated estates distribute exactly their value
//! - Allocated plus unallocated value equals the total

use proptest::prelude::*;

use crate::domain::test_gens::{
    fully_allocated_asset, partially_allocated_asset, proptest_config,
};
use crate::domain::valuation::{beneficiary_inheritance, total_asset_value, unallocated_value};

fn tolerance(total: f64) -> f64 {
    1e-6 * total.max(1.0)
}

proptest! {
    #![proptest_config(proptest_config())]

    #[test]
    fn prop_split_never_exceeds_total(
        assets in proptest::collection::vec(partially_allocated_asset(), 0..6),
    ) {
        let total = total_asset_value(assets.iter().map(|a| a.value));
        let split: f64 = beneficiary_inheritance(&assets).iter().map(|s| s.amount).sum();
        prop_assert!(split <= total + tolerance(total), "split {} > total {}", split, total);
        prop_assert!(split >= 0.0);
    }

    #[test]
    fn prop_fully_allocated_split_equals_total(
        assets in proptest::collection::vec(fully_allocated_asset(), 1..6),
    ) {
        let total = total_asset_value(assets.iter().map(|a| a.value));
        let split: f64 = beneficiary_inheritance(&assets).iter().map(|s| s.amount).sum();
        prop_assert!((split - total).abs() <= tolerance(total), "split {} != total {}", split, total);
    }

    #[test]
    fn prop_allocated_plus_unallocated_is_total(
        assets in proptest::collection::vec(partially_allocated_asset(), 0..6),
    ) {
        let total = total_asset_value(assets.iter().map(|a| a.value));
        let split: f64 = beneficiary_inheritance(&assets).iter().map(|s| s.amount).sum();
        let rest = unallocated_value(&assets);
        prop_assert!((split + rest - total).abs() <= tolerance(total));
    }

    #[test]
    fn prop_split_is_ordered_and_unique(
        assets in proptest::collection::vec(partially_allocated_asset(), 0..6),
    ) {
        let split = beneficiary_inheritance(&assets);
        for pair in split.windows(2) {
            prop_assert!(pair[0].beneficiary_id < pair[1].beneficiary_id);
        }
    }
}
