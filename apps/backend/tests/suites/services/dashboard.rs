use beqst::db::txn::with_txn;
use beqst::domain::NextAction;
use beqst::services::{allocations, assets, beneficiaries, dashboard, estates, executors};
use beqst::AppError;

use crate::support::factory::{asset_input, beneficiary_input, executor_input, seed_user};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn summary_does_not_create_estate() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            let summary = dashboard::summary(txn, user.id).await?;
            assert_eq!(summary.estate_id, None);
            assert_eq!(summary.next_action.action, NextAction::AddAsset);
            assert!(estates::primary(txn, user.id).await?.is_none());

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn complete_estate_shares_add_up() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            let house = assets::create(txn, user.id, asset_input("House", Some(80_000.0))).await?;
            let isa = assets::create(txn, user.id, asset_input("ISA", Some(20_000.0))).await?;
            let alice = beneficiaries::create(txn, user.id, beneficiary_input("Alice")).await?;
            let bob = beneficiaries::create(txn, user.id, beneficiary_input("Bob")).await?;
            executors::create(txn, user.id, executor_input("Eve")).await?;

            allocations::set(txn, user.id, house.id, alice.id, 75.0).await?;
            allocations::set(txn, user.id, house.id, bob.id, 25.0).await?;
            allocations::set(txn, user.id, isa.id, bob.id, 100.0).await?;

            let summary = dashboard::summary(txn, user.id).await?;
            assert_eq!(summary.total_assets, 100_000.0);
            assert_eq!(summary.net_worth, 100_000.0);
            assert_eq!(summary.unallocated, 0.0);
            assert_eq!(summary.completion_percentage, 100);
            assert_eq!(summary.next_action.action, NextAction::ViewEstate);

            let shares: Vec<(i64, f64, f64)> = summary
                .inheritance
                .iter()
                .map(|e| (e.beneficiary_id, e.amount, e.share))
                .collect();
            assert_eq!(shares, vec![(alice.id, 60_000.0, 60.0), (bob.id, 40_000.0, 40.0)]);

            Ok::<_, AppError>(())
        })
    })
    .await
}
