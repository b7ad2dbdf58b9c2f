use beqst::db::txn::with_txn;
use beqst::services::{allocations, assets, beneficiaries};
use beqst::AppError;

use crate::support::factory::{asset_input, beneficiary_input, seed_user};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn total_inheritance_follows_allocations() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            let house = assets::create(txn, user.id, asset_input("House", Some(300_000.0))).await?;
            let car = assets::create(txn, user.id, asset_input("Car", None)).await?;
            let alice = beneficiaries::create(txn, user.id, beneficiary_input("Alice")).await?;

            allocations::set(txn, user.id, house.id, alice.id, 10.0).await?;
            allocations::set(txn, user.id, car.id, alice.id, 100.0).await?;

            let listed = beneficiaries::list(txn, user.id).await?;
            assert_eq!(listed.len(), 1);
            let view = &listed[0];
            assert_eq!(view.allocations.len(), 2);
            assert_eq!(view.total_inheritance, 30_000.0);
            let car_share = view
                .allocations
                .iter()
                .find(|a| a.asset_id == car.id)
                .expect("car allocation");
            assert_eq!(car_share.amount, 0.0);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn deleting_beneficiary_frees_allocation() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            let house = assets::create(txn, user.id, asset_input("House", Some(100.0))).await?;
            let alice = beneficiaries::create(txn, user.id, beneficiary_input("Alice")).await?;
            let bob = beneficiaries::create(txn, user.id, beneficiary_input("Bob")).await?;
            allocations::set(txn, user.id, house.id, alice.id, 100.0).await?;

            // Full, so Bob cannot get a share yet
            assert!(allocations::set(txn, user.id, house.id, bob.id, 1.0).await.is_err());

            beneficiaries::delete(txn, user.id, alice.id).await?;
            let asset = assets::get(txn, user.id, house.id).await?;
            assert!(asset.allocations.is_empty());
            assert_eq!(asset.allocated_percentage, 0.0);

            allocations::set(txn, user.id, house.id, bob.id, 100.0).await?;

            Ok::<_, AppError>(())
        })
    })
    .await
}
