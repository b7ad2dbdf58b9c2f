use beqst::db::txn::with_txn;
use beqst::domain::LiabilityType;
use beqst::errors::domain::{DomainError, ValidationKind};
use beqst::services::liabilities::{self, LiabilityInput};
use beqst::services::assets;
use beqst::AppError;

use crate::support::factory::{asset_input, seed_user};
use crate::support::test_state::build_test_state;

fn loan(name: &str, linked_asset_id: Option<i64>) -> LiabilityInput {
    LiabilityInput {
        name: name.to_string(),
        liability_type: LiabilityType::Loan,
        amount: Some(1_000.0),
        creditor: Some("  ".to_string()),
        linked_asset_id,
    }
}

#[tokio::test]
async fn liabilities_list_newest_first() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            let first = liabilities::create(txn, user.id, loan("First", None)).await?;
            let second = liabilities::create(txn, user.id, loan("Second", None)).await?;
            assert_eq!(first.creditor, None);

            let listed = liabilities::list(txn, user.id).await?;
            let ids: Vec<i64> = listed.iter().map(|l| l.id).collect();
            assert_eq!(ids, vec![second.id, first.id]);

            liabilities::delete(txn, user.id, first.id).await?;
            assert_eq!(liabilities::list(txn, user.id).await?.len(), 1);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn linked_asset_must_share_the_estate() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let owner = seed_user(txn).await?;
            let house = assets::create(txn, owner.id, asset_input("House", Some(1.0))).await?;

            let linked = liabilities::create(txn, owner.id, loan("Mortgage", Some(house.id))).await?;
            assert_eq!(linked.linked_asset_id, Some(house.id));

            let other = seed_user(txn).await?;
            let err = liabilities::create(txn, other.id, loan("Sneaky", Some(house.id)))
                .await
                .unwrap_err();
            assert!(matches!(
                err,
                DomainError::Validation(ValidationKind::InvalidLink, _)
            ));

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn deleting_linked_asset_keeps_liability() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            let house = assets::create(txn, user.id, asset_input("House", Some(1.0))).await?;
            liabilities::create(txn, user.id, loan("Mortgage", Some(house.id))).await?;

            assets::delete(txn, user.id, house.id).await?;
            let listed = liabilities::list(txn, user.id).await?;
            assert_eq!(listed.len(), 1);
            assert_eq!(listed[0].linked_asset_id, None);

            Ok::<_, AppError>(())
        })
    })
    .await
}
