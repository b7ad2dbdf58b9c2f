use beqst::db::txn::with_txn;
use beqst::services::{estates, users};
use beqst::AppError;

use crate::support::factory::seed_user;
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn first_listing_creates_one_estate() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            assert!(estates::primary(txn, user.id).await?.is_none());

            let first = estates::list_or_create(txn, user.id).await?;
            assert_eq!(first.len(), 1);
            assert_eq!(first[0].owner_id, user.id);
            assert_eq!(first[0].name, format!("{}'s Estate", user.email));

            let second = estates::list_or_create(txn, user.id).await?;
            assert_eq!(second.len(), 1);
            assert_eq!(second[0].id, first[0].id);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn estate_name_prefers_display_name() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            users::update_profile(txn, user.id, "Ada", "Lovelace").await?;

            let estate = estates::ensure_primary(txn, user.id).await?;
            assert_eq!(estate.name, "Ada Lovelace's Estate");

            Ok::<_, AppError>(())
        })
    })
    .await
}
