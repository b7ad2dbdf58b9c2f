use beqst::db::txn::with_txn;
use beqst::domain::{LimitedResource, Tier};
use beqst::services::{documents, executors, limits};
use beqst::{AppError, ErrorCode};

use crate::support::factory::{document_input, executor_input, seed_user};
use crate::support::test_state::build_test_state;

#[tokio::test]
async fn usage_without_estate_is_all_zero() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            let view = limits::usage(txn, user.id).await?;
            assert_eq!(view.tier, Tier::Free);
            assert_eq!(view.resources.len(), LimitedResource::ALL.len());
            assert!(view.resources.iter().all(|r| r.used == 0 && !r.reached));

            let storage = limits::storage(txn, user.id).await?;
            assert_eq!(storage.used_bytes, 0);
            assert_eq!(storage.document_count, 0);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn executor_limit_is_one() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            executors::create(txn, user.id, executor_input("Eve")).await?;

            let err = AppError::from(
                executors::create(txn, user.id, executor_input("Frank"))
                    .await
                    .unwrap_err(),
            );
            assert_eq!(err.code(), ErrorCode::LimitReached);

            let view = limits::usage(txn, user.id).await?;
            let executors = view
                .resources
                .iter()
                .find(|r| r.resource == LimitedResource::Executors)
                .expect("executors entry");
            assert_eq!((executors.used, executors.limit), (1, 1));
            assert_eq!(executors.remaining, 0);
            assert!(executors.reached);
            assert_eq!(limits::current_count(txn, user.id, LimitedResource::Executors).await?, 1);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn storage_sums_file_sizes() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = seed_user(txn).await?;
            let mib = 1024 * 1024;
            documents::record(txn, user.id, &user.email, document_input("a.pdf", 20 * mib))
                .await?;
            documents::record(txn, user.id, &user.email, document_input("b.pdf", 22 * mib))
                .await?;

            let storage = limits::storage(txn, user.id).await?;
            assert_eq!(storage.used_bytes, 42 * 1024 * 1024);
            assert!((storage.used_percentage - 84.0).abs() < 1e-9);
            assert!(storage.near_limit);
            assert_eq!(storage.document_count, 2);
            assert!(!storage.at_document_limit);

            Ok::<_, AppError>(())
        })
    })
    .await
}
