use actix_web::http::StatusCode;
use beqst::db::txn::with_txn;
use beqst::services::users;
use beqst::{verify_access_token, AppError, ErrorCode};
use backend_test_support::unique_helpers::unique_email;

use crate::support::test_state::{build_test_state, test_security};

#[tokio::test]
async fn register_then_login() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let security = test_security();

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let email = unique_email("Alice");
            let user = users::register(txn, &format!("  {}  ", email.to_uppercase()), "hunter22")
                .await?;
            assert_eq!(user.email, email.to_lowercase());
            assert!(user.password_hash.as_deref().is_some_and(|h| h.starts_with("$argon2")));

            let (logged_in, token) = users::login(txn, &email, "hunter22", &security).await?;
            assert_eq!(logged_in.id, user.id);
            let claims = verify_access_token(&token, &security)?;
            assert_eq!(claims.sub, user.id.to_string());
            assert_eq!(claims.email, user.email);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn duplicate_registration_is_rejected() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let email = unique_email("dup");
            users::register(txn, &email, "password1").await?;

            let err = users::register(txn, &email.to_uppercase(), "password2")
                .await
                .unwrap_err();
            assert_eq!(err.code(), ErrorCode::UserAlreadyExists);
            assert_eq!(err.status(), StatusCode::BAD_REQUEST);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn wrong_password_and_unknown_email_look_alike() -> Result<(), AppError> {
    let state = build_test_state().await?;
    let security = test_security();

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let email = unique_email("carol");
            users::register(txn, &email, "correct-horse").await?;

            let wrong = users::login(txn, &email, "battery-staple", &security)
                .await
                .unwrap_err();
            let unknown = users::login(txn, &unique_email("nobody"), "x", &security)
                .await
                .unwrap_err();

            assert_eq!(wrong.code(), ErrorCode::InvalidCredentials);
            assert_eq!(unknown.code(), wrong.code());
            assert_eq!(unknown.to_string(), wrong.to_string());
            assert_eq!(wrong.status(), StatusCode::UNAUTHORIZED);

            Ok::<_, AppError>(())
        })
    })
    .await
}

#[tokio::test]
async fn update_profile_sets_display_name() -> Result<(), AppError> {
    let state = build_test_state().await?;

    with_txn(None, &state, |txn| {
        Box::pin(async move {
            let user = users::register(txn, &unique_email("dave"), "password1").await?;

            let updated = users::update_profile(txn, user.id, " Dave ", "Jones").await?;
            assert_eq!(updated.first_name.as_deref(), Some("Dave"));
            assert_eq!(updated.last_name.as_deref(), Some("Jones"));
            assert_eq!(updated.name.as_deref(), Some("Dave Jones"));

            let err = AppError::from(
                users::update_profile(txn, user.id, "Dave", "  ")
                    .await
                    .unwrap_err(),
            );
            assert_eq!(err.code(), ErrorCode::MissingField);
            assert!(err.to_string().contains("Last name is required"));

            Ok::<_, AppError>(())
        })
    })
    .await
}
