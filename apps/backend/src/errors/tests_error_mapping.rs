// Error mapping without HTTP or database dependencies
use crate::domain::limits::LimitedResource;
use crate::errors::domain::{
    ConflictKind, DomainError, ForbiddenKind, InfraErrorKind, NotFoundKind, ValidationKind,
};
use crate::{AppError, ErrorCode};

#[test]
fn maps_validation_to_400() {
    let de = DomainError::validation(ValidationKind::InvalidPercentage, "bad percentage");
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::InvalidPercentage);
    assert_eq!(app.status().as_u16(), 400);

    let other: AppError = DomainError::validation_other("nope").into();
    assert_eq!(other.code(), ErrorCode::ValidationError);
}

#[test]
fn existing_user_is_a_bad_request() {
    let de = DomainError::validation(ValidationKind::UserAlreadyExists, "User already exists");
    let app: AppError = de.into();
    assert_eq!(app.code().as_str(), "USER_ALREADY_EXISTS");
    assert_eq!(app.status().as_u16(), 400);
}

#[test]
fn invalid_credentials_is_401() {
    let de = DomainError::validation(ValidationKind::InvalidCredentials, "bad");
    let app: AppError = de.into();
    assert_eq!(app.status().as_u16(), 401);
}

#[test]
fn maps_conflicts() {
    let app: AppError = DomainError::conflict(ConflictKind::UniqueEmail, "email exists").into();
    assert_eq!(app.code().as_str(), "UNIQUE_EMAIL");
    assert_eq!(app.status().as_u16(), 409);

    let app: AppError =
        DomainError::conflict(ConflictKind::Other("x".into()), "generic conflict").into();
    assert_eq!(app.code().as_str(), "CONFLICT");
}

#[test]
fn maps_not_found_per_entity() {
    let cases = [
        (NotFoundKind::Asset, "ASSET_NOT_FOUND"),
        (NotFoundKind::Beneficiary, "BENEFICIARY_NOT_FOUND"),
        (NotFoundKind::Document, "DOCUMENT_NOT_FOUND"),
        (NotFoundKind::Other("Record".into()), "NOT_FOUND"),
    ];
    for (kind, code) in cases {
        let app: AppError = DomainError::not_found(kind, "missing").into();
        assert_eq!(app.code().as_str(), code);
        assert_eq!(app.status().as_u16(), 404);
    }
}

#[test]
fn limit_reached_is_403() {
    let de = DomainError::forbidden(
        ForbiddenKind::LimitReached {
            resource: LimitedResource::Assets,
            limit: 3,
        },
        "limit",
    );
    let app: AppError = de.into();
    assert_eq!(app.code(), ErrorCode::LimitReached);
    assert_eq!(app.status().as_u16(), 403);
}

#[test]
fn maps_infra() {
    let app: AppError = DomainError::infra(InfraErrorKind::Timeout, "timeout").into();
    assert_eq!(app.code().as_str(), "DB_TIMEOUT");
    assert_eq!(app.status().as_u16(), 504);

    let app: AppError = DomainError::infra(InfraErrorKind::DbUnavailable, "down").into();
    assert_eq!(app.code().as_str(), "DB_UNAVAILABLE");
    assert_eq!(app.status().as_u16(), 503);

    let app: AppError = DomainError::infra(InfraErrorKind::DataCorruption, "bad").into();
    assert_eq!(app.code().as_str(), "DATA_CORRUPTION");
    assert_eq!(app.status().as_u16(), 500);

    let app: AppError = DomainError::infra(InfraErrorKind::Other("x".into()), "other").into();
    assert_eq!(app.code().as_str(), "INTERNAL_ERROR");
}
