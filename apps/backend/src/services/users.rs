//! Registration, password login and profile updates.

use std::time::SystemTime;

use sea_orm::ConnectionTrait;
use tracing::{debug, info, warn};

use crate::auth::{hash_password, mint_access_token, verify_password};
use crate::domain::validation::{normalize_email, required, validate_email, validate_password};
use crate::error::AppError;
use crate::errors::domain::{ConflictKind, DomainError, NotFoundKind, ValidationKind};
use crate::logging::pii::Redacted;
use crate::repos::users::{self, User};
use crate::state::SecurityConfig;

const INVALID_CREDENTIALS: &str = "Invalid email or password";

fn user_exists() -> DomainError {
    DomainError::validation(ValidationKind::UserAlreadyExists, "User already exists")
}

/// Creates an account with a hashed password. An email that is already
/// registered is a validation failure, not a conflict.
pub async fn register<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let email = normalize_email(email);
    validate_email(&email)?;
    validate_password(password)?;

    if users::find_by_email(conn, &email).await?.is_some() {
        debug!(email = %Redacted(&email), "registration for existing email");
        return Err(user_exists().into());
    }

    let password_hash = hash_password(password)?;
    let user = match users::create_user(conn, &email, &password_hash).await {
        Ok(user) => user,
        // Lost a race with a concurrent registration
        Err(DomainError::Conflict(ConflictKind::UniqueEmail, _)) => {
            return Err(user_exists().into())
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id, email = %Redacted(&user.email), "user registered");
    Ok(user)
}

/// Checks the password and mints an access token.
pub async fn login<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    password: &str,
    security: &SecurityConfig,
) -> Result<(User, String), AppError> {
    let user = authenticate(conn, email, password).await?;
    let token = mint_access_token(user.id, &user.email, SystemTime::now(), security)?;
    Ok((user, token))
}

/// Unknown email, a user without a password, and a wrong password all fail
/// with the same error.
pub async fn authenticate<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    email: &str,
    password: &str,
) -> Result<User, AppError> {
    let email = normalize_email(email);
    let invalid = || DomainError::validation(ValidationKind::InvalidCredentials, INVALID_CREDENTIALS);

    let Some(user) = users::find_by_email(conn, &email).await? else {
        debug!(email = %Redacted(&email), "login for unknown email");
        return Err(invalid().into());
    };
    let Some(hash) = user.password_hash.as_deref() else {
        warn!(user_id = user.id, "login for user without password");
        return Err(invalid().into());
    };
    if !verify_password(password, hash)? {
        debug!(user_id = user.id, "wrong password");
        return Err(invalid().into());
    }
    Ok(user)
}

pub async fn find<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<User, DomainError> {
    users::find_by_id(conn, user_id)
        .await?
        .ok_or_else(|| DomainError::not_found(NotFoundKind::User, "User not found"))
}

/// Sets first and last name; the display name becomes `"first last"`.
pub async fn update_profile<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    first_name: &str,
    last_name: &str,
) -> Result<User, DomainError> {
    let first_name = required("First name", first_name)?;
    let last_name = required("Last name", last_name)?;
    find(conn, user_id).await?;

    let user = users::update_profile(conn, user_id, first_name, last_name).await?;
    info!(user_id, "profile updated");
    Ok(user)
}
