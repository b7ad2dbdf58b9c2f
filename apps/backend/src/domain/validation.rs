//! Input rules shared by the services.

use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::errors::domain::{DomainError, ValidationKind};

pub const MIN_PASSWORD_LEN: usize = 8;

/// Rounding slack when summing allocation percentages.
const PERCENT_EPSILON: f64 = 1e-9;

fn email_regex() -> &'static Regex {
    static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
        #[allow(clippy::unwrap_used)]
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    });
    &EMAIL_REGEX
}

/// Trim, NFKC-normalize and lowercase.
pub fn normalize_email(email: &str) -> String {
    email.trim().nfkc().collect::<String>().to_lowercase()
}

pub fn validate_email(email: &str) -> Result<(), DomainError> {
    if email_regex().is_match(email) {
        Ok(())
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidEmail,
            "Invalid email address",
        ))
    }
}

pub fn validate_password(password: &str) -> Result<(), DomainError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(DomainError::validation(
            ValidationKind::WeakPassword,
            format!("Password must be at least {MIN_PASSWORD_LEN} characters"),
        ));
    }
    Ok(())
}

/// Trimmed value, or a MissingField error naming `field`.
pub fn required(field: &str, value: &str) -> Result<String, DomainError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation(
            ValidationKind::MissingField,
            format!("{field} is required"),
        ));
    }
    Ok(trimmed.to_string())
}

/// Empty or whitespace-only strings become `None`.
pub fn optional_text(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Like [`optional_text`], and a present value must be a valid email.
pub fn optional_email(value: Option<String>) -> Result<Option<String>, DomainError> {
    match optional_text(value) {
        Some(email) => {
            validate_email(&email)?;
            Ok(Some(email))
        }
        None => Ok(None),
    }
}

/// Monetary amounts must be finite and non-negative.
pub fn money(field: &str, value: Option<f64>) -> Result<Option<f64>, DomainError> {
    match value {
        Some(v) if !v.is_finite() || v < 0.0 => Err(DomainError::validation(
            ValidationKind::InvalidAmount,
            format!("{field} must be a non-negative number"),
        )),
        other => Ok(other),
    }
}

pub fn percentage(value: f64) -> Result<f64, DomainError> {
    if value.is_finite() && value > 0.0 && value <= 100.0 {
        Ok(value)
    } else {
        Err(DomainError::validation(
            ValidationKind::InvalidPercentage,
            "Percentage must be greater than 0 and at most 100",
        ))
    }
}

/// `others` is the sum already allocated to other beneficiaries of the asset.
pub fn allocation_total(others: f64, requested: f64) -> Result<(), DomainError> {
    let total = others + requested;
    if total > 100.0 + PERCENT_EPSILON {
        return Err(DomainError::validation(
            ValidationKind::AllocationExceedsTotal,
            format!("Allocations for this asset would total {total:.2}%, which exceeds 100%"),
        ));
    }
    Ok(())
}
