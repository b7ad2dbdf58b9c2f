//! Error codes for the Beqst API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! Every code is SCREAMING_SNAKE_CASE and maps 1:1 to the string that
//! appears in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Authentication required
    Unauthorized,
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Email/password pair did not match
    InvalidCredentials,
    /// Access denied
    Forbidden,
    /// Token subject no longer exists
    ForbiddenUserNotFound,
    /// Free-tier ceiling reached for a resource
    LimitReached,
    /// Too many requests from this client
    RateLimited,

    // Request Validation
    /// General validation error
    ValidationError,
    /// General bad request error
    BadRequest,
    /// Invalid email address
    InvalidEmail,
    /// Password does not meet the minimum length
    WeakPassword,
    /// Email already registered
    UserAlreadyExists,
    /// Money value negative or not finite
    InvalidAmount,
    /// Allocation percentage outside (0, 100]
    InvalidPercentage,
    /// Allocations for one asset would exceed 100 %
    AllocationExceedsTotal,
    /// Linked record missing or outside the caller's estate
    InvalidLink,
    /// Required field empty
    MissingField,
    /// Path id segment is not an integer
    InvalidId,

    // Resource Not Found
    /// General not found error
    NotFound,
    UserNotFound,
    EstateNotFound,
    AssetNotFound,
    LiabilityNotFound,
    BeneficiaryNotFound,
    ExecutorNotFound,
    AllocationNotFound,
    DocumentNotFound,
    /// Generic 404 for DB-driven not-found
    RecordNotFound,

    // Conflicts
    /// Unique email constraint
    UniqueEmail,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Database timeout (gateway timeout)
    DbTimeout,
    /// Internal server error
    Internal,
    /// Internal server error (explicit problem code)
    InternalError,
    /// Configuration error
    ConfigError,
    /// Data corruption detected
    DataCorruption,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::Forbidden => "FORBIDDEN",
            Self::ForbiddenUserNotFound => "FORBIDDEN_USER_NOT_FOUND",
            Self::LimitReached => "LIMIT_REACHED",
            Self::RateLimited => "RATE_LIMITED",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword => "WEAK_PASSWORD",
            Self::UserAlreadyExists => "USER_ALREADY_EXISTS",
            Self::InvalidAmount => "INVALID_AMOUNT",
            Self::InvalidPercentage => "INVALID_PERCENTAGE",
            Self::AllocationExceedsTotal => "ALLOCATION_EXCEEDS_TOTAL",
            Self::InvalidLink => "INVALID_LINK",
            Self::MissingField => "MISSING_FIELD",
            Self::InvalidId => "INVALID_ID",

            Self::NotFound => "NOT_FOUND",
            Self::UserNotFound => "USER_NOT_FOUND",
            Self::EstateNotFound => "ESTATE_NOT_FOUND",
            Self::AssetNotFound => "ASSET_NOT_FOUND",
            Self::LiabilityNotFound => "LIABILITY_NOT_FOUND",
            Self::BeneficiaryNotFound => "BENEFICIARY_NOT_FOUND",
            Self::ExecutorNotFound => "EXECUTOR_NOT_FOUND",
            Self::AllocationNotFound => "ALLOCATION_NOT_FOUND",
            Self::DocumentNotFound => "DOCUMENT_NOT_FOUND",
            Self::RecordNotFound => "RECORD_NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::DbTimeout => "DB_TIMEOUT",
            Self::Internal => "INTERNAL",
            Self::InternalError => "INTERNAL_ERROR",
            Self::ConfigError => "CONFIG_ERROR",
            Self::DataCorruption => "DATA_CORRUPTION",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
