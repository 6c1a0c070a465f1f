//! Error codes for the Restaurant API.
//!
//! Add new codes here; never pass ad-hoc strings as error codes.
//! All codes are SCREAMING_SNAKE_CASE and map 1:1 to the strings that
//! appear in HTTP responses.

use core::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Authentication & Authorization
    /// Missing or malformed Bearer token
    UnauthorizedMissingBearer,
    /// Invalid JWT token
    UnauthorizedInvalidJwt,
    /// JWT token has expired
    UnauthorizedExpiredJwt,
    /// Acting user is not the owner of the resource
    NotResourceOwner,
    /// Role not allowed to perform this operation
    InsufficientRole,

    // Request Validation
    /// One or more fields failed validation
    ValidationError,
    /// Malformed request (body or query could not be parsed)
    BadRequest,
    /// Restaurant id in the path is not a positive integer
    InvalidRestaurantId,
    /// Unknown email or wrong password at login
    InvalidCredentials,

    // Resource Not Found
    /// Restaurant not found
    RestaurantNotFound,
    /// General not found error
    NotFound,

    // Conflicts
    /// Email already registered
    UniqueEmail,
    /// Generic conflict (fallback for unmatched conflicts)
    Conflict,

    // System Errors
    /// Database error
    DbError,
    /// Database unavailable
    DbUnavailable,
    /// Internal server error
    Internal,
    /// Configuration error
    ConfigError,
}

impl ErrorCode {
    /// The exact string that appears in HTTP responses.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::UnauthorizedMissingBearer => "UNAUTHORIZED_MISSING_BEARER",
            Self::UnauthorizedInvalidJwt => "UNAUTHORIZED_INVALID_JWT",
            Self::UnauthorizedExpiredJwt => "UNAUTHORIZED_EXPIRED_JWT",
            Self::NotResourceOwner => "NOT_RESOURCE_OWNER",
            Self::InsufficientRole => "INSUFFICIENT_ROLE",

            Self::ValidationError => "VALIDATION_ERROR",
            Self::BadRequest => "BAD_REQUEST",
            Self::InvalidRestaurantId => "INVALID_RESTAURANT_ID",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",

            Self::RestaurantNotFound => "RESTAURANT_NOT_FOUND",
            Self::NotFound => "NOT_FOUND",

            Self::UniqueEmail => "UNIQUE_EMAIL",
            Self::Conflict => "CONFLICT",

            Self::DbError => "DB_ERROR",
            Self::DbUnavailable => "DB_UNAVAILABLE",
            Self::Internal => "INTERNAL",
            Self::ConfigError => "CONFIG_ERROR",
        }
    }

    /// Every code, for uniqueness checks.
    pub const ALL: &'static [ErrorCode] = &[
        Self::UnauthorizedMissingBearer,
        Self::UnauthorizedInvalidJwt,
        Self::UnauthorizedExpiredJwt,
        Self::NotResourceOwner,
        Self::InsufficientRole,
        Self::ValidationError,
        Self::BadRequest,
        Self::InvalidRestaurantId,
        Self::InvalidCredentials,
        Self::RestaurantNotFound,
        Self::NotFound,
        Self::UniqueEmail,
        Self::Conflict,
        Self::DbError,
        Self::DbUnavailable,
        Self::Internal,
        Self::ConfigError,
    ];
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ErrorCode> for &'static str {
    fn from(code: ErrorCode) -> Self {
        code.as_str()
    }
}
