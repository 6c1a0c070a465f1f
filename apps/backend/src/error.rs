use actix_web::error::ResponseError;
use actix_web::http::{header, StatusCode};
use actix_web::HttpResponse;
use serde::Serialize;
use thiserror::Error;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::errors::ErrorCode;
use crate::infra::db_errors::map_db_err;
use crate::trace_ctx;
use crate::validation::FieldErrors;

/// RFC 7807 body returned for every error response.
#[derive(Serialize)]
pub struct ProblemDetails {
    #[serde(rename = "type")]
    pub type_: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    pub code: String,
    pub trace_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation error: {detail}")]
    Validation {
        code: ErrorCode,
        detail: String,
        errors: FieldErrors,
    },
    #[error("Bad request: {detail}")]
    BadRequest { code: ErrorCode, detail: String },
    #[error("Not found: {detail}")]
    NotFound { code: ErrorCode, detail: String },
    #[error("UnauthorizedMissingBearer")]
    UnauthorizedMissingBearer,
    #[error("UnauthorizedInvalidJwt")]
    UnauthorizedInvalidJwt,
    #[error("UnauthorizedExpiredJwt")]
    UnauthorizedExpiredJwt,
    #[error("Forbidden: {detail}")]
    Forbidden { code: ErrorCode, detail: String },
    #[error("Conflict: {detail}")]
    Conflict { code: ErrorCode, detail: String },
    #[error("Database error: {detail}")]
    Db { detail: String },
    #[error("Database unavailable")]
    DbUnavailable,
    #[error("Internal error: {detail}")]
    Internal { detail: String },
    #[error("Configuration error: {detail}")]
    Config { detail: String },
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Validation { code, .. } => *code,
            AppError::BadRequest { code, .. } => *code,
            AppError::NotFound { code, .. } => *code,
            AppError::UnauthorizedMissingBearer => ErrorCode::UnauthorizedMissingBearer,
            AppError::UnauthorizedInvalidJwt => ErrorCode::UnauthorizedInvalidJwt,
            AppError::UnauthorizedExpiredJwt => ErrorCode::UnauthorizedExpiredJwt,
            AppError::Forbidden { code, .. } => *code,
            AppError::Conflict { code, .. } => *code,
            AppError::Db { .. } => ErrorCode::DbError,
            AppError::DbUnavailable => ErrorCode::DbUnavailable,
            AppError::Internal { .. } => ErrorCode::Internal,
            AppError::Config { .. } => ErrorCode::ConfigError,
        }
    }

    fn detail(&self) -> String {
        match self {
            AppError::Validation { detail, .. } => detail.clone(),
            AppError::BadRequest { detail, .. } => detail.clone(),
            AppError::NotFound { detail, .. } => detail.clone(),
            AppError::UnauthorizedMissingBearer => "Missing or malformed Bearer token".to_string(),
            AppError::UnauthorizedInvalidJwt => "Invalid JWT".to_string(),
            AppError::UnauthorizedExpiredJwt => "Token expired".to_string(),
            AppError::Forbidden { detail, .. } => detail.clone(),
            AppError::Conflict { detail, .. } => detail.clone(),
            // Storage internals never leak to clients
            AppError::Db { .. } => "Database error".to_string(),
            AppError::DbUnavailable => "Database unavailable".to_string(),
            AppError::Internal { .. } => "Internal server error".to_string(),
            AppError::Config { .. } => "Server misconfigured".to_string(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::UnauthorizedMissingBearer
            | AppError::UnauthorizedInvalidJwt
            | AppError::UnauthorizedExpiredJwt => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Db { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::DbUnavailable => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Config { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Field-level failures; empty for every other variant.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Validation { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn invalid(errors: FieldErrors) -> Self {
        Self::Validation {
            code: ErrorCode::ValidationError,
            detail: "One or more validation errors occurred".to_string(),
            errors,
        }
    }

    pub fn bad_request(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::BadRequest {
            code,
            detail: detail.into(),
        }
    }

    pub fn not_found(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::NotFound {
            code,
            detail: detail.into(),
        }
    }

    pub fn unauthorized_missing_bearer() -> Self {
        Self::UnauthorizedMissingBearer
    }

    pub fn unauthorized_invalid_jwt() -> Self {
        Self::UnauthorizedInvalidJwt
    }

    pub fn unauthorized_expired_jwt() -> Self {
        Self::UnauthorizedExpiredJwt
    }

    pub fn forbidden(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Forbidden {
            code,
            detail: detail.into(),
        }
    }

    pub fn conflict(code: ErrorCode, detail: impl Into<String>) -> Self {
        Self::Conflict {
            code,
            detail: detail.into(),
        }
    }

    pub fn db(detail: impl Into<String>) -> Self {
        Self::Db {
            detail: detail.into(),
        }
    }

    pub fn db_unavailable() -> Self {
        Self::DbUnavailable
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        Self::Internal {
            detail: detail.into(),
        }
    }

    pub fn config(detail: impl Into<String>) -> Self {
        Self::Config {
            detail: detail.into(),
        }
    }

    fn humanize_code(code: &str) -> String {
        code.split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    None => String::new(),
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl From<DomainError> for AppError {
    fn from(e: DomainError) -> Self {
        match e {
            DomainError::Validation(detail) => AppError::Validation {
                code: ErrorCode::ValidationError,
                detail,
                errors: FieldErrors::new(),
            },
            DomainError::Conflict(ConflictKind::UniqueEmail, detail) => {
                AppError::conflict(ErrorCode::UniqueEmail, detail)
            }
            DomainError::Conflict(_, detail) => AppError::conflict(ErrorCode::Conflict, detail),
            DomainError::NotFound(NotFoundKind::Restaurant, detail) => {
                AppError::not_found(ErrorCode::RestaurantNotFound, detail)
            }
            DomainError::NotFound(_, detail) => AppError::not_found(ErrorCode::NotFound, detail),
            DomainError::Infra(InfraErrorKind::DbUnavailable, _) => AppError::db_unavailable(),
            DomainError::Infra(_, detail) => AppError::db(detail),
        }
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(e: sea_orm::DbErr) -> Self {
        AppError::from(map_db_err(e))
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        self.status()
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status();
        let code = self.code().as_str();
        let trace_id = trace_ctx::trace_id();

        let problem_details = ProblemDetails {
            type_: format!("https://restaurant-api.dev/errors/{code}"),
            title: Self::humanize_code(code),
            status: status.as_u16(),
            detail: self.detail(),
            code: code.to_string(),
            trace_id: trace_id.clone(),
            errors: self.field_errors().cloned(),
        };

        let mut builder = HttpResponse::build(status);
        builder
            .content_type("application/problem+json")
            .insert_header(("x-trace-id", trace_id));

        if status == StatusCode::UNAUTHORIZED {
            builder.insert_header((header::WWW_AUTHENTICATE, "Bearer"));
        }

        builder.json(problem_details)
    }
}
