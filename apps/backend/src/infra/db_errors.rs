//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `crate::errors::domain::DomainError`
//! here, and higher layers then map `DomainError` to `AppError` via `From`.

use tracing::{error, warn};

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::logging::pii::Redacted;
use crate::trace_ctx;

fn mentions_sqlstate(msg: &str, code: &str) -> bool {
    msg.contains(code) || msg.contains(&format!("SQLSTATE({code})"))
}

/// Extract table.column from SQLite "UNIQUE constraint failed: table.column" messages.
fn extract_sqlite_table_column(error_msg: &str) -> Option<&str> {
    const MARKER: &str = "UNIQUE constraint failed: ";
    let start = error_msg.find(MARKER)? + MARKER.len();
    error_msg[start..]
        .split(|c: char| c.is_whitespace() || c == '"' || c == ',')
        .next()
        .filter(|s| !s.is_empty())
}

fn unique_violation_kind(error_msg: &str) -> Option<(ConflictKind, &'static str)> {
    let sqlite_hit = matches!(extract_sqlite_table_column(error_msg), Some("users.email"));
    // Postgres names the constraint after the table/column pair.
    let postgres_hit = error_msg.contains("users_email_key");
    (sqlite_hit || postgres_hit).then_some((ConflictKind::UniqueEmail, "Email already registered"))
}

/// Translate a `DbErr` into a `DomainError` with sanitized, PII-safe detail.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    let error_msg = e.to_string();
    let trace_id = trace_ctx::trace_id();

    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            return DomainError::not_found(
                NotFoundKind::Other("Record".into()),
                "Record not found",
            );
        }
        sea_orm::DbErr::ConnectionAcquire(_) | sea_orm::DbErr::Conn(_) => {
            warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database unavailable");
            return DomainError::infra(InfraErrorKind::DbUnavailable, "Database unavailable");
        }
        _ => {}
    }

    if mentions_sqlstate(&error_msg, "23505")
        || error_msg.contains("duplicate key value violates unique constraint")
        || error_msg.contains("UNIQUE constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unique constraint violation");

        if let Some((kind, detail)) = unique_violation_kind(&error_msg) {
            return DomainError::conflict(kind, detail);
        }
        return DomainError::conflict(
            ConflictKind::Other("Unique".into()),
            "Unique constraint violation",
        );
    }

    if mentions_sqlstate(&error_msg, "23503") || error_msg.contains("FOREIGN KEY constraint failed")
    {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Foreign key constraint violation");
        return DomainError::validation("Foreign key constraint violation");
    }

    if error_msg.contains("timeout") || error_msg.contains("pool timed out") {
        warn!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Database timeout or pool issue");
        return DomainError::infra(InfraErrorKind::Timeout, "Database timeout");
    }

    error!(trace_id = %trace_id, raw_error = %Redacted(&error_msg), "Unhandled database error");
    DomainError::infra(
        InfraErrorKind::Other("DbErr".into()),
        "Database operation failed",
    )
}
