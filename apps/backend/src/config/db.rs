use std::fmt;
use std::str::FromStr;

use super::{ProcessEnv, VarSource};
use crate::error::AppError;

pub const DEFAULT_SQLITE_PATH: &str = "restaurant_api.db";

/// Which backing store the server runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DbKind {
    Postgres,
    SqliteFile,
    /// SQLite `:memory:` database, lost on shutdown.
    #[default]
    SqliteMemory,
}

impl DbKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            DbKind::Postgres => "postgres",
            DbKind::SqliteFile => "sqlite-file",
            DbKind::SqliteMemory => "sqlite-memory",
        }
    }
}

impl fmt::Display for DbKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DbKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DbKind::Postgres),
            "sqlite-file" | "sqlite" => Ok(DbKind::SqliteFile),
            "sqlite-memory" | "memory" => Ok(DbKind::SqliteMemory),
            other => Err(AppError::config(format!(
                "Unknown RESTAURANT_API_DB value '{other}' (expected postgres, sqlite-file or sqlite-memory)"
            ))),
        }
    }
}

/// Builds the connection URL for `kind` from the process environment.
pub fn db_url(kind: DbKind) -> Result<String, AppError> {
    db_url_from(kind, &ProcessEnv)
}

pub fn db_url_from(kind: DbKind, vars: &dyn VarSource) -> Result<String, AppError> {
    match kind {
        DbKind::Postgres => must_var(vars, "DATABASE_URL"),
        DbKind::SqliteFile => {
            let path = vars
                .var("SQLITE_PATH")
                .unwrap_or_else(|| DEFAULT_SQLITE_PATH.to_string());
            Ok(format!("sqlite://{path}?mode=rwc"))
        }
        DbKind::SqliteMemory => Ok("sqlite::memory:".to_string()),
    }
}

/// Get required variable or return error
pub(crate) fn must_var(vars: &dyn VarSource, name: &str) -> Result<String, AppError> {
    vars.var(name)
        .ok_or_else(|| AppError::config(format!("Required environment variable '{name}' is not set")))
}
