use std::future::Future;
use std::time::Duration;

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::{info, warn};

use crate::config::db::{db_url, DbKind};
use crate::error::AppError;

const CONNECT_ATTEMPTS: u32 = 5;
const CONNECT_RETRY_INTERVAL_MS: u64 = 500;

/// Retry a connection attempt with fixed interval delays.
/// Returns the error of the last attempt once retries are exhausted.
async fn retry_connection<T, F, Fut>(
    mut connect_fn: F,
    max_attempts: u32,
    interval_ms: u64,
) -> Result<T, AppError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, AppError>>,
{
    let mut attempt = 1;
    loop {
        match connect_fn().await {
            Ok(result) => {
                if attempt > 1 {
                    info!(attempts = attempt, interval_ms, "connection_retry=success");
                }
                return Ok(result);
            }
            Err(e) if attempt >= max_attempts => return Err(e),
            Err(_) => {
                warn!(attempt, max_attempts, interval_ms, "connection_retry=failed");
                tokio::time::sleep(Duration::from_millis(interval_ms)).await;
                attempt += 1;
            }
        }
    }
}

fn connect_options(kind: DbKind, url: String) -> ConnectOptions {
    let mut options = ConnectOptions::new(url);
    options.sqlx_logging(false);
    match kind {
        // Every pooled connection to `sqlite::memory:` is a separate database.
        DbKind::SqliteMemory => {
            options.max_connections(1).min_connections(1);
        }
        DbKind::SqliteFile => {
            options.max_connections(4);
        }
        DbKind::Postgres => {
            options
                .max_connections(10)
                .connect_timeout(Duration::from_secs(5));
        }
    }
    options
}

/// Connect to `url` without running migrations.
pub async fn connect_url(kind: DbKind, url: &str) -> Result<DatabaseConnection, AppError> {
    let attempts = if kind == DbKind::Postgres {
        CONNECT_ATTEMPTS
    } else {
        1
    };
    retry_connection(
        || async { Ok(Database::connect(connect_options(kind, url.to_string())).await?) },
        attempts,
        CONNECT_RETRY_INTERVAL_MS,
    )
    .await
}

/// Connect using the URL derived from the environment and apply pending
/// migrations. Single entrypoint used by the server.
pub async fn bootstrap_db(kind: DbKind) -> Result<DatabaseConnection, AppError> {
    let url = db_url(kind)?;
    bootstrap_url(kind, &url).await
}

pub async fn bootstrap_url(kind: DbKind, url: &str) -> Result<DatabaseConnection, AppError> {
    let conn = connect_url(kind, url).await?;
    migrate(&conn, MigrationCommand::Up).await?;
    info!(db = %kind, "Database connected and migrated");
    Ok(conn)
}
