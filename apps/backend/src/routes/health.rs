use actix_web::{web, HttpResponse};
use migration::get_latest_migration_version;
use sea_orm::ConnectionTrait;
use serde::Serialize;
use time::OffsetDateTime;

use crate::error::AppError;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    app_version: &'static str,
    db: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    db_error: Option<String>,
    migrations: String,
    time: String,
}

async fn health(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let time = OffsetDateTime::now_utc()
        .format(&time::format_description::well_known::Rfc3339)
        .unwrap_or_else(|_| "unknown".to_string());

    let (db, db_error, migrations) = match app_state.db() {
        None => ("memory".to_string(), None, "n/a".to_string()),
        Some(conn) => {
            let ping = conn
                .query_one(sea_orm::Statement::from_string(
                    conn.get_database_backend(),
                    "SELECT 1 as health_check".to_string(),
                ))
                .await;
            match ping {
                Ok(_) => {
                    let migration_version = match get_latest_migration_version(conn).await {
                        Ok(Some(version)) => version,
                        Ok(None) => "no_migrations".to_string(),
                        Err(_) => "unknown".to_string(),
                    };
                    ("ok".to_string(), None, migration_version)
                }
                Err(e) => (
                    "error".to_string(),
                    Some(format!("DB query failed: {e}")),
                    "unknown".to_string(),
                ),
            }
        }
    };

    Ok(HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        app_version: env!("CARGO_PKG_VERSION"),
        db,
        db_error,
        migrations,
        time,
    }))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health));
}
