pub use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::Statement;
pub use sea_orm_migration::sea_orm;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection};

mod m20240301_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20240301_000001_init::Migration)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Reset,
    Refresh,
    Status,
}

impl std::str::FromStr for MigrationCommand {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "up" => Ok(Self::Up),
            "down" => Ok(Self::Down),
            "fresh" => Ok(Self::Fresh),
            "reset" => Ok(Self::Reset),
            "refresh" => Ok(Self::Refresh),
            "status" => Ok(Self::Status),
            other => Err(format!(
                "unknown command: {other}. Use: up | down | fresh | reset | refresh | status"
            )),
        }
    }
}

/// Run a migration command against an already-connected database.
/// Used by the CLI, the backend bootstrap and tests.
pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let before = get_db_diagnostics(db).await?;

    tracing::info!(
        cmd = ?command,
        backend = %before.backend,
        db = %before.name,
        defined = before.defined_migrations_count,
        applied = before.applied_migrations_count,
        "migration starting"
    );

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Reset => Migrator::reset(db).await,
        MigrationCommand::Refresh => Migrator::refresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            if command != MigrationCommand::Status {
                let after = get_db_diagnostics(db).await?;
                tracing::info!(
                    cmd = ?command,
                    applied = after.applied_migrations_count,
                    "migration finished"
                );
            }
            Ok(())
        }
        Err(e) => {
            tracing::error!(cmd = ?command, error = %e, "migration failed");
            Err(e)
        }
    }
}

#[derive(Debug)]
struct DbDiagnostics {
    backend: String,
    name: String,
    applied_migrations_count: usize,
    defined_migrations_count: usize,
}

async fn get_db_diagnostics(db: &DatabaseConnection) -> Result<DbDiagnostics, DbErr> {
    let backend = format!("{:?}", db.get_database_backend());

    let name = match db.get_database_backend() {
        sea_orm_migration::sea_orm::DatabaseBackend::Postgres => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("select current_database() as name"),
            );
            match db.query_one(stmt).await? {
                Some(row) => row.try_get("", "name")?,
                None => "<unknown>".to_string(),
            }
        }
        sea_orm_migration::sea_orm::DatabaseBackend::Sqlite => {
            let stmt = Statement::from_string(
                db.get_database_backend(),
                String::from("SELECT file FROM pragma_database_list WHERE name = 'main'"),
            );
            match db.query_one(stmt).await? {
                Some(row) => match row.try_get::<String>("", "file") {
                    Ok(file) if file.is_empty() => ":memory:".to_string(),
                    Ok(file) => file,
                    Err(_) => "<unknown>".to_string(),
                },
                None => "<unknown>".to_string(),
            }
        }
        _ => "<unsupported>".to_string(),
    };

    Ok(DbDiagnostics {
        backend,
        name,
        applied_migrations_count: count_applied_migrations(db).await.unwrap_or(0),
        defined_migrations_count: Migrator::migrations().len(),
    })
}

/// Number of applied migrations; 0 if the migration table doesn't exist yet.
pub async fn count_applied_migrations(db: &DatabaseConnection) -> Result<usize, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.len()),
        Err(DbErr::Exec(_)) => Ok(0),
        Err(e) => Err(e),
    }
}

/// Name of the latest applied migration, if any.
pub async fn get_latest_migration_version(
    db: &DatabaseConnection,
) -> Result<Option<String>, DbErr> {
    match Migrator::get_applied_migrations(db).await {
        Ok(migrations) => Ok(migrations.last().map(|m| m.name().to_string())),
        Err(DbErr::Exec(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
