use clap::{Parser, ValueEnum};
use migration::sea_orm::{ConnectOptions, Database};
use migration::{migrate, MigrationCommand};

#[derive(Clone, Copy, ValueEnum)]
enum Db {
    Postgres,
    SqliteFile,
}

#[derive(Parser)]
#[command(name = "migration-cli")]
#[command(about = "Restaurant API database migration tool")]
struct Args {
    /// Migration command to run: up | down | fresh | reset | refresh | status
    command: String,

    /// Database type
    #[arg(short, long, value_enum, default_value = "postgres")]
    db: Db,

    /// Connection URL for postgres
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,

    /// Database file for sqlite-file
    #[arg(long, env = "SQLITE_PATH", default_value = "restaurant_api.db")]
    sqlite_path: String,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stdout)
        .without_time()
        .with_target(false)
        .with_env_filter("migration=info,sqlx=warn")
        .init();

    let args = Args::parse();

    let command = match args.command.parse::<MigrationCommand>() {
        Ok(command) => command,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(2);
        }
    };

    let url = match args.db {
        Db::Postgres => match args.database_url {
            Some(url) => url,
            None => {
                eprintln!("DATABASE_URL (or --database-url) is required for postgres");
                std::process::exit(2);
            }
        },
        Db::SqliteFile => format!("sqlite://{}?mode=rwc", args.sqlite_path),
    };

    let mut opts = ConnectOptions::new(url);
    opts.sqlx_logging(false);

    let db = match Database::connect(opts).await {
        Ok(db) => db,
        Err(e) => {
            eprintln!("Failed to connect: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = migrate(&db, command).await {
        eprintln!("Migration failed: {e}");
        std::process::exit(1);
    }
}
